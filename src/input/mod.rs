pub mod drugs;
pub mod genes;
pub mod variants;

use std::path::{Path, PathBuf};
use std::{fmt, io};

use csv::StringRecord;
use thiserror::Error;

/// Cell values that tabular exports use to mean "no value".
pub const NULL_MARKERS: [&str; 7] = ["NA", "N/A", "NaN", "nan", "null", "NULL", "None"];

#[derive(Error, Debug)]
pub enum InputError {
    #[error("missing required file: {0}")]
    MissingFile(String),
    #[error("{table} table {path} missing required column: {column}")]
    MissingColumn {
        table: &'static str,
        path: String,
        column: &'static str,
    },
    #[error("invalid TSV row at line {line}: {reason}")]
    InvalidTsvRow { line: usize, reason: String },
    #[error("unsupported gzip input without feature enabled: {0}")]
    GzipNotEnabled(PathBuf),
    #[error("tsv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub fn open_reader(path: &Path) -> Result<Box<dyn io::BufRead>, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingFile(path_display(path).to_string()));
    }
    let file = std::fs::File::open(path)?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        #[cfg(feature = "gz")]
        {
            let decoder = flate2::read::GzDecoder::new(file);
            return Ok(Box::new(io::BufReader::new(decoder)));
        }
        #[cfg(not(feature = "gz"))]
        {
            return Err(InputError::GzipNotEnabled(path.to_path_buf()));
        }
    }
    Ok(Box::new(io::BufReader::new(file)))
}

pub fn path_display(path: &Path) -> impl fmt::Display + '_ {
    path.to_string_lossy()
}

/// Trimmed cell value, or `None` when it is blank or a null marker.
pub fn null_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || NULL_MARKERS.contains(&trimmed) {
        return None;
    }
    Some(trimmed.to_string())
}

#[derive(Debug, Clone)]
pub struct TsvRow {
    pub line: usize,
    record: StringRecord,
}

impl TsvRow {
    pub fn cell(&self, idx: usize) -> Option<String> {
        self.record.get(idx).and_then(null_cell)
    }

    pub fn optional_cell(&self, idx: Option<usize>) -> Option<String> {
        idx.and_then(|i| self.cell(i))
    }
}

/// A header-addressed tab-separated table held in memory.
#[derive(Debug, Clone)]
pub struct TsvTable {
    pub table: &'static str,
    pub path: PathBuf,
    columns: Vec<String>,
    pub rows: Vec<TsvRow>,
}

impl TsvTable {
    pub fn require(&self, column: &'static str) -> Result<usize, InputError> {
        self.find(column).ok_or_else(|| InputError::MissingColumn {
            table: self.table,
            path: path_display(&self.path).to_string(),
            column,
        })
    }

    pub fn find(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

pub fn read_tsv(path: &Path, table: &'static str) -> Result<TsvTable, InputError> {
    let reader = open_reader(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let columns = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| InputError::InvalidTsvRow {
            line: e.position().map_or(idx + 2, |p| p.line() as usize),
            reason: e.to_string(),
        })?;
        let line = record
            .position()
            .map_or(idx + 2, |p| p.line() as usize);
        if record.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        rows.push(TsvRow { line, record });
    }

    Ok(TsvTable {
        table,
        path: path.to_path_buf(),
        columns,
        rows,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/mod.rs"]
mod tests;
