use std::path::Path;

use crate::input::{InputError, read_tsv};
use crate::model::catalog::{Catalog, KeyFold};
use crate::model::records::{Gene, GeneCatalog};

pub const GENE_SYMBOL_COLUMN: &str = "Symbol";

pub fn read_gene_catalog(path: &Path) -> Result<GeneCatalog, InputError> {
    let table = read_tsv(path, "gene catalog")?;
    let symbol_idx = table.require(GENE_SYMBOL_COLUMN)?;

    let mut null_keys = 0usize;
    let mut rows = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        match row.cell(symbol_idx) {
            Some(symbol) => rows.push((row.line, Gene { symbol })),
            None => null_keys += 1,
        }
    }
    Ok(Catalog::build(rows, KeyFold::Exact, null_keys))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/genes.rs"]
mod tests;
