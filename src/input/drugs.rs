use std::path::Path;

use crate::input::{InputError, read_tsv};
use crate::model::catalog::{Catalog, KeyFold};
use crate::model::records::{Drug, DrugCatalog, DrugDetail, DrugDetails};

pub const DRUG_NAME_COLUMN: &str = "Name";
pub const MECHANISM_COLUMN: &str = "mechanisms";
pub const CONTRAINDICATIONS_COLUMN: &str = "contraindications";

pub fn read_drug_catalog(path: &Path) -> Result<DrugCatalog, InputError> {
    let table = read_tsv(path, "drug catalog")?;
    let name_idx = table.require(DRUG_NAME_COLUMN)?;

    let mut null_keys = 0usize;
    let mut rows = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        match row.cell(name_idx) {
            Some(name) => rows.push((row.line, Drug { name })),
            None => null_keys += 1,
        }
    }
    Ok(Catalog::build(rows, KeyFold::CaseInsensitive, null_keys))
}

/// Mechanism and contraindication columns are optional; a table without
/// them simply yields null fields.
pub fn read_drug_details(path: &Path) -> Result<DrugDetails, InputError> {
    let table = read_tsv(path, "drug details")?;
    let name_idx = table.require(DRUG_NAME_COLUMN)?;
    let mechanism_idx = table.find(MECHANISM_COLUMN);
    let contra_idx = table.find(CONTRAINDICATIONS_COLUMN);

    let mut null_keys = 0usize;
    let mut rows = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let Some(name) = row.cell(name_idx) else {
            null_keys += 1;
            continue;
        };
        rows.push((
            row.line,
            DrugDetail {
                name,
                mechanism: row.optional_cell(mechanism_idx),
                contraindications: row.optional_cell(contra_idx),
            },
        ));
    }
    Ok(Catalog::build(rows, KeyFold::CaseInsensitive, null_keys))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/drugs.rs"]
mod tests;
