use std::path::Path;

use serde::Serialize;

use crate::input::{InputError, read_tsv};
use crate::model::records::ClinicalVariantRecord;

#[derive(Debug, Default, Clone, Serialize)]
pub struct NullCounts {
    pub gene: usize,
    pub variant: usize,
    pub chemicals: usize,
    pub phenotypes: usize,
}

#[derive(Debug, Default, Clone)]
pub struct ClinicalVariants {
    pub records: Vec<ClinicalVariantRecord>,
    pub nulls: NullCounts,
}

pub fn read_clinical_variants(path: &Path) -> Result<ClinicalVariants, InputError> {
    let table = read_tsv(path, "clinical variants")?;
    let gene_idx = table.require("gene")?;
    let variant_idx = table.require("variant")?;
    let chemicals_idx = table.require("chemicals")?;
    let phenotypes_idx = table.require("phenotypes")?;

    let mut out = ClinicalVariants {
        records: Vec::with_capacity(table.rows.len()),
        nulls: NullCounts::default(),
    };
    for row in &table.rows {
        let record = ClinicalVariantRecord {
            gene: row.cell(gene_idx),
            variant: row.cell(variant_idx),
            chemicals: row.cell(chemicals_idx),
            phenotypes: row.cell(phenotypes_idx),
        };
        out.nulls.gene += usize::from(record.gene.is_none());
        out.nulls.variant += usize::from(record.variant.is_none());
        out.nulls.chemicals += usize::from(record.chemicals.is_none());
        out.nulls.phenotypes += usize::from(record.phenotypes.is_none());
        out.records.push(record);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/variants.rs"]
mod tests;
