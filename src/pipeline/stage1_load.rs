use std::collections::BTreeSet;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::defs::{DataPaths, DetailsSource};
use crate::input::InputError;
use crate::input::drugs::{read_drug_catalog, read_drug_details};
use crate::input::genes::read_gene_catalog;
use crate::input::variants::{NullCounts, read_clinical_variants};
use crate::model::contraindications;
use crate::model::records::{ClinicalVariantRecord, DrugCatalog, DrugDetails, GeneCatalog};

#[derive(Debug, Error)]
pub enum Stage1Error {
    #[error("input error: {0}")]
    Input(#[from] InputError),
}

/// Every table loaded for a session. Read-only once built; queries borrow it.
#[derive(Debug, Clone)]
pub struct DatasetCtx {
    pub drugs_path: PathBuf,
    pub genes_path: PathBuf,
    pub variants_path: PathBuf,
    pub details_path: Option<PathBuf>,
    pub drugs: DrugCatalog,
    pub genes: GeneCatalog,
    pub variants: Vec<ClinicalVariantRecord>,
    pub variant_nulls: NullCounts,
    pub details: Option<DrugDetails>,
}

pub fn run_stage1(paths: &DataPaths) -> Result<DatasetCtx, Stage1Error> {
    let drugs = read_drug_catalog(&paths.drugs)?;
    let genes = read_gene_catalog(&paths.genes)?;
    let variants = read_clinical_variants(&paths.clinical_variants)?;

    if !drugs.duplicates.is_empty() {
        warn!(count = drugs.duplicates.len(), "duplicate drug names, first wins");
    }
    if !genes.duplicates.is_empty() {
        warn!(count = genes.duplicates.len(), "duplicate gene symbols, first wins");
    }

    let (details, details_path) = match &paths.drug_details {
        DetailsSource::Explicit(path) => (Some(read_drug_details(path)?), Some(path.clone())),
        DetailsSource::Default(path) if path.is_file() => {
            (Some(read_drug_details(path)?), Some(path.clone()))
        }
        DetailsSource::Default(path) => {
            info!(
                expected = %path.to_string_lossy(),
                "drug details table not found, contraindication checks disabled"
            );
            (None, None)
        }
    };

    Ok(DatasetCtx {
        drugs_path: paths.drugs.clone(),
        genes_path: paths.genes.clone(),
        variants_path: paths.clinical_variants.clone(),
        details_path,
        drugs,
        genes,
        variants: variants.records,
        variant_nulls: variants.nulls,
        details,
    })
}

impl DatasetCtx {
    pub fn drug_names(&self) -> Vec<String> {
        self.drugs.names()
    }

    pub fn gene_names(&self) -> Vec<String> {
        self.genes.names()
    }

    pub fn medical_conditions(&self) -> Vec<String> {
        self.details
            .as_ref()
            .map(contraindications::medical_conditions)
            .unwrap_or_default()
    }

    pub fn genes_for_drug(&self, drug: &str) -> BTreeSet<String> {
        crate::pipeline::stage2_filter::genes_for_drug(&self.variants, &self.genes, drug)
    }

    pub fn has_contraindication<S: AsRef<str>>(&self, drug: &str, conditions: &[S]) -> bool {
        self.details
            .as_ref()
            .is_some_and(|d| contraindications::has_contraindication(d, drug, conditions))
    }

    pub fn get_mechanism(&self, drug: &str) -> Option<&str> {
        self.details
            .as_ref()
            .and_then(|d| contraindications::get_mechanism(d, drug))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
