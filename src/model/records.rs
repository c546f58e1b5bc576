use serde::Serialize;

use crate::model::catalog::{Catalog, Keyed};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drug {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gene {
    pub symbol: String,
}

/// Mechanism and contraindications for one drug, both free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrugDetail {
    pub name: String,
    pub mechanism: Option<String>,
    pub contraindications: Option<String>,
}

/// One clinical annotation row. Many rows share a (gene, variant) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClinicalVariantRecord {
    pub gene: Option<String>,
    pub variant: Option<String>,
    pub chemicals: Option<String>,
    pub phenotypes: Option<String>,
}

impl Keyed for Drug {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Keyed for Gene {
    fn key(&self) -> &str {
        &self.symbol
    }
}

impl Keyed for DrugDetail {
    fn key(&self) -> &str {
        &self.name
    }
}

pub type DrugCatalog = Catalog<Drug>;
pub type GeneCatalog = Catalog<Gene>;
pub type DrugDetails = Catalog<DrugDetail>;
