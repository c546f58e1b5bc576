use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::variant::VariantPolicy;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub data: DataSection,
    #[serde(default)]
    pub normalize: NormalizeSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataSection {
    pub drugs: Option<PathBuf>,
    pub genes: Option<PathBuf>,
    pub clinical_variants: Option<PathBuf>,
    pub drug_details: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NormalizeSection {
    pub policy: Option<VariantPolicy>,
}

/// Where the drug details table comes from, which decides whether its
/// absence is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsSource {
    Explicit(PathBuf),
    Default(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub drugs: PathBuf,
    pub genes: PathBuf,
    pub clinical_variants: PathBuf,
    pub drug_details: DetailsSource,
}
