use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::defs::{ConfigFile, DataPaths, DetailsSource};

pub const CONFIG_FILE_NAME: &str = "kira-pgx.toml";
pub const DRUGS_FILE_NAME: &str = "drugs.tsv";
pub const GENES_FILE_NAME: &str = "genes.tsv";
pub const CLINICAL_VARIANTS_FILE_NAME: &str = "clinicalVariants.tsv";
pub const DRUG_DETAILS_FILE_NAME: &str = "drugDetails.tsv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub fn load_config(path: &Path) -> Result<ConfigFile, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&text)?;
    Ok(parsed)
}

/// Looks for the config file next to the data; absent is not an error.
pub fn default_config_path(data_dir: &Path) -> Option<PathBuf> {
    let path = data_dir.join(CONFIG_FILE_NAME);
    path.is_file().then_some(path)
}

impl DataPaths {
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            drugs: data_dir.join(DRUGS_FILE_NAME),
            genes: data_dir.join(GENES_FILE_NAME),
            clinical_variants: data_dir.join(CLINICAL_VARIANTS_FILE_NAME),
            drug_details: DetailsSource::Default(data_dir.join(DRUG_DETAILS_FILE_NAME)),
        }
    }

    /// Overlays config entries; relative paths resolve against `base_dir`.
    pub fn apply_config(&mut self, config: &ConfigFile, base_dir: &Path) {
        let data = &config.data;
        if let Some(p) = &data.drugs {
            self.drugs = resolve(base_dir, p);
        }
        if let Some(p) = &data.genes {
            self.genes = resolve(base_dir, p);
        }
        if let Some(p) = &data.clinical_variants {
            self.clinical_variants = resolve(base_dir, p);
        }
        if let Some(p) = &data.drug_details {
            self.drug_details = DetailsSource::Explicit(resolve(base_dir, p));
        }
    }
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/config/loader.rs"]
mod tests;
