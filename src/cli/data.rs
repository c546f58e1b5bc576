use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::config::defs::{DataPaths, DetailsSource};
use crate::config::loader::{default_config_path, load_config};
use crate::model::variant::VariantPolicy;
use crate::pipeline::stage1_load::{DatasetCtx, run_stage1};

#[derive(Args, Debug)]
pub struct DataArgs {
    /// Directory holding drugs.tsv, genes.tsv and clinicalVariants.tsv
    #[arg(long, default_value = ".")]
    pub(crate) data_dir: PathBuf,

    /// Optional TOML config (defaults to kira-pgx.toml in the data dir)
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,

    /// Drug catalog TSV
    #[arg(long)]
    drugs: Option<PathBuf>,

    /// Gene catalog TSV
    #[arg(long)]
    genes: Option<PathBuf>,

    /// Clinical variant annotations TSV
    #[arg(long)]
    variants: Option<PathBuf>,

    /// Drug details TSV (mechanisms, contraindications)
    #[arg(long)]
    drug_details: Option<PathBuf>,

    /// Variant identifier normalization
    #[arg(long, value_enum)]
    pub(crate) policy: Option<PolicyArg>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyArg {
    StripGenePrefix,
    StarSuffix,
}

impl From<PolicyArg> for VariantPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::StripGenePrefix => VariantPolicy::StripGenePrefix,
            PolicyArg::StarSuffix => VariantPolicy::StarSuffix,
        }
    }
}

impl DataArgs {
    /// Defaults, then config file, then flags.
    pub fn resolve(&self) -> anyhow::Result<(DataPaths, VariantPolicy)> {
        let mut paths = DataPaths::in_dir(&self.data_dir);
        let mut policy = VariantPolicy::default();

        let config_path = match &self.config {
            Some(path) => Some(path.clone()),
            None => default_config_path(&self.data_dir),
        };
        if let Some(path) = config_path {
            let config = load_config(&path)?;
            let base_dir = path.parent().map(PathBuf::from).unwrap_or_default();
            paths.apply_config(&config, &base_dir);
            if let Some(p) = config.normalize.policy {
                policy = p;
            }
            info!(config = %path.to_string_lossy(), "loaded config");
        }

        if let Some(p) = &self.drugs {
            paths.drugs = p.clone();
        }
        if let Some(p) = &self.genes {
            paths.genes = p.clone();
        }
        if let Some(p) = &self.variants {
            paths.clinical_variants = p.clone();
        }
        if let Some(p) = &self.drug_details {
            paths.drug_details = DetailsSource::Explicit(p.clone());
        }
        if let Some(p) = self.policy {
            policy = p.into();
        }
        Ok((paths, policy))
    }

    pub fn load(&self) -> anyhow::Result<(DatasetCtx, VariantPolicy)> {
        let (paths, policy) = self.resolve()?;

        let start = Instant::now();
        info!(stage = "stage1_load", "starting stage");
        let ctx = run_stage1(&paths)?;
        info!(
            stage = "stage1_load",
            elapsed_ms = start.elapsed().as_millis(),
            drugs = ctx.drugs.len(),
            genes = ctx.genes.len(),
            variants = ctx.variants.len(),
            drug_details = ctx.details.as_ref().map_or(0, |d| d.len()),
            "finished stage"
        );
        Ok((ctx, policy))
    }
}
