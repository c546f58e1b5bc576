use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::pipeline::stage1_load::DatasetCtx;
use crate::pipeline::stage2_filter::{FilterContext, Selection, SelectionIssue};
use crate::pipeline::stage3_aggregate::{AggregateContext, PhenotypeRow};
use crate::report::json::write_summary;
use crate::report::text::render_report;

pub const NO_SELECTION_MESSAGE: &str = "No selection made.";
pub const NO_GENE_RESULTS_MESSAGE: &str = "No clinical variants found for the selected gene.";
pub const NO_DRUG_RESULTS_MESSAGE: &str = "No clinical variants found for the selected drug.";

#[derive(Debug, Error)]
pub enum Stage4Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupSummary {
    pub tool: ToolSummary,
    pub selection: Selection,
    pub policy: String,
    pub issues: Vec<SelectionIssue>,
    pub mechanism: Option<String>,
    pub contraindication: Option<ContraindicationSummary>,
    pub filtered_genes: Vec<String>,
    pub rows: Vec<PhenotypeRow>,
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContraindicationSummary {
    pub drug: String,
    pub conditions: Vec<String>,
    pub conflict: bool,
}

pub fn build_summary(
    dataset: &DatasetCtx,
    filter: &FilterContext<'_>,
    aggregated: &AggregateContext,
) -> LookupSummary {
    let selection = &filter.selection;
    let drug = selection.drug.as_deref();

    let mechanism = drug
        .and_then(|d| dataset.get_mechanism(d))
        .map(str::to_string);
    let contraindication = drug
        .filter(|_| !selection.conditions.is_empty())
        .map(|d| ContraindicationSummary {
            drug: d.to_string(),
            conditions: selection.conditions.clone(),
            conflict: dataset.has_contraindication(d, selection.conditions.as_slice()),
        });

    let empty_message = if !aggregated.rows.is_empty() {
        None
    } else if selection.is_empty() {
        Some(NO_SELECTION_MESSAGE.to_string())
    } else if selection.gene.is_some() {
        Some(NO_GENE_RESULTS_MESSAGE.to_string())
    } else {
        Some(NO_DRUG_RESULTS_MESSAGE.to_string())
    };

    LookupSummary {
        tool: ToolSummary {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        selection: selection.clone(),
        policy: aggregated.policy.as_str().to_string(),
        issues: filter.issues.clone(),
        mechanism,
        contraindication,
        filtered_genes: filter.filtered_genes.clone(),
        rows: aggregated.rows.clone(),
        empty_message,
    }
}

pub fn run_stage4_report(
    dataset: &DatasetCtx,
    filter: &FilterContext<'_>,
    aggregated: &AggregateContext,
    out_dir: Option<&Path>,
) -> Result<LookupSummary, Stage4Error> {
    let summary = build_summary(dataset, filter, aggregated);
    if let Some(out_dir) = out_dir {
        std::fs::create_dir_all(out_dir)?;
        write_summary(out_dir, &summary)?;
        std::fs::write(out_dir.join("report.txt"), render_report(&summary))?;
        write_phenotypes_tsv(out_dir, &summary.rows)?;
    }
    Ok(summary)
}

pub fn render_phenotypes_tsv(rows: &[PhenotypeRow]) -> String {
    let mut buf = String::new();
    buf.push_str("variants\tphenotypes\n");
    for row in rows {
        buf.push_str(&row.variant);
        buf.push('\t');
        buf.push_str(&row.phenotypes);
        buf.push('\n');
    }
    buf
}

fn write_phenotypes_tsv(out_dir: &Path, rows: &[PhenotypeRow]) -> Result<(), Stage4Error> {
    std::fs::write(out_dir.join("phenotypes.tsv"), render_phenotypes_tsv(rows))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
