use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::model::records::{ClinicalVariantRecord, GeneCatalog};
use crate::model::terms::contains_ignore_case;
use crate::pipeline::stage1_load::DatasetCtx;

/// What the user picked. Blank strings count as "not selected".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub drug: Option<String>,
    pub gene: Option<String>,
    pub conditions: Vec<String>,
}

impl Selection {
    pub fn new(drug: Option<&str>, gene: Option<&str>, conditions: &[String]) -> Self {
        Self {
            drug: non_blank(drug),
            gene: non_blank(gene),
            conditions: conditions
                .iter()
                .filter_map(|c| non_blank(Some(c)))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.drug.is_none() && self.gene.is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SelectionIssue {
    UnknownDrug(String),
    UnknownGene(String),
}

impl fmt::Display for SelectionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionIssue::UnknownDrug(d) => write!(f, "drug not in catalog: {d}"),
            SelectionIssue::UnknownGene(g) => write!(f, "gene not in catalog: {g}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterContext<'a> {
    pub selection: Selection,
    pub records: Vec<&'a ClinicalVariantRecord>,
    pub filtered_genes: Vec<String>,
    pub issues: Vec<SelectionIssue>,
}

/// Gene matches exactly; drug matches as a case-insensitive substring of
/// `chemicals`, so "codeine" also hits "hydrocodeine". Nulls never match.
pub fn filter_records<'a>(
    records: &'a [ClinicalVariantRecord],
    gene: Option<&str>,
    drug: Option<&str>,
) -> Vec<&'a ClinicalVariantRecord> {
    records
        .iter()
        .filter(|r| gene.is_none_or(|g| r.gene.as_deref() == Some(g)))
        .filter(|r| drug.is_none_or(|d| mentions_drug(r, d)))
        .collect()
}

fn mentions_drug(record: &ClinicalVariantRecord, drug: &str) -> bool {
    record
        .chemicals
        .as_deref()
        .is_some_and(|c| contains_ignore_case(c, drug))
}

/// Known genes annotated against `drug`. Blank drug yields nothing.
pub fn genes_for_drug(
    records: &[ClinicalVariantRecord],
    genes: &GeneCatalog,
    drug: &str,
) -> BTreeSet<String> {
    let drug = drug.trim();
    if drug.is_empty() {
        return BTreeSet::new();
    }
    records
        .iter()
        .filter(|r| mentions_drug(r, drug))
        .filter_map(|r| r.gene.as_deref())
        .filter(|g| genes.contains(g))
        .map(str::to_string)
        .collect()
}

pub fn run_stage2_filter<'a>(ctx: &'a DatasetCtx, selection: &Selection) -> FilterContext<'a> {
    let mut issues = Vec::new();
    if let Some(drug) = selection.drug.as_deref()
        && !ctx.drugs.contains(drug)
    {
        warn!(drug, "selected drug not in catalog");
        issues.push(SelectionIssue::UnknownDrug(drug.to_string()));
    }
    if let Some(gene) = selection.gene.as_deref()
        && !ctx.genes.contains(gene)
    {
        warn!(gene, "selected gene not in catalog");
        issues.push(SelectionIssue::UnknownGene(gene.to_string()));
    }

    let filtered_genes = selection
        .drug
        .as_deref()
        .map(|d| ctx.genes_for_drug(d).into_iter().collect())
        .unwrap_or_default();

    let records = if selection.is_empty() || !issues.is_empty() {
        Vec::new()
    } else {
        filter_records(
            &ctx.variants,
            selection.gene.as_deref(),
            selection.drug.as_deref(),
        )
    };

    FilterContext {
        selection: selection.clone(),
        records,
        filtered_genes,
        issues,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_filter.rs"]
mod tests;
