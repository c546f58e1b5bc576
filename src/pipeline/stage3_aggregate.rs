use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::model::records::ClinicalVariantRecord;
use crate::model::terms::{collect_terms, join_terms};
use crate::model::variant::VariantPolicy;
use crate::pipeline::stage2_filter::FilterContext;

/// One output line: a normalized variant and its merged phenotype terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhenotypeRow {
    pub variant: String,
    pub phenotypes: String,
}

#[derive(Debug, Clone)]
pub struct AggregateContext {
    pub policy: VariantPolicy,
    pub rows: Vec<PhenotypeRow>,
    pub skipped_null_variants: usize,
}

/// Groups records by normalized variant and merges their phenotype terms.
/// Output is sorted by variant; terms within a row are deduplicated and
/// sorted, so input order never matters. Records without a variant are
/// skipped.
pub fn aggregate<'a>(
    records: impl IntoIterator<Item = &'a ClinicalVariantRecord>,
    policy: VariantPolicy,
) -> Vec<PhenotypeRow> {
    aggregate_counting(records, policy).0
}

fn aggregate_counting<'a>(
    records: impl IntoIterator<Item = &'a ClinicalVariantRecord>,
    policy: VariantPolicy,
) -> (Vec<PhenotypeRow>, usize) {
    let mut groups: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut skipped = 0usize;
    for record in records {
        let variant = policy.normalize_opt(record.variant.as_deref(), record.gene.as_deref());
        let Some(variant) = variant else {
            skipped += 1;
            continue;
        };
        let terms = groups.entry(variant).or_default();
        if let Some(raw) = record.phenotypes.as_deref() {
            terms.append(&mut collect_terms([raw]));
        }
    }

    let rows = groups
        .into_iter()
        .map(|(variant, terms)| PhenotypeRow {
            variant,
            phenotypes: join_terms(&terms),
        })
        .collect();
    (rows, skipped)
}

pub fn run_stage3_aggregate(filter: &FilterContext<'_>, policy: VariantPolicy) -> AggregateContext {
    let (rows, skipped_null_variants) = aggregate_counting(filter.records.iter().copied(), policy);
    AggregateContext {
        policy,
        rows,
        skipped_null_variants,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_aggregate.rs"]
mod tests;
