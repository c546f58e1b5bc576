use std::collections::BTreeSet;

use crate::model::records::DrugDetails;
use crate::model::terms::{lowercase_terms, split_terms};

/// True when any selected condition is a listed contraindication of `drug`.
/// Comparison is case-insensitive on both sides.
pub fn has_contraindication<S: AsRef<str>>(
    details: &DrugDetails,
    drug: &str,
    selected_conditions: &[S],
) -> bool {
    if selected_conditions.is_empty() {
        return false;
    }
    let Some(raw) = details
        .get(drug)
        .and_then(|d| d.contraindications.as_deref())
    else {
        return false;
    };
    let listed = lowercase_terms(raw);
    selected_conditions
        .iter()
        .map(|c| c.as_ref().trim().to_lowercase())
        .any(|c| listed.contains(&c))
}

pub fn get_mechanism<'a>(details: &'a DrugDetails, drug: &str) -> Option<&'a str> {
    details.get(drug).and_then(|d| d.mechanism.as_deref())
}

/// Every distinct contraindication across all drugs, sorted.
pub fn medical_conditions(details: &DrugDetails) -> Vec<String> {
    let mut out = BTreeSet::new();
    for detail in &details.entries {
        if let Some(raw) = detail.contraindications.as_deref() {
            out.extend(split_terms(raw).map(str::to_string));
        }
    }
    out.into_iter().collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/contraindications.rs"]
mod tests;
