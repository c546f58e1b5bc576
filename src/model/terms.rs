use std::collections::{BTreeSet, HashSet};

pub const TERM_SEPARATOR: &str = ", ";

/// Comma-separated terms, trimmed, blanks dropped.
pub fn split_terms(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|t| !t.is_empty())
}

pub fn collect_terms<'a>(values: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
    let mut terms = BTreeSet::new();
    for value in values {
        for term in split_terms(value) {
            if !terms.contains(term) {
                terms.insert(term.to_string());
            }
        }
    }
    terms
}

pub fn join_terms(terms: &BTreeSet<String>) -> String {
    terms
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(TERM_SEPARATOR)
}

pub fn lowercase_terms(raw: &str) -> HashSet<String> {
    split_terms(raw).map(str::to_lowercase).collect()
}

/// Case-insensitive containment. An empty needle matches nothing.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/terms.rs"]
mod tests;
