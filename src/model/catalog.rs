use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFold {
    Exact,
    CaseInsensitive,
}

impl KeyFold {
    pub fn key(&self, raw: &str) -> String {
        match self {
            KeyFold::Exact => raw.to_string(),
            KeyFold::CaseInsensitive => raw.to_lowercase(),
        }
    }
}

pub trait Keyed {
    fn key(&self) -> &str;
}

#[derive(Debug, Clone, Serialize)]
pub struct DuplicateKey {
    pub key: String,
    pub first_row: usize,
    pub dup_row: usize,
}

/// Entries keyed by name, first occurrence wins.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    pub entries: Vec<T>,
    pub duplicates: Vec<DuplicateKey>,
    pub null_keys: usize,
    fold: KeyFold,
    first_index_by_key: HashMap<String, (usize, usize)>,
}

impl<T: Keyed> Catalog<T> {
    /// `rows` yields (source line, entry). Entries whose key folds to an
    /// existing one are recorded as duplicates and dropped.
    pub fn build(
        rows: impl IntoIterator<Item = (usize, T)>,
        fold: KeyFold,
        null_keys: usize,
    ) -> Self {
        let mut entries = Vec::new();
        let mut duplicates = Vec::new();
        let mut first_index_by_key: HashMap<String, (usize, usize)> = HashMap::new();
        for (row_no, entry) in rows {
            let key = fold.key(entry.key());
            if let Some(&(_, first_row)) = first_index_by_key.get(&key) {
                duplicates.push(DuplicateKey {
                    key: entry.key().to_string(),
                    first_row,
                    dup_row: row_no,
                });
                continue;
            }
            first_index_by_key.insert(key, (entries.len(), row_no));
            entries.push(entry);
        }
        Self {
            entries,
            duplicates,
            null_keys,
            fold,
            first_index_by_key,
        }
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.first_index_by_key
            .get(&self.fold.key(name))
            .map(|&(idx, _)| &self.entries[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.first_index_by_key.contains_key(&self.fold.key(name))
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.key().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/catalog.rs"]
mod tests;
