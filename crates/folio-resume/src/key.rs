//! Composite entry keys and key-based deduplication.

use std::collections::HashSet;

use folio_core::ResumeEntry;
use folio_core::text::fold_alphanumeric;

/// Separator between the normalized fields of a composite key.
pub const KEY_SEPARATOR: &str = "||";

/// Composite key identifying an entry regardless of case, spacing, and
/// punctuation.
///
/// Each field is lowercased with non-alphanumeric runs collapsed to one space,
/// then the three are joined with [`KEY_SEPARATOR`]. Returns `None` when all
/// three fields normalize to nothing; such entries never enter a deduplicated
/// list.
#[must_use]
pub fn entry_key(entry: &ResumeEntry) -> Option<String> {
    let parts = [
        fold_alphanumeric(&entry.year),
        fold_alphanumeric(&entry.company),
        fold_alphanumeric(&entry.role),
    ];
    if parts.iter().all(String::is_empty) {
        return None;
    }
    Some(parts.join(KEY_SEPARATOR))
}

/// Insertion-ordered entry list that refuses duplicate keys.
#[derive(Debug, Default)]
pub(crate) struct KeyedEntries {
    keys: HashSet<String>,
    entries: Vec<ResumeEntry>,
}

impl KeyedEntries {
    /// Insert a trimmed copy of `entry` if its key is new.
    ///
    /// Returns `false` for duplicates and keyless entries.
    pub fn insert(&mut self, entry: &ResumeEntry) -> bool {
        let Some(key) = entry_key(entry) else {
            return false;
        };
        if !self.keys.insert(key) {
            return false;
        }
        self.entries.push(entry.trimmed());
        true
    }

    pub fn into_entries(self) -> Vec<ResumeEntry> {
        self.entries
    }
}

/// Remove duplicate and keyless entries, keeping the first occurrence of each
/// key in input order. Returned entries are trimmed.
#[must_use]
pub fn dedupe_entries(entries: &[ResumeEntry]) -> Vec<ResumeEntry> {
    let mut keyed = KeyedEntries::default();
    for entry in entries {
        keyed.insert(entry);
    }
    keyed.into_entries()
}
