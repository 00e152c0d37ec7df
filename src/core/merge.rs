//! Deterministic merging of translation sequences.
//!
//! Later sequences override earlier ones on `(namespace, key)` collisions, while the
//! position where a pair first appeared is kept. This keeps exports stable across
//! reconciliations.

use std::collections::HashMap;

use super::entry::{LocaleCollection, TranslationEntry};

type Identity = (Option<String>, String);

/// Incremental merge state: an insertion-ordered map from identity to entry.
#[derive(Debug, Default)]
pub struct Merger {
    entries: Vec<TranslationEntry>,
    positions: HashMap<Identity, usize>,
}

impl Merger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one entry with higher priority than everything applied before it.
    ///
    /// Returns `true` when the pair was new.
    pub fn apply(&mut self, entry: TranslationEntry) -> bool {
        let identity = (entry.namespace.clone(), entry.key.clone());
        match self.positions.get(&identity) {
            Some(&index) => {
                let existing = &mut self.entries[index];
                existing.value = entry.value;
                existing.source = entry.source;
                false
            }
            None => {
                self.positions.insert(identity, self.entries.len());
                self.entries.push(entry);
                true
            }
        }
    }

    pub fn extend<I>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = TranslationEntry>,
    {
        for entry in entries {
            self.apply(entry);
        }
        self
    }

    pub fn contains(&self, key: &str, namespace: Option<&str>) -> bool {
        self.positions
            .contains_key(&(namespace.map(str::to_string), key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn finish(self) -> LocaleCollection {
        self.entries
    }
}

/// Merge sequences left to right; later sequences win on collision.
pub fn merge(sequences: &[&[TranslationEntry]]) -> LocaleCollection {
    let mut merger = Merger::new();
    for sequence in sequences {
        merger.extend(sequence.iter().cloned());
    }
    merger.finish()
}
