//! Locale store: CRUD over persisted per-locale collections and reconciliation.
//!
//! Each locale is one JSON array at `<collection_dir>/<locale>.json` inside an
//! [`ObjectStore`]. Every mutation is a read-modify-write of that whole file.

use std::collections::{BTreeSet, HashSet};

use super::{
    entry::{LocaleCollection, TranslationEntry, validate_namespace},
    harvest::Harvester,
    locale::{COLLECTION_EXTENSION, locale_from_file_name, validate_locale},
    merge::merge,
    store::{ObjectStore, join_path},
};
use crate::error::{Error, Result};

/// Default store subdirectory holding locale collections.
pub const DEFAULT_COLLECTION_DIR: &str = "translations";

/// Outcome of [`Manager::sync`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Entries stored before reconciliation.
    pub before: usize,
    /// Entries stored after reconciliation.
    pub after: usize,
    /// Full keys (`namespace::key` or `key`) introduced by the defaults.
    pub added: Vec<String>,
}

pub struct Manager<S> {
    store: S,
    collection_dir: String,
    harvester: Harvester,
}

impl<S: ObjectStore> Manager<S> {
    pub fn new(store: S, collection_dir: impl Into<String>, harvester: Harvester) -> Self {
        Self {
            store,
            collection_dir: collection_dir.into(),
            harvester,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn harvester(&self) -> &Harvester {
        &self.harvester
    }

    fn path(&self, locale: &str) -> Result<String> {
        validate_locale(locale)?;
        Ok(join_path(
            &self.collection_dir,
            &format!("{}.{}", locale, COLLECTION_EXTENSION),
        ))
    }

    /// Locales with a persisted collection, derived from the stored file names.
    pub fn locales(&self) -> Result<BTreeSet<String>> {
        let prefix = join_path(&self.collection_dir, "");
        let locales = self
            .store
            .list_files(&self.collection_dir)?
            .iter()
            .filter_map(|path| {
                // Only direct children of the collection directory.
                let name = path.strip_prefix(&prefix).unwrap_or(path);
                if name.contains('/') {
                    return None;
                }
                locale_from_file_name(name).map(str::to_string)
            })
            .collect();
        Ok(locales)
    }

    /// Whether a collection exists. Invalid identifiers never exist.
    pub fn has_locale(&self, locale: &str) -> Result<bool> {
        match self.path(locale) {
            Ok(path) => Ok(self.store.exists(&path)?),
            Err(Error::InvalidLocale(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub fn translations(&self, locale: &str) -> Result<LocaleCollection> {
        let path = self.path(locale)?;
        if !self.store.exists(&path)? {
            return Err(Error::LocaleNotFound(locale.to_string()));
        }
        let bytes = self.store.read(&path)?;
        serde_json::from_slice(&bytes).map_err(|source| Error::CorruptCollection {
            locale: locale.to_string(),
            source,
        })
    }

    /// Create a collection, empty or seeded with the harvested defaults.
    pub fn add_locale(&self, locale: &str, initialize: bool) -> Result<()> {
        let path = self.path(locale)?;
        if self.store.exists(&path)? {
            return Err(Error::LocaleAlreadyExists(locale.to_string()));
        }

        let translations = if initialize {
            self.default_translations(locale)?
        } else {
            Vec::new()
        };
        self.save(locale, &translations)?;
        tracing::info!(locale, entries = translations.len(), "Added locale");
        Ok(())
    }

    /// Delete a collection. Fails with `LocaleNotFound` when there is nothing to delete.
    pub fn remove_locale(&self, locale: &str) -> Result<()> {
        let path = self.path(locale)?;
        if !self.store.exists(&path)? {
            return Err(Error::LocaleNotFound(locale.to_string()));
        }
        self.store.delete(&path)?;
        tracing::info!(locale, "Removed locale");
        Ok(())
    }

    /// First stored value for `(key, namespace)`; `None` when the locale or key is missing.
    pub fn translation(
        &self,
        locale: &str,
        key: &str,
        namespace: Option<&str>,
    ) -> Result<Option<String>> {
        if !self.has_locale(locale)? {
            return Ok(None);
        }
        Ok(self
            .translations(locale)?
            .into_iter()
            .find(|entry| entry.matches(key, namespace))
            .map(|entry| entry.value))
    }

    /// Create or overwrite one entry, keeping its position when it already exists.
    pub fn update_translation(
        &self,
        locale: &str,
        key: &str,
        value: &str,
        namespace: Option<&str>,
    ) -> Result<()> {
        validate_namespace(namespace)?;
        let stored = self.translations(locale)?;
        let update = [TranslationEntry::new(
            namespace.map(str::to_string),
            key,
            value,
        )];
        self.save(locale, &merge(&[&stored, &update]))?;
        tracing::info!(locale, key, ?namespace, "Updated translation");
        Ok(())
    }

    /// Remove the entry matching `(key, namespace)` exactly. Returns whether one was removed.
    pub fn remove_translation(
        &self,
        locale: &str,
        key: &str,
        namespace: Option<&str>,
    ) -> Result<bool> {
        let stored = self.translations(locale)?;
        let before = stored.len();
        let remaining: LocaleCollection = stored
            .into_iter()
            .filter(|entry| !entry.matches(key, namespace))
            .collect();
        let removed = remaining.len() != before;

        self.save(locale, &remaining)?;
        tracing::info!(locale, key, ?namespace, removed, "Removed translation");
        Ok(removed)
    }

    pub fn default_translations(&self, locale: &str) -> Result<LocaleCollection> {
        self.harvester.default_translations(locale)
    }

    /// Reconcile a stored collection with freshly harvested defaults.
    ///
    /// Stored values win on collision, new default keys are appended and
    /// stored-only keys are kept.
    pub fn sync(&self, locale: &str) -> Result<SyncReport> {
        let stored = self.translations(locale)?;
        let defaults = self.default_translations(locale)?;

        let stored_keys: HashSet<(Option<&str>, &str)> = stored
            .iter()
            .map(|entry| (entry.namespace.as_deref(), entry.key.as_str()))
            .collect();
        let added: Vec<String> = defaults
            .iter()
            .filter(|entry| !stored_keys.contains(&(entry.namespace.as_deref(), entry.key.as_str())))
            .map(TranslationEntry::full_key)
            .collect();

        let merged = merge(&[&defaults, &stored]);
        self.save(locale, &merged)?;

        let report = SyncReport {
            before: stored.len(),
            after: merged.len(),
            added,
        };
        tracing::info!(
            locale,
            before = report.before,
            after = report.after,
            added = report.added.len(),
            "Synchronized locale"
        );
        Ok(report)
    }

    /// Persist a collection, fully replacing the previous one.
    pub fn save(&self, locale: &str, translations: &[TranslationEntry]) -> Result<()> {
        let path = self.path(locale)?;
        let content = serde_json::to_string_pretty(translations).map_err(|source| {
            Error::CorruptCollection {
                locale: locale.to_string(),
                source,
            }
        })?;
        self.store.write(&path, format!("{}\n", content).as_bytes())?;
        Ok(())
    }
}
