//! Lookup facade for a host translation chain.
//!
//! A [`Translator`] answers "is there a stored override for this key?". When it
//! returns `None` the host falls back to its own bundled translations.

use super::{entry::split_full_key, manager::Manager, store::ObjectStore};
use crate::error::Result;

pub struct Translator<'a, S> {
    manager: &'a Manager<S>,
    locale: String,
}

impl<'a, S: ObjectStore> Translator<'a, S> {
    pub fn new(manager: &'a Manager<S>, locale: impl Into<String>) -> Self {
        Self {
            manager,
            locale: locale.into(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Resolve `namespace::key` (or a plain key) in `locale`.
    pub fn resolve(&self, locale: &str, full_key: &str) -> Result<Option<String>> {
        let (namespace, key) = split_full_key(full_key);
        self.manager.translation(locale, key, namespace)
    }

    /// Resolve in `locale` (or the current locale) and apply placeholder replacements.
    pub fn get(
        &self,
        full_key: &str,
        replacements: &[(&str, &str)],
        locale: Option<&str>,
    ) -> Result<Option<String>> {
        let locale = locale.unwrap_or(&self.locale);
        Ok(self
            .resolve(locale, full_key)?
            .map(|line| make_replacements(&line, replacements)))
    }
}

/// Replace `:name` placeholders.
///
/// `:name` is replaced as given, then `:NAME` with the upper-cased value, then
/// `:Name` with an upper-cased first letter. Longer names are replaced first so
/// `:user` does not clobber `:username`.
pub fn make_replacements(line: &str, replacements: &[(&str, &str)]) -> String {
    let mut sorted = replacements.to_vec();
    sorted.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut result = line.to_string();
    for (name, value) in sorted {
        if name.is_empty() {
            continue;
        }
        result = result
            .replace(&format!(":{}", name), value)
            .replace(&format!(":{}", name.to_uppercase()), &value.to_uppercase())
            .replace(&format!(":{}", capitalize(name)), &capitalize(value));
    }
    result
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
