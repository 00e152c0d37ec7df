//! Default translation harvesting.
//!
//! Produces the default collection of a locale from every declared origin, in a fixed order:
//!
//! 1. vendor groups (`namespace::group.key`), with application overrides applied
//! 2. application groups (`group.key`)
//! 3. JSON catalogs (application catalog, then vendor catalogs)

mod loader;

pub use loader::{
    FileLoader, JsonCatalog, Origin, TranslationLoader, VENDOR_OVERRIDE_DIR, VendorNamespace,
};

use super::{
    document::OriginDocument,
    entry::{LocaleCollection, Source, TranslationEntry},
    merge::{Merger, merge},
};
use crate::error::Result;

pub struct Harvester {
    loader: Box<dyn TranslationLoader>,
    fallback_locale: String,
}

impl Harvester {
    pub fn new(loader: impl TranslationLoader + 'static, fallback_locale: impl Into<String>) -> Self {
        Self {
            loader: Box::new(loader),
            fallback_locale: fallback_locale.into(),
        }
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    /// Candidate entries of every origin for `locale`, concatenated in origin order.
    ///
    /// The result may contain repeated `(namespace, key)` pairs; callers run it
    /// through the merge engine.
    pub fn harvest(&self, locale: &str) -> Result<LocaleCollection> {
        let mut entries = self.harvest_vendor_groups(locale)?;
        let vendor_count = entries.len();

        entries.extend(self.harvest_app_groups(locale)?);
        let app_count = entries.len() - vendor_count;

        entries.extend(self.harvest_json_catalogs(locale)?);
        tracing::debug!(
            locale,
            vendor = vendor_count,
            app = app_count,
            json = entries.len() - vendor_count - app_count,
            "Harvested default translations"
        );

        Ok(entries)
    }

    /// Fallback-locale defaults overridden by `locale` defaults.
    pub fn default_translations(&self, locale: &str) -> Result<LocaleCollection> {
        let fallback = self.harvest(&self.fallback_locale)?;
        let localized = self.harvest(locale)?;
        Ok(merge(&[&fallback, &localized]))
    }

    fn harvest_vendor_groups(&self, locale: &str) -> Result<Vec<TranslationEntry>> {
        let mut entries = Vec::new();
        for namespace in self.loader.namespaces() {
            for group in self.loader.groups(Origin::Vendor(namespace), locale)? {
                let package = self
                    .loader
                    .load_group(locale, &group, Some(&namespace.name))?;
                let overrides = self
                    .loader
                    .load_vendor_override(locale, &group, &namespace.name)?;

                let mut merger = Merger::new();
                for document in [package, overrides].into_iter().flatten() {
                    merger.extend(
                        document
                            .flatten(Some(&group))
                            .into_iter()
                            .map(|(key, value)| {
                                TranslationEntry::vendor(namespace.name.clone(), key, value)
                            }),
                    );
                }
                entries.extend(merger.finish());
            }
        }
        Ok(entries)
    }

    fn harvest_app_groups(&self, locale: &str) -> Result<Vec<TranslationEntry>> {
        let mut entries = Vec::new();
        for group in self.loader.groups(Origin::App, locale)? {
            if let Some(document) = self.loader.load_group(locale, &group, None)? {
                entries.extend(flatten_entries(&document, Some(&group), Source::App));
            }
        }
        Ok(entries)
    }

    fn harvest_json_catalogs(&self, locale: &str) -> Result<Vec<TranslationEntry>> {
        let mut entries = Vec::new();
        for catalog in self.loader.json_catalogs(locale)? {
            tracing::debug!("Loaded JSON catalog {}", catalog.path.display());
            entries.extend(flatten_entries(&catalog.document, None, catalog.source));
        }
        Ok(entries)
    }
}

fn flatten_entries(
    document: &OriginDocument,
    group: Option<&str>,
    source: Source,
) -> impl Iterator<Item = TranslationEntry> {
    document
        .flatten(group)
        .into_iter()
        .map(move |(key, value)| TranslationEntry::app(key, value).with_source(source))
}
