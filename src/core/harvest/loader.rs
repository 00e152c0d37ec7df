//! Access to the native translation files of the application and its vendors.
//!
//! The harvester only talks to the [`TranslationLoader`] trait; [`FileLoader`] is the
//! filesystem implementation driven by configuration.
//!
//! Expected layout (all files are JSON objects):
//!
//! ```text
//! lang/
//!   en/validation.json            app group "validation"
//!   en.json                       app JSON catalog
//!   vendor/courier/en/mail.json   app override of vendor group courier::mail
//! vendor/courier/lang/
//!   en/mail.json                  vendor group "mail" of namespace "courier"
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::core::{document::OriginDocument, entry::Source};
use crate::error::{Error, Result};

/// Subdirectory of the application lang directory holding vendor overrides.
pub const VENDOR_OVERRIDE_DIR: &str = "vendor";

const GROUP_EXTENSION: &str = "json";

/// A vendor package's translation namespace and its origin directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorNamespace {
    pub name: String,
    pub hint: PathBuf,
}

impl VendorNamespace {
    pub fn new(name: impl Into<String>, hint: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            hint: hint.into(),
        }
    }
}

/// Which origin a set of groups belongs to.
#[derive(Debug, Clone, Copy)]
pub enum Origin<'a> {
    App,
    Vendor(&'a VendorNamespace),
}

/// A loaded JSON catalog (flat, ungrouped translations).
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    pub source: Source,
    pub path: PathBuf,
    pub document: OriginDocument,
}

/// Minimal capability the harvester needs from translation origins.
pub trait TranslationLoader {
    /// Registered vendor namespaces, in declaration order.
    fn namespaces(&self) -> &[VendorNamespace];

    /// Group names of an origin, sorted. Missing directories yield no groups.
    fn groups(&self, origin: Origin<'_>, locale: &str) -> Result<Vec<String>>;

    /// Load one group. `None` when the group has no file for this locale.
    fn load_group(
        &self,
        locale: &str,
        group: &str,
        namespace: Option<&str>,
    ) -> Result<Option<OriginDocument>>;

    /// Application-provided override for a vendor group.
    fn load_vendor_override(
        &self,
        locale: &str,
        group: &str,
        namespace: &str,
    ) -> Result<Option<OriginDocument>>;

    /// JSON catalogs for a locale: the application catalog first, then vendor
    /// catalogs in declaration order. Absent files are skipped.
    fn json_catalogs(&self, locale: &str) -> Result<Vec<JsonCatalog>>;
}

impl<L: TranslationLoader + ?Sized> TranslationLoader for Box<L> {
    fn namespaces(&self) -> &[VendorNamespace] {
        (**self).namespaces()
    }

    fn groups(&self, origin: Origin<'_>, locale: &str) -> Result<Vec<String>> {
        (**self).groups(origin, locale)
    }

    fn load_group(
        &self,
        locale: &str,
        group: &str,
        namespace: Option<&str>,
    ) -> Result<Option<OriginDocument>> {
        (**self).load_group(locale, group, namespace)
    }

    fn load_vendor_override(
        &self,
        locale: &str,
        group: &str,
        namespace: &str,
    ) -> Result<Option<OriginDocument>> {
        (**self).load_vendor_override(locale, group, namespace)
    }

    fn json_catalogs(&self, locale: &str) -> Result<Vec<JsonCatalog>> {
        (**self).json_catalogs(locale)
    }
}

/// Filesystem-backed [`TranslationLoader`].
#[derive(Debug, Clone)]
pub struct FileLoader {
    lang_dir: PathBuf,
    namespaces: Vec<VendorNamespace>,
    json_paths: Vec<PathBuf>,
}

impl FileLoader {
    pub fn new(lang_dir: impl Into<PathBuf>) -> Self {
        Self {
            lang_dir: lang_dir.into(),
            namespaces: Vec::new(),
            json_paths: Vec::new(),
        }
    }

    pub fn with_namespace(mut self, name: impl Into<String>, hint: impl Into<PathBuf>) -> Self {
        self.namespaces.push(VendorNamespace::new(name, hint));
        self
    }

    pub fn with_json_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_paths.push(path.into());
        self
    }

    pub fn lang_dir(&self) -> &Path {
        &self.lang_dir
    }

    fn hint_for(&self, namespace: &str) -> Option<&Path> {
        self.namespaces
            .iter()
            .find(|ns| ns.name == namespace)
            .map(|ns| ns.hint.as_path())
    }
}

impl TranslationLoader for FileLoader {
    fn namespaces(&self) -> &[VendorNamespace] {
        &self.namespaces
    }

    fn groups(&self, origin: Origin<'_>, locale: &str) -> Result<Vec<String>> {
        match origin {
            Origin::App => group_names(&self.lang_dir.join(locale)),
            Origin::Vendor(namespace) => {
                // The first locale directory of a package defines its set of groups.
                match sorted_subdirectories(&namespace.hint)?.into_iter().next() {
                    Some(canonical) => group_names(&canonical),
                    None => {
                        tracing::warn!(
                            "No locale directories under '{}' for namespace '{}'",
                            namespace.hint.display(),
                            namespace.name
                        );
                        Ok(Vec::new())
                    }
                }
            }
        }
    }

    fn load_group(
        &self,
        locale: &str,
        group: &str,
        namespace: Option<&str>,
    ) -> Result<Option<OriginDocument>> {
        let base = match namespace {
            None => self.lang_dir.as_path(),
            Some(namespace) => match self.hint_for(namespace) {
                Some(hint) => hint,
                None => return Ok(None),
            },
        };
        OriginDocument::read(&group_path(base, locale, group))
    }

    fn load_vendor_override(
        &self,
        locale: &str,
        group: &str,
        namespace: &str,
    ) -> Result<Option<OriginDocument>> {
        let base = self.lang_dir.join(VENDOR_OVERRIDE_DIR).join(namespace);
        OriginDocument::read(&group_path(&base, locale, group))
    }

    fn json_catalogs(&self, locale: &str) -> Result<Vec<JsonCatalog>> {
        let file_name = format!("{}.{}", locale, GROUP_EXTENSION);
        let candidates = std::iter::once((Source::App, self.lang_dir.join(&file_name))).chain(
            self.json_paths
                .iter()
                .map(|dir| (Source::Vendor, dir.join(&file_name))),
        );

        let mut catalogs = Vec::new();
        for (source, path) in candidates {
            if let Some(document) = OriginDocument::read(&path)? {
                catalogs.push(JsonCatalog {
                    source,
                    path,
                    document,
                });
            }
        }
        Ok(catalogs)
    }
}

fn group_path(base: &Path, locale: &str, group: &str) -> PathBuf {
    base.join(locale)
        .join(format!("{}.{}", group, GROUP_EXTENSION))
}

/// Read a directory, treating a missing one as empty.
fn read_dir_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(Error::NotReadable {
                path: dir.to_path_buf(),
                source,
            });
        }
    };

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::NotReadable {
            path: dir.to_path_buf(),
            source,
        })?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

fn sorted_subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(read_dir_paths(dir)?
        .into_iter()
        .filter(|path| path.is_dir())
        .collect())
}

fn group_names(dir: &Path) -> Result<Vec<String>> {
    Ok(read_dir_paths(dir)?
        .into_iter()
        .filter(|path| path.is_file())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(GROUP_EXTENSION))
        .filter_map(|path| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string())
        })
        .collect())
}
