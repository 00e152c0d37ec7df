use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Separator between a vendor namespace and a key in a full key (`"courier::mail.subject"`).
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Origin category of a translation entry.
///
/// Informational only: it never takes part in identity, but it is kept
/// through persistence and CSV interchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    App,
    Vendor,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::App => "app",
            Source::Vendor => "vendor",
        }
    }

    /// Source implied by a namespace when none was recorded.
    pub fn for_namespace(namespace: Option<&str>) -> Self {
        match namespace {
            Some(_) => Source::Vendor,
            None => Source::App,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "app" => Ok(Source::App),
            "vendor" => Ok(Source::Vendor),
            other => Err(format!("unknown source '{}', expected 'app' or 'vendor'", other)),
        }
    }
}

/// A single translation line.
///
/// Identity within a locale collection is `(namespace, key)`. `None` and
/// `Some("")` are different namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredEntry")]
pub struct TranslationEntry {
    pub source: Source,
    pub namespace: Option<String>,
    pub key: String,
    pub value: String,
}

/// Ordered translations of one locale.
pub type LocaleCollection = Vec<TranslationEntry>;

impl TranslationEntry {
    /// Entry with the source derived from the namespace.
    pub fn new(namespace: Option<String>, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            source: Source::for_namespace(namespace.as_deref()),
            namespace,
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn app(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            source: Source::App,
            namespace: None,
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn vendor(
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            source: Source::Vendor,
            namespace: Some(namespace.into()),
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    /// Exact identity match. A `None` namespace only matches `None`.
    pub fn matches(&self, key: &str, namespace: Option<&str>) -> bool {
        self.key == key && self.namespace.as_deref() == namespace
    }

    /// Full key as written by callers: `namespace::key`, or just `key`.
    pub fn full_key(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}{}{}", namespace, NAMESPACE_SEPARATOR, self.key),
            None => self.key.clone(),
        }
    }
}

/// Split a full key on the first `::`.
///
/// ```
/// use transync::core::split_full_key;
///
/// assert_eq!(split_full_key("courier::mail.subject"), (Some("courier"), "mail.subject"));
/// assert_eq!(split_full_key("messages.greeting"), (None, "messages.greeting"));
/// ```
pub fn split_full_key(full_key: &str) -> (Option<&str>, &str) {
    match full_key.split_once(NAMESPACE_SEPARATOR) {
        Some((namespace, key)) => (Some(namespace), key),
        None => (None, full_key),
    }
}

/// Reject namespaces that cannot be told apart from "no namespace" or from a full key.
pub fn validate_namespace(namespace: Option<&str>) -> Result<()> {
    match namespace {
        Some(ns) if ns.is_empty() || ns.contains(NAMESPACE_SEPARATOR) => {
            Err(Error::InvalidNamespace(ns.to_string()))
        }
        _ => Ok(()),
    }
}

/// [`split_full_key`] for user input: `"::key"` is rejected instead of
/// yielding an empty namespace.
pub fn parse_full_key(full_key: &str) -> Result<(Option<&str>, &str)> {
    let (namespace, key) = split_full_key(full_key);
    validate_namespace(namespace)?;
    Ok((namespace, key))
}

/// On-disk shape of an entry. `namespace` must be present (possibly `null`);
/// `source` may be missing in collections written by older versions.
#[derive(Deserialize)]
struct StoredEntry {
    #[serde(default)]
    source: Option<Source>,
    #[serde(deserialize_with = "Option::deserialize")]
    namespace: Option<String>,
    key: String,
    value: String,
}

impl From<StoredEntry> for TranslationEntry {
    fn from(stored: StoredEntry) -> Self {
        let source = stored
            .source
            .unwrap_or_else(|| Source::for_namespace(stored.namespace.as_deref()));
        Self {
            source,
            namespace: stored.namespace,
            key: stored.key,
            value: stored.value,
        }
    }
}
