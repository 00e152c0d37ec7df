use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Language/region identifiers such as `en`, `pt_BR` or `zh-Hant-TW`.
static LOCALE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+(?:[_-][A-Za-z0-9]+)*$").unwrap());

/// File suffix of persisted collections.
pub const COLLECTION_EXTENSION: &str = "json";

pub fn is_valid_locale(locale: &str) -> bool {
    LOCALE_REGEX.is_match(locale)
}

/// Reject identifiers that cannot safely become a collection file name.
pub fn validate_locale(locale: &str) -> Result<()> {
    if is_valid_locale(locale) {
        Ok(())
    } else {
        Err(Error::InvalidLocale(locale.to_string()))
    }
}

/// Extracts the locale from a collection file name.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "translations/pt_BR.json" -> Some("pt_BR")
/// - "translations/notes.txt" -> None
pub fn locale_from_file_name(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next()?;
    let stem = name.strip_suffix(COLLECTION_EXTENSION)?.strip_suffix('.')?;
    is_valid_locale(stem).then_some(stem)
}
