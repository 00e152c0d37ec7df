//! CSV import/export of locale collections.
//!
//! Layout: a header row followed by one row per entry, columns
//! `source,namespace,key,value`. An absent namespace is an empty field. Files
//! with the legacy three-column layout `namespace,key,value` are accepted on
//! import; their source is derived from the namespace.

use std::{fs::File, io, path::Path};

use super::{
    entry::{LocaleCollection, Source, TranslationEntry},
    manager::Manager,
    merge::Merger,
    store::ObjectStore,
};
use crate::error::{Error, Result};

pub const CSV_HEADER: [&str; 4] = ["source", "namespace", "key", "value"];
pub const LEGACY_CSV_HEADER: [&str; 3] = ["namespace", "key", "value"];

/// Column layout, decided by the width of the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    WithSource,
    Legacy,
}

impl Layout {
    fn from_header(header: &csv::StringRecord) -> Result<Self> {
        match header.len() {
            4 => Ok(Layout::WithSource),
            3 => Ok(Layout::Legacy),
            n => Err(Error::malformed_row(
                1,
                format!("header must have 3 or 4 columns, found {}", n),
            )),
        }
    }

    fn width(&self) -> usize {
        match self {
            Layout::WithSource => CSV_HEADER.len(),
            Layout::Legacy => LEGACY_CSV_HEADER.len(),
        }
    }

    fn entry(&self, record: &csv::StringRecord, line: u64) -> Result<TranslationEntry> {
        if record.len() != self.width() {
            return Err(Error::malformed_row(
                line,
                format!("expected {} columns, found {}", self.width(), record.len()),
            ));
        }

        let (source, rest) = match self {
            Layout::WithSource => {
                let source = record[0]
                    .parse::<Source>()
                    .map_err(|reason| Error::malformed_row(line, reason))?;
                (Some(source), 1)
            }
            Layout::Legacy => (None, 0),
        };
        let namespace = match &record[rest] {
            "" => None,
            namespace => Some(namespace.to_string()),
        };
        let entry = TranslationEntry::new(namespace, &record[rest + 1], &record[rest + 2]);

        Ok(match source {
            Some(source) => entry.with_source(source),
            None => entry,
        })
    }
}

/// Write a collection as CSV, quoting fields as RFC 4180 requires.
pub fn write_csv<W: io::Write>(writer: W, translations: &[TranslationEntry]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    for entry in translations {
        csv.write_record([
            entry.source.as_str(),
            entry.namespace.as_deref().unwrap_or_default(),
            entry.key.as_str(),
            entry.value.as_str(),
        ])?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Parse CSV into a collection. Any row whose width differs from the header aborts.
///
/// Repeated `(namespace, key)` pairs collapse to the last value, at the first position.
pub fn read_csv<R: io::Read>(reader: R) -> Result<LocaleCollection> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = csv.records();

    let layout = match records.next() {
        Some(header) => Layout::from_header(&header?)?,
        None => return Ok(Vec::new()),
    };

    let mut merger = Merger::new();
    for record in records {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        merger.apply(layout.entry(&record, line)?);
    }
    Ok(merger.finish())
}

impl<S: ObjectStore> Manager<S> {
    /// Export a locale to a CSV file. Returns the number of rows written.
    pub fn export(&self, locale: &str, destination: &Path) -> Result<usize> {
        let translations = self.translations(locale)?;
        let file = File::create(destination).map_err(|source| Error::NotWritable {
            path: destination.to_path_buf(),
            source,
        })?;
        write_csv(file, &translations)?;
        tracing::info!(
            locale,
            rows = translations.len(),
            "Exported translations to {}",
            destination.display()
        );
        Ok(translations.len())
    }

    pub fn export_to_writer<W: io::Write>(&self, locale: &str, writer: W) -> Result<usize> {
        let translations = self.translations(locale)?;
        write_csv(writer, &translations)?;
        Ok(translations.len())
    }

    /// Replace a locale's collection with the content of a CSV file.
    ///
    /// The locale is created when it does not exist yet. Returns the number of
    /// entries stored.
    pub fn import(&self, locale: &str, source: &Path) -> Result<usize> {
        let file = File::open(source).map_err(|e| Error::NotReadable {
            path: source.to_path_buf(),
            source: e,
        })?;
        let count = self.import_from_reader(locale, file)?;
        tracing::info!(
            locale,
            entries = count,
            "Imported translations from {}",
            source.display()
        );
        Ok(count)
    }

    pub fn import_from_reader<R: io::Read>(&self, locale: &str, reader: R) -> Result<usize> {
        let translations = read_csv(reader)?;
        self.save(locale, &translations)?;
        Ok(translations.len())
    }
}
