//! Report formatting and printing utilities.
//!
//! Kept apart from the command handlers so the writers can be exercised in tests.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{SyncReport, TranslationEntry};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_success(message: &str) {
    println!("{} {}", SUCCESS_MARK.green(), message.green());
}

pub fn print_failure(message: &str) {
    eprintln!("{} {}", FAILURE_MARK.red(), message.red());
}

pub fn print_locales<'a>(locales: impl IntoIterator<Item = &'a String>) {
    let mut stdout = io::stdout().lock();
    let mut empty = true;
    for locale in locales {
        empty = false;
        let _ = writeln!(stdout, "{}", locale);
    }
    if empty {
        let _ = writeln!(stdout, "{}", "No locales".dimmed());
    }
}

pub fn print_entries(entries: &[TranslationEntry]) {
    print_entries_to(entries, &mut io::stdout().lock());
}

/// One line per entry: source, full key and the JSON-quoted value.
pub fn print_entries_to<W: Write>(entries: &[TranslationEntry], writer: &mut W) {
    let width = entries
        .iter()
        .map(|entry| entry.full_key().chars().count())
        .max()
        .unwrap_or(0);

    for entry in entries {
        let key = entry.full_key();
        let _ = writeln!(
            writer,
            "{} {}{} = {}",
            format!("{:<6}", entry.source.as_str()).dimmed(),
            key.bold(),
            " ".repeat(width - key.chars().count()),
            quote(&entry.value)
        );
    }
}

pub fn print_sync_report(locale: &str, report: &SyncReport) {
    print_sync_report_to(locale, report, &mut io::stdout().lock());
}

pub fn print_sync_report_to<W: Write>(locale: &str, report: &SyncReport, writer: &mut W) {
    for key in &report.added {
        let _ = writeln!(writer, "  {} {}", "+".green(), key);
    }
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Synced '{}': {} added ({} -> {} translations)",
            locale,
            report.added.len(),
            report.before,
            report.after
        )
        .green()
    );
}

fn quote(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}
