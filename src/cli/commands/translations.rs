use anyhow::Result;

use super::Context;
use super::super::args::TranslationsAction;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_entries, print_failure, print_success};
use crate::core::parse_full_key;

pub fn translations(ctx: &Context, action: TranslationsAction) -> Result<ExitStatus> {
    let manager = ctx.manager();

    match action {
        TranslationsAction::List { locale } => {
            print_entries(&manager.translations(&locale)?);
        }
        TranslationsAction::Get { locale, key: full_key } => {
            let (namespace, key) = parse_full_key(&full_key)?;
            match manager.translation(&locale, key, namespace)? {
                Some(value) => println!("{}", value),
                None => {
                    print_failure(&not_found(&full_key, &locale));
                    return Ok(ExitStatus::Failure);
                }
            }
        }
        TranslationsAction::Update {
            locale,
            key: full_key,
            value,
        } => {
            let (namespace, key) = parse_full_key(&full_key)?;
            manager.update_translation(&locale, key, &value, namespace)?;
            print_success(&format!("Updated '{}' in '{}'", full_key, locale));
        }
        TranslationsAction::Remove { locale, key: full_key } => {
            let (namespace, key) = parse_full_key(&full_key)?;
            if !manager.remove_translation(&locale, key, namespace)? {
                print_failure(&not_found(&full_key, &locale));
                return Ok(ExitStatus::Failure);
            }
            print_success(&format!("Removed '{}' from '{}'", full_key, locale));
        }
    }

    Ok(ExitStatus::Success)
}

fn not_found(full_key: &str, locale: &str) -> String {
    format!("No translation for '{}' in '{}'", full_key, locale)
}
