use std::io::{self, Write};

use anyhow::Result;

use super::Context;
use super::super::args::LocalesAction;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_failure, print_locales, print_success};

pub fn locales(ctx: &Context, action: LocalesAction) -> Result<ExitStatus> {
    let manager = ctx.manager();

    match action {
        LocalesAction::List => {
            print_locales(&manager.locales()?);
        }
        LocalesAction::Add { locale, initialize } => {
            manager.add_locale(&locale, initialize)?;
            if initialize {
                let count = manager.translations(&locale)?.len();
                print_success(&format!(
                    "Added locale '{}' with {} translations",
                    locale, count
                ));
            } else {
                print_success(&format!("Added locale '{}'", locale));
            }
        }
        LocalesAction::Remove { locale, yes } => {
            if !yes && manager.has_locale(&locale)? {
                // Corrupt collections are still removable; prompt without a count.
                let count = manager.translations(&locale).ok().map(|t| t.len());
                if !confirm_remove(&locale, count)? {
                    print_failure("Aborted");
                    return Ok(ExitStatus::Failure);
                }
            }
            manager.remove_locale(&locale)?;
            print_success(&format!("Removed locale '{}'", locale));
        }
    }

    Ok(ExitStatus::Success)
}

fn confirm_remove(locale: &str, count: Option<usize>) -> Result<bool> {
    match count {
        Some(count) => print!(
            "Remove locale '{}' and its {} translations? [y/N] ",
            locale, count
        ),
        None => print!("Remove locale '{}'? [y/N] ", locale),
    }
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
