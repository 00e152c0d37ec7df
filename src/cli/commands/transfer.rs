//! CSV import and export.

use anyhow::Result;

use super::Context;
use super::super::args::TransferArgs;
use super::super::exit_status::ExitStatus;
use super::super::report::print_success;

pub fn import(ctx: &Context, TransferArgs { locale, file }: TransferArgs) -> Result<ExitStatus> {
    let count = ctx.manager().import(&locale, &file)?;
    print_success(&format!(
        "Imported {} translations into '{}' from {}",
        count,
        locale,
        file.display()
    ));
    Ok(ExitStatus::Success)
}

pub fn export(ctx: &Context, TransferArgs { locale, file }: TransferArgs) -> Result<ExitStatus> {
    let count = ctx.manager().export(&locale, &file)?;
    print_success(&format!(
        "Exported {} translations from '{}' to {}",
        count,
        locale,
        file.display()
    ));
    Ok(ExitStatus::Success)
}
