use anyhow::Result;

use super::Context;
use super::super::args::SyncArgs;
use super::super::exit_status::ExitStatus;
use super::super::report::print_sync_report;

pub fn sync(ctx: &Context, SyncArgs { locale }: SyncArgs) -> Result<ExitStatus> {
    let report = ctx.manager().sync(&locale)?;
    print_sync_report(&locale, &report);
    Ok(ExitStatus::Success)
}
