//! Dispatches parsed arguments to the command handlers.

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        Context, init::init, locales::locales, sync::sync, transfer, translations::translations,
    },
    exit_status::ExitStatus,
};

pub fn run(Arguments { common, command }: Arguments) -> Result<ExitStatus> {
    let Some(command) = command else {
        bail!("No command provided. Use --help to see available commands.")
    };

    match command {
        Command::Init => init(),
        Command::Locales(cmd) => locales(&Context::load(&common)?, cmd.action),
        Command::Translations(cmd) => translations(&Context::load(&common)?, cmd.action),
        Command::Import(args) => transfer::import(&Context::load(&common)?, args),
        Command::Export(args) => transfer::export(&Context::load(&common)?, args),
        Command::Sync(args) => sync(&Context::load(&common)?, args),
    }
}
