use std::env;

use anyhow::{Context as _, Result};

use super::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, load_config, load_config_file};
use crate::core::{LocalStore, Manager};

pub mod init;
pub mod locales;
pub mod sync;
pub mod transfer;
pub mod translations;

/// Shared state for commands that work on the store.
pub struct Context {
    manager: Manager<LocalStore>,
}

impl Context {
    pub fn load(common: &CommonArgs) -> Result<Self> {
        let loaded = match &common.config {
            Some(path) => load_config_file(path)?,
            None => {
                let cwd = env::current_dir().context("Failed to get current directory")?;
                load_config(&cwd)?
            }
        };

        if !loaded.from_file {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
        }
        tracing::debug!(store = %loaded.base_dir.join(&loaded.config.store_root).display(), "opening store");

        Ok(Self {
            manager: loaded.manager(),
        })
    }

    pub fn manager(&self) -> &Manager<LocalStore> {
        &self.manager
    }
}
