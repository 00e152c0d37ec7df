use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{
    DEFAULT_COLLECTION_DIR, FileLoader, Harvester, LocalStore, Manager, NAMESPACE_SEPARATOR,
    locale::is_valid_locale,
};

pub const CONFIG_FILE_NAME: &str = ".transyncrc.json";

/// A vendor package's namespace and the directory holding its locale directories.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VendorNamespaceConfig {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory backing the local object store.
    #[serde(default = "default_store_root")]
    pub store_root: String,
    /// Subdirectory of the store holding one `<locale>.json` per locale.
    #[serde(default = "default_collection_dir")]
    pub collection_dir: String,
    #[serde(default = "default_fallback_locale")]
    pub fallback_locale: String,
    /// Application translations: `<langDir>/<locale>/<group>.json` and `<langDir>/<locale>.json`.
    #[serde(default = "default_lang_dir")]
    pub lang_dir: String,
    #[serde(default)]
    pub vendor_namespaces: Vec<VendorNamespaceConfig>,
    /// Directories holding vendor JSON catalogs (`<path>/<locale>.json`).
    #[serde(default)]
    pub vendor_json_paths: Vec<String>,
}

fn default_store_root() -> String {
    "./storage".to_string()
}

fn default_collection_dir() -> String {
    DEFAULT_COLLECTION_DIR.to_string()
}

fn default_fallback_locale() -> String {
    "en".to_string()
}

fn default_lang_dir() -> String {
    "./lang".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_root: default_store_root(),
            collection_dir: default_collection_dir(),
            fallback_locale: default_fallback_locale(),
            lang_dir: default_lang_dir(),
            vendor_namespaces: Vec::new(),
            vendor_json_paths: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for an unusable fallback locale or vendor namespace names
    /// that are empty, repeated or contain the namespace separator.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_locale(&self.fallback_locale) {
            bail!(
                "Invalid locale in 'fallbackLocale': \"{}\"",
                self.fallback_locale
            );
        }

        let mut seen = HashSet::new();
        for namespace in &self.vendor_namespaces {
            if namespace.name.is_empty() || namespace.name.contains(NAMESPACE_SEPARATOR) {
                bail!(
                    "Invalid namespace name in 'vendorNamespaces': \"{}\"",
                    namespace.name
                );
            }
            if !seen.insert(namespace.name.as_str()) {
                bail!(
                    "Duplicate namespace in 'vendorNamespaces': \"{}\"",
                    namespace.name
                );
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config resolve against.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

impl ConfigLoadResult {
    fn resolve(&self, path: &str) -> PathBuf {
        self.base_dir.join(path)
    }

    /// Build the origin loader described by the configuration.
    pub fn loader(&self) -> FileLoader {
        let config = &self.config;
        let loader = config
            .vendor_namespaces
            .iter()
            .fold(FileLoader::new(self.resolve(&config.lang_dir)), |loader, ns| {
                loader.with_namespace(ns.name.clone(), self.resolve(&ns.path))
            });
        config
            .vendor_json_paths
            .iter()
            .fold(loader, |loader, path| loader.with_json_path(self.resolve(path)))
    }

    /// Build the manager over the local store described by the configuration.
    pub fn manager(&self) -> Manager<LocalStore> {
        let config = &self.config;
        Manager::new(
            LocalStore::new(self.resolve(&config.store_root)),
            config.collection_dir.clone(),
            Harvester::new(self.loader(), config.fallback_locale.clone()),
        )
    }
}

pub fn load_config_file(path: &Path) -> Result<ConfigLoadResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;

    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok(ConfigLoadResult {
        config,
        base_dir,
        from_file: true,
    })
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => load_config_file(&path),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
