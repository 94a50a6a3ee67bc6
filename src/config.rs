use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::codegen::{DEFAULT_INDENT_SIZE, DEFAULT_WRAP_LIMIT};

pub const CONFIG_FILE_NAME: &str = ".bvtrimrc.json";

/// Setting this to anything but empty, `0` or `false` enables verbose output.
pub const VERBOSE_ENV: &str = "BVTRIM_VERBOSE";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Library package root, relative to the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_root: Option<String>,
    #[serde(default = "default_wrap_limit")]
    pub wrap_limit: usize,
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub verbose: bool,
}

fn default_wrap_limit() -> usize {
    DEFAULT_WRAP_LIMIT
}

fn default_indent_size() -> usize {
    DEFAULT_INDENT_SIZE
}

fn default_extensions() -> Vec<String> {
    vec!["vue".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_root: None,
            wrap_limit: default_wrap_limit(),
            indent_size: default_indent_size(),
            extensions: default_extensions(),
            ignores: Vec::new(),
            verbose: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores` or an empty
    /// `extensions` list.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        Ok(())
    }
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
    /// Config file the values came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    /// Resolve `libraryRoot` against the directory of the config file.
    pub fn library_root(&self) -> Option<PathBuf> {
        let root = Path::new(self.config.library_root.as_ref()?);
        let base = self.path.as_deref().and_then(Path::parent);
        match base {
            Some(base) if root.is_relative() => Some(base.join(root)),
            _ => Some(root.to_path_buf()),
        }
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}

/// Whether verbose output was requested through the environment.
pub fn verbose_from_env() -> bool {
    env::var(VERBOSE_ENV).is_ok_and(|value| is_truthy(&value))
}

fn is_truthy(value: &str) -> bool {
    !matches!(value.trim(), "" | "0" | "false" | "FALSE" | "False")
}
