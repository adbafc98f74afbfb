use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".catalintrc.json";

/// Patterns for strings that look translatable but are technical values
/// passed to the translation function (CSS selectors, SVG tag lists, escapes).
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    r"^\.[\w-]+$",
    r"^#[\w-]+$",
    r"^[\w-]+\.[\w-]+$",
    r"^path,rect,circle",
    r"^\\x[0-9a-fA-F]+$",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    #[serde(default = "default_scripts_dir")]
    pub scripts_dir: String,
    #[serde(default = "default_catalogs_dir")]
    pub catalogs_dir: String,
    #[serde(default = "default_marker_class")]
    pub marker_class: String,
    #[serde(default = "default_translate_function")]
    pub translate_function: String,
    #[serde(default = "default_special_keys")]
    pub special_keys: Vec<String>,
    /// Catalog keys allowed to stay unused. Empty by default; each project
    /// lists its own (color names, values only built at runtime, ...).
    #[serde(default)]
    pub whitelist: Vec<String>,
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

fn default_scripts_dir() -> String {
    "js".to_string()
}

fn default_catalogs_dir() -> String {
    "lang".to_string()
}

fn default_marker_class() -> String {
    "ds-i18n".to_string()
}

fn default_translate_function() -> String {
    "l".to_string()
}

fn default_special_keys() -> Vec<String> {
    [".authorMsg", ".title"].map(String::from).to_vec()
}

fn default_exclude_patterns() -> Vec<String> {
    DEFAULT_EXCLUDE_PATTERNS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            scripts_dir: default_scripts_dir(),
            catalogs_dir: default_catalogs_dir(),
            marker_class: default_marker_class(),
            translate_function: default_translate_function(),
            special_keys: default_special_keys(),
            whitelist: Vec::new(),
            exclude_patterns: default_exclude_patterns(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the marker class is blank, the translation function
    /// is not a plain identifier, or an exclusion pattern does not compile.
    pub fn validate(&self) -> Result<()> {
        if self.marker_class.trim().is_empty() || self.marker_class.contains('"') {
            bail!(
                "Invalid 'markerClass': \"{}\" (expected a CSS class name)",
                self.marker_class
            );
        }

        if !is_identifier(&self.translate_function) {
            bail!(
                "Invalid 'translateFunction': \"{}\" (expected an identifier such as \"l\" or \"t\")",
                self.translate_function
            );
        }

        for pattern in &self.exclude_patterns {
            Regex::new(pattern).with_context(|| {
                format!("Invalid regular expression in 'excludePatterns': \"{}\"", pattern)
            })?;
        }

        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => chars.all(|c| c.is_alphanumeric() || c == '_'),
        _ => false,
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
    /// Directory that relative paths in the config are resolved against.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
