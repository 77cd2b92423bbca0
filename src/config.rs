//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/privtax/privtax.toml`
//! 3. Environment variables: `PRIVTAX_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

pub const DEFAULT_INPUT_FILE: &str = "ontology.json";
pub const DEFAULT_JSON_OUTPUT: &str = "extracted_children.json";
pub const DEFAULT_NAMES_OUTPUT: &str = "children_names.txt";

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub base_dir: Option<PathBuf>,
    pub input_file: Option<String>,
    pub json_output: Option<String>,
    pub names_output: Option<String>,
}

/// Unified configuration for privtax.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding input and output files (default: directory of the executable)
    pub base_dir: Option<PathBuf>,
    /// Ontology file name (default: ontology.json)
    pub input_file: String,
    /// JSON output file name (default: extracted_children.json)
    pub json_output: String,
    /// Name list output file name (default: children_names.txt)
    pub names_output: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_dir: None,
            input_file: DEFAULT_INPUT_FILE.into(),
            json_output: DEFAULT_JSON_OUTPUT.into(),
            names_output: DEFAULT_NAMES_OUTPUT.into(),
        }
    }
}

/// Get the XDG config directory for privtax.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "privtax").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("privtax.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Expand shell variables and tilde in `base_dir`.
    fn expand_paths(&mut self) {
        if let Some(dir) = &self.base_dir {
            let expanded = expand_env_vars(dir.to_string_lossy().as_ref());
            self.base_dir = Some(PathBuf::from(expanded));
        }
    }

    /// Merge overlay config onto self (base): overlay wins where specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            base_dir: overlay.base_dir.clone().or_else(|| self.base_dir.clone()),
            input_file: overlay
                .input_file
                .clone()
                .unwrap_or_else(|| self.input_file.clone()),
            json_output: overlay
                .json_output
                .clone()
                .unwrap_or_else(|| self.json_output.clone()),
            names_output: overlay
                .names_output
                .clone()
                .unwrap_or_else(|| self.names_output.clone()),
        }
    }

    /// Load settings with layered precedence from the global config location.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_path` - Optional config file; ignored if it does not exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Config file
    /// 3. Environment variables: `PRIVTAX_*` prefix
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_path {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply PRIVTAX_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder().add_source(
            Environment::with_prefix("PRIVTAX")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("base_dir") {
            settings.base_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("input_file") {
            settings.input_file = val;
        }
        if let Ok(val) = config.get_string("json_output") {
            settings.json_output = val;
        }
        if let Ok(val) = config.get_string("names_output") {
            settings.names_output = val;
        }

        Ok(settings)
    }

    /// Override the base directory (e.g. from the command line).
    pub fn with_base_dir(mut self, dir: PathBuf) -> Self {
        self.base_dir = Some(dir);
        self.expand_paths();
        self
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# privtax configuration
#
# Location: ~/.config/privtax/privtax.toml
# Env:      PRIVTAX_* environment variables override file values

# Directory holding the ontology and the generated files
# (default: directory of the privtax executable)
# base_dir = "~/data/privacy"

# Ontology file read from base_dir
# input_file = "ontology.json"

# Generated files written to base_dir
# json_output = "extracted_children.json"
# names_output = "children_names.txt"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_uses_standard_file_names() {
        let settings = Settings::default();
        assert_eq!(settings.base_dir, None);
        assert_eq!(settings.input_file, "ontology.json");
        assert_eq!(settings.json_output, "extracted_children.json");
        assert_eq!(settings.names_output, "children_names.txt");
    }

    #[test]
    fn given_tilde_in_base_dir_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            base_dir: Some(PathBuf::from("~/privacy")),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let dir = settings.base_dir.unwrap();
        assert!(
            dir.to_string_lossy().starts_with(&home),
            "base_dir should start with home dir: {}",
            dir.display()
        );
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let overlay = RawSettings {
            input_file: Some("taxonomy.json".to_string()),
            ..RawSettings::default()
        };

        let merged = Settings::default().merge_with(&overlay);

        assert_eq!(merged.input_file, "taxonomy.json");
        assert_eq!(merged.json_output, DEFAULT_JSON_OUTPUT);
        assert_eq!(merged.base_dir, None);
    }

    #[test]
    fn given_template_when_parsed_then_specifies_nothing() {
        let raw: RawSettings = toml::from_str(&Settings::template()).expect("parse template");
        assert!(raw.base_dir.is_none());
        assert!(raw.input_file.is_none());
    }
}
