//! Configuration management for nast.
//!
//! Parses `nast.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `input.records`
//! - `input.root_id`
//! - `output.dir`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config. Paths are taken as
/// given, relative to the working directory.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the record dump file.
    pub records: Option<PathBuf>,
    /// Override the root block id.
    pub root_id: Option<String>,
    /// Override the output directory.
    pub out_dir: Option<PathBuf>,
    /// Override standalone document output.
    pub standalone: Option<bool>,
    /// Override the missing child policy.
    pub missing_children: Option<MissingChildren>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "nast.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input section (paths are relative strings from TOML).
    input: InputConfigRaw,
    /// Output section (paths are relative strings from TOML).
    output: OutputConfigRaw,
    /// Rendering options.
    pub render: RenderConfig,
    /// Tree assembly options.
    pub assemble: AssembleConfig,

    /// Resolved input configuration (set after loading).
    #[serde(skip)]
    pub input_resolved: InputConfig,
    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct InputConfigRaw {
    records: Option<String>,
    root_id: Option<String>,
}

/// Resolved input configuration.
#[derive(Debug, Default)]
pub struct InputConfig {
    /// Record dump file, when configured.
    pub records: Option<PathBuf>,
    /// Root block id; inferred from the dump when unset.
    pub root_id: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
    standalone: Option<bool>,
}

/// Resolved output configuration with absolute paths.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// Directory receiving rendered `.html` files.
    pub dir: PathBuf,
    /// Wrap fragments in a complete HTML document.
    pub standalone: bool,
}

/// Rendering configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Class used for blocks without a color.
    pub default_color: String,
}

/// Tree assembly configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AssembleConfig {
    /// What to do with child ids that have no record.
    pub missing_children: MissingChildren,
}

/// Handling of declared children whose records are absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingChildren {
    /// Drop the child and record a warning.
    #[default]
    Skip,
    /// Fail the whole assembly.
    Fail,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`output.dir`").
        field: String,
        /// Error message (e.g., "${`SITE_DIR`} not set").
        message: String,
    },
}

/// Whether `id` looks like a block id in dash or no-dash form.
fn is_block_id(id: &str) -> bool {
    match id.len() {
        32 => id.bytes().all(|b| b.is_ascii_hexdigit()),
        36 => id.bytes().enumerate().all(|(i, b)| match i {
            8 | 13 | 18 | 23 => b == b'-',
            _ => b.is_ascii_hexdigit(),
        }),
        _ => false,
    }
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `nast.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, and the
    /// merged result is validated.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing or
    /// expansion fails, or the merged values are invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(records) = &settings.records {
            self.input_resolved.records = Some(records.clone());
        }
        if let Some(root_id) = &settings.root_id {
            self.input_resolved.root_id = Some(root_id.clone());
        }
        if let Some(out_dir) = &settings.out_dir {
            self.output_resolved.dir.clone_from(out_dir);
        }
        if let Some(standalone) = settings.standalone {
            self.output_resolved.standalone = standalone;
        }
        if let Some(missing_children) = settings.missing_children {
            self.assemble.missing_children = missing_children;
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            input: InputConfigRaw::default(),
            output: OutputConfigRaw::default(),
            render: RenderConfig::default(),
            assemble: AssembleConfig::default(),
            input_resolved: InputConfig::default(),
            output_resolved: OutputConfig {
                dir: base.join("site"),
                standalone: false,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.dir.as_deref().is_some_and(str::is_empty)
            || self.output_resolved.dir.as_os_str().is_empty()
        {
            return Err(ConfigError::Validation(
                "output.dir cannot be empty".to_owned(),
            ));
        }

        if let Some(root_id) = &self.input_resolved.root_id
            && !is_block_id(root_id)
        {
            return Err(ConfigError::Validation(format!(
                "input.root_id must be a 32- or 36-character block id, got '{root_id}'"
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref records) = self.input.records {
            self.input.records = Some(expand::expand_env(records, "input.records")?);
        }
        if let Some(ref root_id) = self.input.root_id {
            self.input.root_id = Some(expand::expand_env(root_id, "input.root_id")?);
        }
        if let Some(ref dir) = self.output.dir {
            self.output.dir = Some(expand::expand_env(dir, "output.dir")?);
        }
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.input_resolved = InputConfig {
            records: self.input.records.as_deref().map(|r| config_dir.join(r)),
            root_id: self.input.root_id.clone(),
        };
        self.output_resolved = OutputConfig {
            dir: config_dir.join(self.output.dir.as_deref().unwrap_or("site")),
            standalone: self.output.standalone.unwrap_or(false),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const ROOT_ID: &str = "0eeee000-cccc-bbbb-aaaa-123450000000";

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.output_resolved.dir, PathBuf::from("/test/site"));
        assert!(!config.output_resolved.standalone);
        assert!(config.input_resolved.records.is_none());
        assert!(config.input_resolved.root_id.is_none());
        assert_eq!(config.render.default_color, "");
        assert_eq!(config.assemble.missing_children, MissingChildren::Skip);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.input.records.is_none());
        assert_eq!(config.assemble.missing_children, MissingChildren::Skip);
    }

    #[test]
    fn test_parse_all_sections() {
        let toml = r#"
[input]
records = "dumps/handbook.json"
root_id = "0eeee000-cccc-bbbb-aaaa-123450000000"

[output]
dir = "public"
standalone = true

[render]
default_color = "color-default"

[assemble]
missing_children = "fail"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.input_resolved.records,
            Some(PathBuf::from("/project/dumps/handbook.json"))
        );
        assert_eq!(config.input_resolved.root_id.as_deref(), Some(ROOT_ID));
        assert_eq!(config.output_resolved.dir, PathBuf::from("/project/public"));
        assert!(config.output_resolved.standalone);
        assert_eq!(config.render.default_color, "color-default");
        assert_eq!(config.assemble.missing_children, MissingChildren::Fail);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let toml = r#"
[assemble]
missing_children = "ignore"
"#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_validate_root_id() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.input_resolved.root_id = Some(ROOT_ID.to_owned());
        config.validate().unwrap();

        config.input_resolved.root_id = Some("0eeee000ccccbbbbaaaa123450000000".to_owned());
        config.validate().unwrap();

        config.input_resolved.root_id = Some("not-an-id".to_owned());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("input.root_id"));
    }

    #[test]
    fn test_validate_rejects_empty_output_dir() {
        let toml = r#"
[output]
dir = ""
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("output.dir"));

        let mut config = Config::default_with_base(Path::new("/test"));
        config.apply_cli_settings(&CliSettings {
            out_dir: Some(PathBuf::new()),
            ..Default::default()
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.apply_cli_settings(&CliSettings {
            root_id: Some(ROOT_ID.to_owned()),
            out_dir: Some(PathBuf::from("out")),
            missing_children: Some(MissingChildren::Fail),
            ..Default::default()
        });

        assert_eq!(config.input_resolved.root_id.as_deref(), Some(ROOT_ID));
        assert_eq!(config.output_resolved.dir, PathBuf::from("out"));
        assert_eq!(config.assemble.missing_children, MissingChildren::Fail);
        assert!(!config.output_resolved.standalone); // Unchanged
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nast.toml");
        std::fs::write(
            &path,
            "[input]\nrecords = \"page.json\"\n[output]\nstandalone = true\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(
            config.input_resolved.records,
            Some(dir.path().join("page.json"))
        );
        assert_eq!(config.output_resolved.dir, dir.path().join("site"));
        assert!(config.output_resolved.standalone);
    }

    #[test]
    fn test_load_cli_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nast.toml");
        std::fs::write(&path, "[output]\nstandalone = true\n").unwrap();

        let settings = CliSettings {
            standalone: Some(false),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert!(!config.output_resolved.standalone);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_expands_env_vars() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::set_var("NAST_CONFIG_SITE_DIR", "public");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nast.toml");
        std::fs::write(&path, "[output]\ndir = \"${NAST_CONFIG_SITE_DIR}/html\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.output_resolved.dir, dir.path().join("public/html"));
        unsafe {
            std::env::remove_var("NAST_CONFIG_SITE_DIR");
        }
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            Config::discover_config(&nested),
            Some(dir.path().join(CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_is_block_id() {
        assert!(is_block_id(ROOT_ID));
        assert!(is_block_id("0eeee000ccccbbbbaaaa123450000000"));
        assert!(!is_block_id("0eeee000ccccbbbbaaaa12345000000"));
        assert!(!is_block_id("0eeee000-cccc-bbbb-aaaa-12345000000g"));
        assert!(!is_block_id("0eeee000ccccbbbbaaaa-123450000000----"));
    }
}
