//! Project settings for Vane.
//!
//! Parses `vane.toml` with serde and discovers it in the current directory
//! or any parent. The settings decide where the site definition comes from
//! and where the rendered configuration document is written; the site itself
//! lives in `vane-site`.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String settings support `${VAR}` (error if unset) and
//! `${VAR:-default}`. Expanded fields:
//! - `site.definition`
//! - `site.src_dir`
//! - `site.out_dir`
//! - `output.path`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the site definition file.
    pub definition: Option<PathBuf>,
    /// Override the rendered document path.
    pub output_path: Option<PathBuf>,
    /// Override pretty printing of the rendered document.
    pub pretty: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "vane.toml";

/// Default render target, relative to the project directory.
const DEFAULT_OUTPUT_PATH: &str = ".vitepress/config.json";

/// Project configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site section as parsed from TOML.
    site: SiteConfigRaw,
    /// Output section as parsed from TOML.
    output: OutputConfigRaw,

    /// Resolved site settings (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteSettings,
    /// Resolved output settings (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputSettings,
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
struct SiteConfigRaw {
    definition: Option<String>,
    src_dir: Option<String>,
    out_dir: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    path: Option<String>,
    pretty: Option<bool>,
}

/// Resolved site settings.
#[derive(Debug, Default)]
pub struct SiteSettings {
    /// Site definition file. `None` selects the built-in site.
    pub definition: Option<PathBuf>,
    /// Replacement for the definition's `srcDir`.
    pub src_dir: Option<String>,
    /// Replacement for the definition's `outDir`.
    pub out_dir: Option<String>,
}

/// Resolved output settings.
#[derive(Debug)]
pub struct OutputSettings {
    /// Where `vane render` writes the configuration document.
    pub path: PathBuf,
    /// Pretty-print the JSON document.
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            pretty: true,
        }
    }
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
        /// Config field path (e.g., "`output.path`").
        field: String,
        /// Error message (e.g., "${`OUT_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `vane.toml` in current directory and parents,
    /// falling back to defaults relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or a setting is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Directory holding the config file, if one was loaded.
    #[must_use]
    pub fn project_dir(&self) -> Option<&Path> {
        self.config_path.as_deref().and_then(Path::parent)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(definition) = &settings.definition {
            self.site_resolved.definition = Some(definition.clone());
        }
        if let Some(path) = &settings.output_path {
            self.output_resolved.path.clone_from(path);
        }
        if let Some(pretty) = settings.pretty {
            self.output_resolved.pretty = pretty;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
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

    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfigRaw::default(),
            output: OutputConfigRaw::default(),
            site_resolved: SiteSettings::default(),
            output_resolved: OutputSettings {
                path: base.join(DEFAULT_OUTPUT_PATH),
                pretty: true,
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(src_dir) = &self.site_resolved.src_dir {
            require_non_empty(src_dir, "site.src_dir")?;
        }
        if let Some(out_dir) = &self.site_resolved.out_dir {
            require_non_empty(out_dir, "site.out_dir")?;
        }
        if self.output_resolved.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output.path cannot be empty".to_owned(),
            ));
        }
        if self.output_resolved.path.is_dir() {
            return Err(ConfigError::Validation(format!(
                "output.path must name a file, {} is a directory",
                self.output_resolved.path.display()
            )));
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_opt(&mut self.site.definition, "site.definition")?;
        expand::expand_opt(&mut self.site.src_dir, "site.src_dir")?;
        expand::expand_opt(&mut self.site.out_dir, "site.out_dir")?;
        expand::expand_opt(&mut self.output.path, "output.path")?;
        Ok(())
    }

    /// Resolve file paths against the config directory.
    ///
    /// `src_dir` and `out_dir` are handed to the generator verbatim, so they
    /// stay relative.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.site_resolved = SiteSettings {
            definition: self.site.definition.as_deref().map(|d| config_dir.join(d)),
            src_dir: self.site.src_dir.clone(),
            out_dir: self.site.out_dir.clone(),
        };
        self.output_resolved = OutputSettings {
            path: config_dir.join(self.output.path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)),
            pretty: self.output.pretty.unwrap_or(true),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.site_resolved.definition.is_none());
        assert!(config.site_resolved.src_dir.is_none());
        assert_eq!(
            config.output_resolved.path,
            PathBuf::from("/test/.vitepress/config.json")
        );
        assert!(config.output_resolved.pretty);
        assert!(config.project_dir().is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.site.definition.is_none());
        assert!(config.output.path.is_none());
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[site]
definition = "site/guide.toml"
src_dir = "docs"
out_dir = "public"

[output]
path = "build/config.json"
pretty = false
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.site_resolved.definition,
            Some(PathBuf::from("/project/site/guide.toml"))
        );
        assert_eq!(config.site_resolved.src_dir.as_deref(), Some("docs"));
        assert_eq!(config.site_resolved.out_dir.as_deref(), Some("public"));
        assert_eq!(
            config.output_resolved.path,
            PathBuf::from("/project/build/config.json")
        );
        assert!(!config.output_resolved.pretty);
    }

    #[test]
    fn test_resolve_paths_defaults_output() {
        let mut config: Config = toml::from_str("[site]\n").unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(
            config.output_resolved.path,
            PathBuf::from("/project/.vitepress/config.json")
        );
        assert!(config.output_resolved.pretty);
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            definition: Some(PathBuf::from("/defs/site.json")),
            output_path: Some(PathBuf::from("/out/config.json")),
            pretty: Some(false),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.site_resolved.definition,
            Some(PathBuf::from("/defs/site.json"))
        );
        assert_eq!(
            config.output_resolved.path,
            PathBuf::from("/out/config.json")
        );
        assert!(!config.output_resolved.pretty);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.apply_cli_settings(&CliSettings::default());
        assert!(config.site_resolved.definition.is_none());
        assert_eq!(
            config.output_resolved.path,
            PathBuf::from("/test/.vitepress/config.json")
        );
    }

    #[test]
    fn test_expand_env_vars_output_path() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("VANE_TEST_OUTPUT", "generated");
        }
        let toml = r#"
[output]
path = "${VANE_TEST_OUTPUT}/config.json"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        assert_eq!(config.output.path.as_deref(), Some("generated/config.json"));
        unsafe {
            std::env::remove_var("VANE_TEST_OUTPUT");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("VANE_TEST_MISSING_DEF");
        }
        let toml = r#"
[site]
definition = "${VANE_TEST_MISSING_DEF}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("site.definition"));
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_src_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site_resolved.src_dir = Some("  ".to_owned());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.src_dir"));
    }

    #[test]
    fn test_validate_output_path_is_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default_with_base(dir.path());
        config.output_resolved.path = dir.path().to_path_buf();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("output.path"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "[site]\ndefinition = \"site.json\"\n\n[output]\npath = \"out/config.json\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.project_dir(), Some(dir.path()));
        assert_eq!(
            config.site_resolved.definition,
            Some(dir.path().join("site.json"))
        );
        assert_eq!(
            config.output_resolved.path,
            dir.path().join("out/config.json")
        );
    }

    #[test]
    fn test_load_rejects_empty_cli_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            output_path: Some(PathBuf::new()),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("output.path"));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/vane.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[site\n").unwrap();
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
