use crate::error::Result;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in `$HOME` and in the target directory.
pub const CONFIG_FILE_NAME: &str = ".ag-n8n-skills.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub bundle: BundleConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BundleConfig {
    /// Directory to install from instead of the packaged `.agent` folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Suppress banner and progress output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiet: Option<bool>,

    /// Show the banner when not quiet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<bool>,
}

impl Config {
    /// Load configuration with precedence:
    /// 1. CLI flags (applied later via with_cli_overrides)
    /// 2. Project config (.ag-n8n-skills.toml in the target directory)
    /// 3. Global config (~/.ag-n8n-skills.toml)
    /// 4. Built-in defaults
    ///
    /// A file that cannot be read or parsed is skipped with a warning.
    pub fn load(target_root: &Path) -> Self {
        let mut config = Self::default();

        let global_config = home_dir().map(|home| home.join(CONFIG_FILE_NAME));
        let project_config = Some(target_root.join(CONFIG_FILE_NAME));

        for path in [global_config, project_config].into_iter().flatten() {
            if !path.is_file() {
                continue;
            }
            tracing::debug!(path = %path.display(), "loading config");
            match Self::from_file(&path) {
                Ok(file_config) => config = config.merge(file_config),
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "ignoring configuration"
                ),
            }
        }

        config
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(mut self, other: Self) -> Self {
        if other.bundle.source.is_some() {
            self.bundle.source = other.bundle.source;
        }
        if other.output.quiet.is_some() {
            self.output.quiet = other.output.quiet;
        }
        if other.output.banner.is_some() {
            self.output.banner = other.output.banner;
        }
        self
    }

    /// Apply CLI overrides (highest precedence). `--quiet` can only
    /// switch quiet on, never off.
    pub fn with_cli_overrides(mut self, quiet: bool) -> Self {
        if quiet {
            self.output.quiet = Some(true);
        }
        self
    }

    pub fn quiet(&self) -> bool {
        self.output.quiet.unwrap_or(false)
    }

    pub fn show_banner(&self) -> bool {
        !self.quiet() && self.output.banner.unwrap_or(true)
    }

    /// Configured bundle source with `~` expanded.
    pub fn source_override(&self) -> Option<PathBuf> {
        self.bundle
            .source
            .as_deref()
            .map(|s| expand_tilde(s).unwrap_or_else(|| PathBuf::from(s)))
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgN8nSkillsError;
    use serial_test::serial;
    use std::env;
    use tempfile::TempDir;

    /// Point HOME at an empty directory for the duration of a test.
    struct IsolatedEnv {
        home: TempDir,
        original_home: Option<String>,
    }

    impl IsolatedEnv {
        fn new() -> Self {
            let home = TempDir::new().unwrap();
            let original_home = env::var("HOME").ok();
            env::set_var("HOME", home.path());
            Self {
                home,
                original_home,
            }
        }
    }

    impl Drop for IsolatedEnv {
        fn drop(&mut self) {
            match &self.original_home {
                Some(home) => env::set_var("HOME", home),
                None => env::remove_var("HOME"),
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.quiet());
        assert!(config.show_banner());
        assert!(config.source_override().is_none());
    }

    #[test]
    fn test_merge_config() {
        let mut base = Config::default();
        base.bundle.source = Some("/opt/bundle/.agent".to_string());
        base.output.banner = Some(false);

        let mut override_cfg = Config::default();
        override_cfg.output.quiet = Some(true);

        let merged = base.merge(override_cfg);
        assert_eq!(merged.bundle.source.as_deref(), Some("/opt/bundle/.agent"));
        assert_eq!(merged.output.banner, Some(false));
        assert!(merged.quiet());
    }

    #[test]
    fn test_parse_config_file() {
        let config: Config = toml::from_str(
            r#"
            [bundle]
            source = "~/bundles/.agent"

            [output]
            banner = false
            "#,
        )
        .unwrap();
        assert_eq!(config.bundle.source.as_deref(), Some("~/bundles/.agent"));
        assert!(!config.show_banner());
        assert!(!config.quiet());
    }

    #[test]
    fn test_quiet_hides_banner() {
        let config = Config::default().with_cli_overrides(true);
        assert!(config.quiet());
        assert!(!config.show_banner());
    }

    #[test]
    #[serial]
    fn test_load_layers_global_then_project() {
        let env_guard = IsolatedEnv::new();
        std::fs::write(
            env_guard.home.path().join(CONFIG_FILE_NAME),
            "[bundle]\nsource = \"/global/.agent\"\n[output]\nbanner = false\n",
        )
        .unwrap();

        let project = TempDir::new().unwrap();
        std::fs::write(
            project.path().join(CONFIG_FILE_NAME),
            "[bundle]\nsource = \"/project/.agent\"\n",
        )
        .unwrap();

        let config = Config::load(project.path());
        assert_eq!(config.source_override(), Some(PathBuf::from("/project/.agent")));
        assert_eq!(config.output.banner, Some(false));
    }

    #[test]
    fn test_unparseable_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[bundle\nsource=").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, AgN8nSkillsError::ConfigParse(_)));
    }

    #[test]
    #[serial]
    fn test_broken_file_is_skipped() {
        let env_guard = IsolatedEnv::new();
        std::fs::write(
            env_guard.home.path().join(CONFIG_FILE_NAME),
            "[bundle]\nsource = \"/global/.agent\"\n",
        )
        .unwrap();
        let project = TempDir::new().unwrap();
        std::fs::write(project.path().join(CONFIG_FILE_NAME), "[bundle").unwrap();

        let config = Config::load(project.path());
        assert_eq!(config.source_override(), Some(PathBuf::from("/global/.agent")));
        assert!(config.show_banner());
    }

    #[test]
    #[serial]
    fn test_environment_is_not_consulted() {
        let _env_guard = IsolatedEnv::new();
        env::set_var("AG_N8N_SKILLS_SOURCE", "/env/.agent");
        env::set_var("AG_N8N_SKILLS_QUIET", "maybe");

        let project = TempDir::new().unwrap();
        let config = Config::load(project.path());
        env::remove_var("AG_N8N_SKILLS_SOURCE");
        env::remove_var("AG_N8N_SKILLS_QUIET");

        assert!(config.source_override().is_none());
        assert!(!config.quiet());
    }

    #[test]
    #[serial]
    fn test_source_override_expands_tilde() {
        let env_guard = IsolatedEnv::new();
        let mut config = Config::default();
        config.bundle.source = Some("~/bundles/.agent".to_string());

        assert_eq!(
            config.source_override(),
            Some(env_guard.home.path().join("bundles/.agent"))
        );
    }
}
