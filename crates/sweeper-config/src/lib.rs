//! Configuration loading and validation for the sweeper janitor.
//!
//! Configuration comes from an optional TOML file under the user config
//! directory, overlaid with `SWEEPER_*` environment variables. Everything is
//! validated up front so that misconfiguration is fatal before the first API
//! call. The access token is read from the environment only; it has no place
//! in a config file.

mod errors;

pub use errors::ConfigError;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

pub const ENV_PROJECT_ID: &str = "SWEEPER_PROJECT_ID";
pub const ENV_ACCESS_TOKEN: &str = "SWEEPER_ACCESS_TOKEN";
pub const ENV_STALE_AFTER_HOURS: &str = "SWEEPER_STALE_AFTER_HOURS";
pub const ENV_DRY_RUN: &str = "SWEEPER_DRY_RUN";

/// Staleness window applied when neither the config file nor the
/// environment overrides it.
pub const DEFAULT_STALE_AFTER_HOURS: i64 = 24;

/// Base URLs for the five management surfaces.
///
/// Overrides exist for pointing the janitor at a test double; the defaults
/// are the public API roots, version prefix included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub compute: String,
    pub container: String,
    pub dataproc: String,
    pub composer: String,
    pub redis: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            compute: "https://compute.googleapis.com/compute/v1".to_string(),
            container: "https://container.googleapis.com/v1".to_string(),
            dataproc: "https://dataproc.googleapis.com/v1".to_string(),
            composer: "https://composer.googleapis.com/v1".to_string(),
            redis: "https://redis.googleapis.com/v1".to_string(),
        }
    }
}

impl Endpoints {
    fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("compute", &self.compute),
            ("container", &self.container),
            ("dataproc", &self.dataproc),
            ("composer", &self.composer),
            ("redis", &self.redis),
        ]
    }
}

/// Fully resolved runtime configuration, passed down explicitly.
///
/// There is no implicit credential discovery at call sites: whoever holds a
/// `SweeperConfig` holds everything a run needs.
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    pub project_id: String,
    pub access_token: String,
    pub stale_after_hours: i64,
    pub dry_run: bool,
    pub endpoints: Endpoints,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    sweeper: SweeperSection,
    #[serde(default)]
    endpoints: EndpointsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SweeperSection {
    project_id: Option<String>,
    stale_after_hours: Option<i64>,
    dry_run: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EndpointsSection {
    compute: Option<String>,
    container: Option<String>,
    dataproc: Option<String>,
    composer: Option<String>,
    redis: Option<String>,
}

impl SweeperConfig {
    /// Load from the default config path (if present) plus environment
    /// overrides, then validate.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::load_unvalidated(default_config_path().as_deref())?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit config file path plus environment overrides,
    /// then validate. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("config file not found at '{}'", path.display()),
            });
        }
        let config = Self::load_unvalidated(Some(path))?;
        config.validate()?;
        Ok(config)
    }

    fn load_unvalidated(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(p) if p.exists() => {
                debug!(event = "config.file_loaded", path = %p.display());
                parse_file(p)?
            }
            _ => ConfigFile::default(),
        };

        let mut endpoints = Endpoints::default();
        apply_endpoint(&mut endpoints.compute, file.endpoints.compute);
        apply_endpoint(&mut endpoints.container, file.endpoints.container);
        apply_endpoint(&mut endpoints.dataproc, file.endpoints.dataproc);
        apply_endpoint(&mut endpoints.composer, file.endpoints.composer);
        apply_endpoint(&mut endpoints.redis, file.endpoints.redis);

        let project_id = env_string(ENV_PROJECT_ID)
            .or(file.sweeper.project_id)
            .unwrap_or_default();
        let access_token = env_string(ENV_ACCESS_TOKEN).unwrap_or_default();

        let stale_after_hours = match env_string(ENV_STALE_AFTER_HOURS) {
            Some(raw) => raw.parse::<i64>().map_err(|_| ConfigError::InvalidConfiguration {
                message: format!("{} must be an integer, got '{}'", ENV_STALE_AFTER_HOURS, raw),
            })?,
            None => file
                .sweeper
                .stale_after_hours
                .unwrap_or(DEFAULT_STALE_AFTER_HOURS),
        };

        let dry_run = match env_string(ENV_DRY_RUN) {
            Some(raw) => matches!(raw.as_str(), "1" | "true" | "yes"),
            None => file.sweeper.dry_run.unwrap_or(false),
        };

        Ok(Self {
            project_id,
            access_token,
            stale_after_hours,
            dry_run,
            endpoints,
        })
    }

    /// Check invariants. Called by the loaders and again by the CLI after it
    /// applies flag overrides.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project_id.is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "project_id is required (set {} or [sweeper] project_id)",
                    ENV_PROJECT_ID
                ),
            });
        }

        if self.access_token.is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("access_token is required (set {})", ENV_ACCESS_TOKEN),
            });
        }

        if self.stale_after_hours <= 0 {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "stale_after_hours must be positive, got {}",
                    self.stale_after_hours
                ),
            });
        }

        for (surface, endpoint) in self.endpoints.entries() {
            validate_endpoint(surface, endpoint)?;
        }

        Ok(())
    }
}

fn parse_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: e.to_string(),
    })
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sweeper").join("config.toml"))
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Endpoint bases are concatenated with `/`-prefixed paths downstream, so a
/// trailing slash would produce double-slash URLs.
fn apply_endpoint(target: &mut String, override_value: Option<String>) {
    if let Some(value) = override_value {
        *target = value.trim_end_matches('/').to_string();
    }
}

fn validate_endpoint(surface: &'static str, endpoint: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(endpoint).map_err(|_| ConfigError::InvalidEndpoint {
        surface: surface.to_string(),
        url: endpoint.to_string(),
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::InvalidEndpoint {
            surface: surface.to_string(),
            url: endpoint.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn base_config() -> SweeperConfig {
        SweeperConfig {
            project_id: "my-project".to_string(),
            access_token: "token".to_string(),
            stale_after_hours: DEFAULT_STALE_AFTER_HOURS,
            dry_run: false,
            endpoints: Endpoints::default(),
        }
    }

    #[test]
    fn test_default_endpoints_pass_validation() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_missing_project_id_fails_validation() {
        let mut config = base_config();
        config.project_id = String::new();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("project_id"));
    }

    #[test]
    fn test_missing_access_token_fails_validation() {
        let mut config = base_config();
        config.access_token = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains(ENV_ACCESS_TOKEN));
    }

    #[test]
    fn test_non_positive_window_fails_validation() {
        let mut config = base_config();
        config.stale_after_hours = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let mut config = base_config();
        config.endpoints.redis = "not-a-url".to_string();
        let err = config.validate().unwrap_err();
        match err {
            ConfigError::InvalidEndpoint { surface, url } => {
                assert_eq!(surface, "redis");
                assert_eq!(url, "not-a-url");
            }
            other => panic!("expected InvalidEndpoint, got: {}", other),
        }
    }

    #[test]
    fn test_non_http_endpoint_fails_validation() {
        let mut config = base_config();
        config.endpoints.compute = "ftp://example.com/v1".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file_with_env_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[sweeper]\nproject_id = \"file-project\"\nstale_after_hours = 48\n\n[endpoints]\ncompute = \"http://localhost:8080/compute/v1/\"\n"
        )
        .unwrap();

        temp_env::with_vars(
            [
                (ENV_ACCESS_TOKEN, Some("token")),
                (ENV_PROJECT_ID, None),
                (ENV_STALE_AFTER_HOURS, None),
                (ENV_DRY_RUN, None),
            ],
            || {
                let config = SweeperConfig::load_from(&path).unwrap();
                assert_eq!(config.project_id, "file-project");
                assert_eq!(config.stale_after_hours, 48);
                assert!(!config.dry_run);
                // Trailing slash is trimmed, untouched surfaces keep defaults
                assert_eq!(config.endpoints.compute, "http://localhost:8080/compute/v1");
                assert_eq!(config.endpoints.redis, Endpoints::default().redis);
            },
        );
    }

    #[test]
    fn test_env_overrides_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[sweeper]\nproject_id = \"file-project\"\n").unwrap();

        temp_env::with_vars(
            [
                (ENV_ACCESS_TOKEN, Some("token")),
                (ENV_PROJECT_ID, Some("env-project")),
                (ENV_STALE_AFTER_HOURS, Some("12")),
                (ENV_DRY_RUN, Some("true")),
            ],
            || {
                let config = SweeperConfig::load_from(&path).unwrap();
                assert_eq!(config.project_id, "env-project");
                assert_eq!(config.stale_after_hours, 12);
                assert!(config.dry_run);
            },
        );
    }

    #[test]
    fn test_bad_stale_hours_env_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[sweeper]\nproject_id = \"p\"\n").unwrap();

        temp_env::with_vars(
            [
                (ENV_ACCESS_TOKEN, Some("token")),
                (ENV_STALE_AFTER_HOURS, Some("soon")),
            ],
            || {
                let err = SweeperConfig::load_from(&path).unwrap_err();
                assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
            },
        );
    }

    #[test]
    fn test_unknown_file_key_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[sweeper]\nproject = \"typo\"\n").unwrap();

        temp_env::with_vars([(ENV_ACCESS_TOKEN, Some("token"))], || {
            let err = SweeperConfig::load_from(&path).unwrap_err();
            assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        });
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = SweeperConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
