//! Shared configuration for Meatline tools.
//!
//! TOML profiles, environment overrides, and translation to the settings
//! the API client is constructed from. Token material only passes through
//! here — persistence and refresh belong to whatever store supplied it.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Base URL used when neither profile nor environment supplies one.
pub const DEFAULT_BASE_URL: &str = "https://api.meatline.app/v1/";
/// Branch identifier used when unset.
pub const DEFAULT_BRANCH: &str = "main";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found in configuration")]
    ProfileNotFound { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Named backend profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            profiles: HashMap::new(),
        }
    }
}

/// A named backend profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Backend base URL; falls back to [`DEFAULT_BASE_URL`].
    pub base_url: Option<String>,

    #[serde(default = "default_branch")]
    pub branch: String,

    /// Access token in plaintext. Resolution prefers the environment; a
    /// token here is a convenience for local setups.
    pub token: Option<String>,

    #[serde(default = "default_token_type")]
    pub token_type: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            base_url: None,
            branch: default_branch(),
            token: None,
            token_type: default_token_type(),
            timeout: default_timeout(),
        }
    }
}

fn default_branch() -> String {
    DEFAULT_BRANCH.into()
}
fn default_token_type() -> String {
    "Bearer".into()
}
fn default_timeout() -> u64 {
    30
}

// ── Loading ─────────────────────────────────────────────────────────

/// Platform config file path: `<config dir>/meatline/config.toml`.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("app", "Meatline", "meatline").map_or_else(
        || PathBuf::from("meatline-config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Load the config file, layered over defaults.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load a specific config file, layered over defaults.
pub fn load_config_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let figment = Figment::from(Serialized::defaults(Config::default())).merge(Toml::file(path));
    Ok(figment.extract()?)
}

// ── Resolution ──────────────────────────────────────────────────────

/// Environment overrides, highest-precedence layer.
///
/// Split out from process-environment access so resolution stays a pure
/// function and tests can pass values directly.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub base_url: Option<String>,
    pub branch: Option<String>,
    pub token: Option<String>,
}

impl EnvOverrides {
    /// Read `MEATLINE_BASE_URL`, `MEATLINE_BRANCH`, `MEATLINE_TOKEN`.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("MEATLINE_BASE_URL").ok(),
            branch: std::env::var("MEATLINE_BRANCH").ok(),
            token: std::env::var("MEATLINE_TOKEN").ok(),
        }
    }
}

/// Everything the API client needs at construction time.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub branch: String,
    pub token: Option<SecretString>,
    pub token_type: String,
    pub timeout: Duration,
}

/// Pick a profile and fold in environment overrides.
///
/// Precedence per field: environment, then profile, then built-in default.
/// An explicitly named profile must exist; the default profile name is
/// allowed to be absent (fresh setups have no config file yet).
pub fn resolve(
    config: &Config,
    profile_name: Option<&str>,
    env: &EnvOverrides,
) -> Result<ClientSettings, ConfigError> {
    let profile = match profile_name {
        Some(name) => config
            .profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::ProfileNotFound { name: name.into() })?,
        None => {
            let name = config.default_profile.as_deref().unwrap_or("default");
            config.profiles.get(name).cloned().unwrap_or_default()
        }
    };

    let base_url = env
        .base_url
        .clone()
        .or_else(|| profile.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.into());

    // Fail here rather than at first request.
    Url::parse(&base_url).map_err(|e| ConfigError::Validation {
        field: "base_url".into(),
        reason: format!("{e}: {base_url}"),
    })?;

    let token = env
        .token
        .clone()
        .or_else(|| profile.token.clone())
        .map(SecretString::from);

    Ok(ClientSettings {
        base_url,
        branch: env.branch.clone().unwrap_or(profile.branch),
        token,
        token_type: profile.token_type,
        timeout: Duration::from_secs(profile.timeout),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::io::Write as _;

    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    use super::*;

    fn sample_config() -> Config {
        let mut profiles = HashMap::new();
        profiles.insert(
            "prod".to_owned(),
            Profile {
                base_url: Some("https://api.meatline.app/v1/".into()),
                branch: "istanbul-2".into(),
                token: Some("profile-token".into()),
                ..Profile::default()
            },
        );
        Config {
            default_profile: Some("prod".into()),
            profiles,
        }
    }

    #[test]
    fn resolves_named_profile() {
        let settings = resolve(&sample_config(), Some("prod"), &EnvOverrides::default()).unwrap();
        assert_eq!(settings.branch, "istanbul-2");
        assert_eq!(settings.token.unwrap().expose_secret(), "profile-token");
        assert_eq!(settings.timeout, Duration::from_secs(30));
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let result = resolve(&sample_config(), Some("staging"), &EnvOverrides::default());
        assert!(matches!(result, Err(ConfigError::ProfileNotFound { .. })));
    }

    #[test]
    fn missing_default_profile_falls_back_to_builtins() {
        let settings = resolve(&Config::default(), None, &EnvOverrides::default()).unwrap();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.branch, DEFAULT_BRANCH);
        assert!(settings.token.is_none());
    }

    #[test]
    fn env_beats_profile() {
        let env = EnvOverrides {
            base_url: Some("https://staging.meatline.app/v1/".into()),
            branch: Some("ankara-1".into()),
            token: Some("env-token".into()),
        };
        let settings = resolve(&sample_config(), Some("prod"), &env).unwrap();
        assert_eq!(settings.base_url, "https://staging.meatline.app/v1/");
        assert_eq!(settings.branch, "ankara-1");
        assert_eq!(settings.token.unwrap().expose_secret(), "env-token");
    }

    #[test]
    fn invalid_base_url_is_rejected_at_resolution() {
        let env = EnvOverrides {
            base_url: Some("not a url".into()),
            ..EnvOverrides::default()
        };
        let result = resolve(&Config::default(), None, &env);
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn loads_profiles_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
default_profile = "local"

[profiles.local]
base_url = "http://localhost:8080/"
branch = "dev"
timeout = 5
"#
        )
        .unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.default_profile.as_deref(), Some("local"));

        let settings = resolve(&config, None, &EnvOverrides::default()).unwrap();
        assert_eq!(settings.base_url, "http://localhost:8080/");
        assert_eq!(settings.branch, "dev");
        assert_eq!(settings.timeout, Duration::from_secs(5));
    }
}
