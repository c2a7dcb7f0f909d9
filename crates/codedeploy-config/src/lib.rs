//! Shared configuration for CodeDeploy tooling.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext),
//! and translation to `codedeploy_api::ClientConfig`. The CLI layers its
//! flag overrides on top of what this crate resolves.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use codedeploy_api::{ClientConfig, CodeDeployClient, StaticHeaders, TlsMode, TransportConfig};
use codedeploy_model::ValidationMode;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Keyring service name under which auth tokens are stored.
pub const KEYRING_SERVICE: &str = "codedeploy-rs";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{profile}' is not defined in the config file")]
    UnknownProfile { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Client(#[from] codedeploy_api::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when none is named on the command line.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named endpoint profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Look up a profile by name, falling back to `default_profile`.
    pub fn profile(&self, name: Option<&str>) -> Result<(String, &Profile), ConfigError> {
        let name = name
            .or(self.default_profile.as_deref())
            .unwrap_or("default")
            .to_owned();
        match self.profiles.get(&name) {
            Some(profile) => Ok((name, profile)),
            None => Err(ConfigError::UnknownProfile { profile: name }),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    /// Output format used when `--output` is not given.
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// How requests that break documented constraints are handled.
    #[serde(default)]
    pub validation: ValidationMode,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            insecure: false,
            timeout: default_timeout(),
            validation: ValidationMode::default(),
        }
    }
}

fn default_output() -> String {
    "text".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named endpoint profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// AWS region, used to derive the public endpoint.
    pub region: Option<String>,

    /// Explicit endpoint URL; takes precedence over `region`.
    pub endpoint: Option<String>,

    /// Bearer token (plaintext, prefer keyring or env var).
    pub auth_token: Option<String>,

    /// Environment variable name containing the bearer token.
    pub auth_token_env: Option<String>,

    /// PEM bundle to trust in addition to the system roots.
    pub ca_cert: Option<PathBuf>,

    /// Skip certificate verification for this profile.
    pub insecure: Option<bool>,

    /// Override timeout in seconds.
    pub timeout: Option<u64>,

    /// Override validation mode.
    pub validation: Option<ValidationMode>,
}

// ── Config file path ────────────────────────────────────────────────

/// `config.toml` under the platform config directory for `cdshape`.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("rs", "codedeploy", "cdshape").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("cdshape");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
///
/// A missing file yields defaults; a file that does not parse is an error.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file + environment.
///
/// Environment variables use the `CODEDEPLOY_` prefix with `__` between
/// nesting levels, e.g. `CODEDEPLOY_DEFAULTS__TIMEOUT=60`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("CODEDEPLOY_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Write `cfg` to [`config_path`], creating parent directories.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(&config_path(), cfg)
}

pub fn save_config_to(path: &Path, cfg: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve a bearer token from the credential chain.
///
/// Order: the env var named by `auth_token_env`, the system keyring entry
/// `<profile>/auth-token`, then the plaintext `auth_token`. `None` means
/// requests go out unsigned.
pub fn resolve_auth_token(profile: &Profile, profile_name: &str) -> Option<SecretString> {
    // 1. Profile's auth_token_env → env var lookup
    if let Some(ref env_name) = profile.auth_token_env {
        if let Ok(val) = std::env::var(env_name) {
            debug!(profile = profile_name, env = %env_name, "auth token from environment");
            return Some(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/auth-token")) {
        if let Ok(secret) = entry.get_password() {
            debug!(profile = profile_name, "auth token from keyring");
            return Some(SecretString::from(secret));
        }
    }

    // 3. Plaintext in config
    profile.auth_token.as_ref().map(|token| {
        debug!(profile = profile_name, "auth token from config file");
        SecretString::from(token.clone())
    })
}

// ── Translation to client config ────────────────────────────────────

/// Build a `ClientConfig` from a profile and the global defaults.
pub fn profile_to_client_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<ClientConfig, ConfigError> {
    let mut config = match (&profile.endpoint, &profile.region) {
        (Some(endpoint), _) => {
            let mut config =
                ClientConfig::for_endpoint(endpoint).map_err(|_| ConfigError::Validation {
                    field: "endpoint".into(),
                    reason: format!("invalid URL: {endpoint}"),
                })?;
            config.region.clone_from(&profile.region);
            config
        }
        (None, Some(region)) => {
            ClientConfig::for_region(region).map_err(|_| ConfigError::Validation {
                field: "region".into(),
                reason: format!("cannot derive an endpoint from '{region}'"),
            })?
        }
        (None, None) => {
            return Err(ConfigError::Validation {
                field: "endpoint".into(),
                reason: "set either `endpoint` or `region`".into(),
            });
        }
    };

    let tls = if profile.insecure.unwrap_or(defaults.insecure) {
        TlsMode::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsMode::CustomCa(ca_path.clone())
    } else {
        TlsMode::System
    };

    config.transport = TransportConfig::default()
        .with_tls(tls)
        .with_timeout(Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout)));
    config.validation = profile.validation.unwrap_or(defaults.validation);

    Ok(config)
}

/// Build a ready-to-use client: transport from the profile, bearer token
/// from the credential chain when one is configured.
pub fn build_client(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<CodeDeployClient, ConfigError> {
    let config = profile_to_client_config(profile, defaults)?;
    let client = CodeDeployClient::new(&config)?;

    match resolve_auth_token(profile, profile_name) {
        Some(token) => Ok(client.with_signer(StaticHeaders::bearer(&token)?)),
        None => Ok(client),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use figment::Jail;
    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn loads_profiles_and_env_overrides() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                default_profile = "staging"

                [defaults]
                timeout = 10
                validation = "strict"

                [profiles.staging]
                region = "eu-west-1"

                [profiles.local]
                endpoint = "http://localhost:4566"
                insecure = true
                "#,
            )?;
            jail.set_env("CODEDEPLOY_DEFAULTS__TIMEOUT", "60");

            let config = load_config_from(Path::new("config.toml")).unwrap();
            assert_eq!(config.defaults.timeout, 60);
            assert_eq!(config.defaults.validation, ValidationMode::Strict);
            assert_eq!(config.defaults.output, "text");

            let (name, profile) = config.profile(None).unwrap();
            assert_eq!(name, "staging");
            assert_eq!(profile.region.as_deref(), Some("eu-west-1"));

            let (_, local) = config.profile(Some("local")).unwrap();
            assert_eq!(local.insecure, Some(true));
            Ok(())
        });
    }

    #[test]
    fn malformed_file_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [defaults]
                timeout = "thirty"

                [profiles.prod]
                auth_token = "keep-me"
                "#,
            )?;
            let err = load_config_from(Path::new("config.toml")).unwrap_err();
            assert!(matches!(err, ConfigError::Figment(_)), "unexpected error: {err}");
            Ok(())
        });
    }

    #[test]
    fn missing_file_yields_defaults() {
        Jail::expect_with(|_| {
            let config = load_config_from(Path::new("nope.toml")).unwrap();
            assert_eq!(config.default_profile.as_deref(), Some("default"));
            assert!(config.profiles.is_empty());
            assert!(matches!(
                config.profile(None),
                Err(ConfigError::UnknownProfile { ref profile }) if profile == "default"
            ));
            Ok(())
        });
    }

    #[test]
    fn save_then_load_keeps_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.profiles.insert(
            "default".into(),
            Profile {
                region: Some("us-east-1".into()),
                validation: Some(ValidationMode::Off),
                ..Profile::default()
            },
        );
        save_config_to(&path, &config).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("[profiles.default]"));

        let loaded = load_config_from(&path).unwrap();
        let (_, profile) = loaded.profile(None).unwrap();
        assert_eq!(profile.region.as_deref(), Some("us-east-1"));
        assert_eq!(profile.validation, Some(ValidationMode::Off));
    }

    #[test]
    fn region_derives_public_endpoint() {
        let profile = Profile {
            region: Some("us-west-2".into()),
            timeout: Some(5),
            ..Profile::default()
        };
        let config = profile_to_client_config(&profile, &Defaults::default()).unwrap();
        assert_eq!(
            config.endpoint.as_str(),
            "https://codedeploy.us-west-2.amazonaws.com/"
        );
        assert_eq!(config.region.as_deref(), Some("us-west-2"));
        assert_eq!(config.transport.timeout, Duration::from_secs(5));
        assert!(matches!(config.transport.tls, TlsMode::System));
        assert_eq!(config.validation, ValidationMode::Warn);
    }

    #[test]
    fn endpoint_wins_over_region_and_insecure_applies() {
        let profile = Profile {
            region: Some("us-west-2".into()),
            endpoint: Some("https://localhost:8443/".into()),
            insecure: Some(true),
            ..Profile::default()
        };
        let config = profile_to_client_config(&profile, &Defaults::default()).unwrap();
        assert_eq!(config.endpoint.as_str(), "https://localhost:8443/");
        assert_eq!(config.region.as_deref(), Some("us-west-2"));
        assert!(matches!(config.transport.tls, TlsMode::DangerAcceptInvalid));
    }

    #[test]
    fn profile_without_location_is_rejected() {
        let result = profile_to_client_config(&Profile::default(), &Defaults::default());
        assert!(
            matches!(result, Err(ConfigError::Validation { ref field, .. }) if field == "endpoint"),
            "expected Validation error, got: {result:?}"
        );

        let bad = Profile {
            endpoint: Some("not a url".into()),
            ..Profile::default()
        };
        assert!(profile_to_client_config(&bad, &Defaults::default()).is_err());
    }

    #[test]
    fn auth_token_prefers_env_var() {
        Jail::expect_with(|jail| {
            jail.set_env("CD_TEST_TOKEN", "from-env");
            let profile = Profile {
                auth_token: Some("from-file".into()),
                auth_token_env: Some("CD_TEST_TOKEN".into()),
                ..Profile::default()
            };
            let token = resolve_auth_token(&profile, "jail-env").unwrap();
            assert_eq!(token.expose_secret(), "from-env");
            Ok(())
        });
    }
}
