//! CLI configuration: a thin layer over `codedeploy_config`.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--endpoint, --auth-token, etc.).

use clap::ValueEnum;
use secrecy::SecretString;

use codedeploy_api::{CodeDeployClient, StaticHeaders};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use codedeploy_config::{
    Config, KEYRING_SERVICE, Profile, config_path, load_config, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Output format from `--output`, falling back to `defaults.output`.
pub fn resolve_output(global: &GlobalOpts) -> Result<OutputFormat, CliError> {
    if let Some(format) = global.output {
        return Ok(format);
    }
    let config = load_config()?;
    parse_output(&config.defaults.output)
}

fn parse_output(raw: &str) -> Result<OutputFormat, CliError> {
    <OutputFormat as ValueEnum>::from_str(raw, true).map_err(|reason| CliError::Validation {
        field: "defaults.output".into(),
        reason,
    })
}

/// Merge the active profile with flag overrides.
///
/// An explicitly named profile must exist; the implicit default may be
/// missing, in which case flags alone describe the endpoint.
pub fn resolve_profile(global: &GlobalOpts, config: &Config) -> Result<(String, Profile), CliError> {
    let name = active_profile_name(global, config);

    let mut profile = match config.profiles.get(&name) {
        Some(profile) => profile.clone(),
        None if global.profile.is_some() => {
            let mut available: Vec<&str> = config.profiles.keys().map(String::as_str).collect();
            available.sort_unstable();
            return Err(CliError::ProfileNotFound {
                name,
                available: if available.is_empty() {
                    "(none)".into()
                } else {
                    available.join(", ")
                },
            });
        }
        None => Profile::default(),
    };

    // Flag > env > profile
    if let Some(ref region) = global.region {
        profile.region = Some(region.clone());
        profile.endpoint = None;
    }
    if let Some(ref endpoint) = global.endpoint {
        profile.endpoint = Some(endpoint.clone());
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if global.timeout.is_some() {
        profile.timeout = global.timeout;
    }
    if global.validation.is_some() {
        profile.validation = global.validation;
    }

    Ok((name, profile))
}

/// Build a client for the active profile with CLI flag overrides applied.
pub fn build_client(global: &GlobalOpts) -> Result<CodeDeployClient, CliError> {
    let config = load_config()?;
    let (name, profile) = resolve_profile(global, &config)?;

    if profile.endpoint.is_none() && profile.region.is_none() {
        return Err(CliError::NoEndpoint {
            path: config_path().display().to_string(),
        });
    }

    let client = codedeploy_config::build_client(&profile, &name, &config.defaults)?;

    match global.auth_token {
        Some(ref token) => {
            let signer = StaticHeaders::bearer(&SecretString::from(token.clone()))?;
            Ok(client.with_signer(signer))
        }
        None => Ok(client),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;
    use codedeploy_model::ValidationMode;

    use super::*;
    use crate::cli::Cli;

    fn global(args: &[&str]) -> GlobalOpts {
        let mut argv = vec!["cdshape"];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&["operations"]);
        Cli::try_parse_from(argv).unwrap().global
    }

    fn config_with_staging() -> Config {
        let mut config = Config::default();
        config.profiles.insert(
            "staging".into(),
            Profile {
                endpoint: Some("https://staging.example.com/".into()),
                timeout: Some(10),
                ..Profile::default()
            },
        );
        config
    }

    #[test]
    fn flags_override_profile_values() {
        let config = config_with_staging();
        let opts = global(&[
            "--profile",
            "staging",
            "--timeout",
            "3",
            "--validation",
            "strict",
        ]);
        let (name, profile) = resolve_profile(&opts, &config).unwrap();
        assert_eq!(name, "staging");
        assert_eq!(profile.endpoint.as_deref(), Some("https://staging.example.com/"));
        assert_eq!(profile.timeout, Some(3));
        assert_eq!(profile.validation, Some(ValidationMode::Strict));
    }

    #[test]
    fn region_flag_replaces_profile_endpoint() {
        let config = config_with_staging();
        let opts = global(&["-p", "staging", "--region", "ap-south-1"]);
        let (_, profile) = resolve_profile(&opts, &config).unwrap();
        assert_eq!(profile.endpoint, None);
        assert_eq!(profile.region.as_deref(), Some("ap-south-1"));
    }

    #[test]
    fn output_flag_wins_over_config() {
        let opts = global(&["-o", "yaml"]);
        assert_eq!(resolve_output(&opts).unwrap(), OutputFormat::Yaml);
    }

    #[test]
    fn config_output_names_are_parsed() {
        assert_eq!(parse_output("json-compact").unwrap(), OutputFormat::JsonCompact);
        assert_eq!(parse_output("TABLE").unwrap(), OutputFormat::Table);
        assert!(matches!(
            parse_output("xml"),
            Err(CliError::Validation { ref field, .. }) if field == "defaults.output"
        ));
    }

    #[test]
    fn unknown_named_profile_lists_alternatives() {
        let config = config_with_staging();
        let opts = global(&["-p", "prod"]);
        let err = resolve_profile(&opts, &config).unwrap_err();
        assert!(
            matches!(err, CliError::ProfileNotFound { ref available, .. } if available == "staging"),
            "expected ProfileNotFound, got: {err:?}"
        );
    }
}
