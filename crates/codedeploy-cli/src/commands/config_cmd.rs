//! Config subcommand handlers.

use std::io::BufRead;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, KEYRING_SERVICE};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Helpers ─────────────────────────────────────────────────────────

/// Copy of the config with plaintext tokens masked.
fn redacted(cfg: &Config) -> Config {
    let mut cfg = cfg.clone();
    for profile in cfg.profiles.values_mut() {
        if let Some(ref token) = profile.auth_token {
            profile.auth_token = Some(util::mask(token));
        }
    }
    cfg
}

/// Format config for display as TOML-like text, masking sensitive fields.
fn format_config_redacted(cfg: &Config) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "insecure = {}", cfg.defaults.insecure);
    let _ = writeln!(out, "timeout = {}", cfg.defaults.timeout);
    let _ = writeln!(out, "validation = \"{}\"", cfg.defaults.validation);

    let mut names: Vec<_> = cfg.profiles.keys().collect();
    names.sort();
    for name in names {
        let Some(p) = cfg.profiles.get(name) else {
            continue;
        };
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{name}]");
        if let Some(ref region) = p.region {
            let _ = writeln!(out, "region = \"{region}\"");
        }
        if let Some(ref endpoint) = p.endpoint {
            let _ = writeln!(out, "endpoint = \"{endpoint}\"");
        }
        if let Some(ref token) = p.auth_token {
            let _ = writeln!(out, "auth_token = \"{token}\"");
        }
        if let Some(ref env) = p.auth_token_env {
            let _ = writeln!(out, "auth_token_env = \"{env}\"");
        }
        if let Some(ref ca) = p.ca_cert {
            let _ = writeln!(out, "ca_cert = \"{}\"", ca.display());
        }
        if let Some(insecure) = p.insecure {
            let _ = writeln!(out, "insecure = {insecure}");
        }
        if let Some(timeout) = p.timeout {
            let _ = writeln!(out, "timeout = {timeout}");
        }
        if let Some(validation) = p.validation {
            let _ = writeln!(out, "validation = \"{validation}\"");
        }
    }

    out.trim_end().to_owned()
}

fn read_token_from_stdin() -> Result<String, CliError> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = redacted(&config::load_config()?);
            let rendered = output::render_single(global.output_format(), &cfg, format_config_redacted)?;
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        ConfigCommand::SetProfile {
            ref name,
            ref region,
            ref endpoint,
            default,
        } => {
            if region.is_none() && endpoint.is_none() {
                return Err(CliError::Validation {
                    field: "profile".into(),
                    reason: "pass --region or --endpoint".into(),
                });
            }
            if let Some(url) = endpoint {
                url::Url::parse(url).map_err(|e| CliError::Validation {
                    field: "endpoint".into(),
                    reason: e.to_string(),
                })?;
            }

            let mut cfg = config::load_config()?;
            let profile = cfg.profiles.entry(name.clone()).or_default();
            if region.is_some() {
                profile.region.clone_from(region);
            }
            if endpoint.is_some() {
                profile.endpoint.clone_from(endpoint);
            }
            if default {
                cfg.default_profile = Some(name.clone());
            }
            config::save_config(&cfg)?;

            output::print_output(
                &format!(
                    "Saved profile '{name}' to {}",
                    config::config_path().display()
                ),
                global.quiet,
            );
            Ok(())
        }

        ConfigCommand::SetToken {
            ref name,
            ref token,
        } => {
            let cfg = config::load_config()?;
            let name = name
                .clone()
                .unwrap_or_else(|| config::active_profile_name(global, &cfg));
            let token = match token {
                Some(token) => token.trim().to_owned(),
                None => read_token_from_stdin()?,
            };
            if token.is_empty() {
                return Err(CliError::Validation {
                    field: "token".into(),
                    reason: "token cannot be empty".into(),
                });
            }

            let entry = keyring::Entry::new(KEYRING_SERVICE, &format!("{name}/auth-token"))?;
            entry.set_password(&token)?;

            output::print_output(
                &format!("Stored token for profile '{name}' in the system keyring"),
                global.quiet,
            );
            Ok(())
        }
    }
}
