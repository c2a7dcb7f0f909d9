//! CLI error types with miette diagnostics.
//!
//! Maps client, model, and config errors into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use codedeploy_api::Error as ApiError;
use codedeploy_config::ConfigError;
use codedeploy_model::ModelError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const INVALID: i32 = 9;
}

/// Service error codes that mean the caller is not authenticated or allowed.
const AUTH_CODES: &[&str] = &[
    "AccessDeniedException",
    "UnrecognizedClientException",
    "InvalidSignatureException",
    "ExpiredTokenException",
    "MissingAuthenticationTokenException",
];

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not connect to {url}")]
    #[diagnostic(
        code(cdshape::connection_failed),
        help(
            "Check the endpoint of the active profile.\n\
             Try: cdshape config show"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("TLS setup failed: {message}")]
    #[diagnostic(
        code(cdshape::tls_error),
        help("Use --insecure (-k) for local endpoints, or configure ca_cert in your profile.")
    )]
    TlsError { message: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(cdshape::timeout),
        help("Increase timeout with --timeout or check endpoint responsiveness.")
    )]
    Timeout,

    // ── Service ──────────────────────────────────────────────────────

    #[error("Not authorized ({code}): {message}")]
    #[diagnostic(
        code(cdshape::auth_failed),
        help(
            "Check the token for this profile.\n\
             Run: cdshape config set-token --name <profile>"
        )
    )]
    AuthFailed { code: String, message: String },

    #[error("{code}: {message}")]
    #[diagnostic(code(cdshape::not_found))]
    NotFound { code: String, message: String },

    #[error("Service error ({code}): {message}")]
    #[diagnostic(code(cdshape::service_error))]
    ServiceError {
        code: String,
        message: String,
        request_id: Option<String>,
    },

    #[error(transparent)]
    #[diagnostic(code(cdshape::api))]
    Api(Box<ApiError>),

    // ── Payloads ─────────────────────────────────────────────────────

    #[error("Unknown operation '{name}'")]
    #[diagnostic(
        code(cdshape::unknown_operation),
        help("Run: cdshape operations to see available operations")
    )]
    UnknownOperation { name: String },

    #[error("Payload could not be decoded: {message}")]
    #[diagnostic(
        code(cdshape::decode),
        help("The payload must be a JSON object; unknown members are ignored.")
    )]
    Decode { message: String },

    #[error("{operation} payload violates {count} constraint(s)")]
    #[diagnostic(code(cdshape::invalid), help("{details}"))]
    ConstraintViolations {
        operation: String,
        count: usize,
        details: String,
    },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(cdshape::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(cdshape::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: cdshape config set-profile <name> --region <region>"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No endpoint configured")]
    #[diagnostic(
        code(cdshape::no_endpoint),
        help(
            "Pass --endpoint or --region, or create a profile.\n\
             Expected config at: {path}"
        )
    )]
    NoEndpoint { path: String },

    #[error(transparent)]
    #[diagnostic(code(cdshape::config))]
    Config(Box<ConfigError>),

    #[error("Keyring error: {0}")]
    #[diagnostic(code(cdshape::keyring))]
    Keyring(#[from] keyring::Error),

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    #[diagnostic(code(cdshape::json))]
    Json(#[from] serde_json::Error),

    #[error("YAML output failed: {0}")]
    #[diagnostic(code(cdshape::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::TlsError { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Timeout => exit_code::TIMEOUT,
            Self::ConstraintViolations { .. } => exit_code::INVALID,
            Self::UnknownOperation { .. }
            | Self::Decode { .. }
            | Self::Validation { .. }
            | Self::ProfileNotFound { .. }
            | Self::NoEndpoint { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── ModelError → CliError mapping ────────────────────────────────────

impl From<ModelError> for CliError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownOperation(name) => CliError::UnknownOperation { name },
            ModelError::Decoding { message, .. } => CliError::Decode { message },
            ModelError::Validation(violations) => CliError::ConstraintViolations {
                operation: "request".into(),
                count: violations.len(),
                details: violations.to_string(),
            },
            other => CliError::Decode {
                message: other.to_string(),
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Client(api) => api.into(),
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other => CliError::Config(Box::new(other)),
        }
    }
}

// ── ApiError → CliError mapping ──────────────────────────────────────

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport(e) if e.is_timeout() => CliError::Timeout,
            ApiError::Transport(e) if e.is_connect() => CliError::ConnectionFailed {
                url: e.url().map(ToString::to_string).unwrap_or_default(),
                source: Box::new(e),
            },
            ApiError::Tls(message) => CliError::TlsError { message },
            ApiError::InvalidUrl(e) => CliError::Validation {
                field: "endpoint".into(),
                reason: e.to_string(),
            },
            ApiError::Model(model) => model.into(),
            ApiError::Validation(violations) => CliError::ConstraintViolations {
                operation: "request".into(),
                count: violations.len(),
                details: violations.to_string(),
            },
            ApiError::Service {
                code,
                message,
                status,
                request_id,
            } => {
                if status == 401 || status == 403 || AUTH_CODES.contains(&code.as_str()) {
                    CliError::AuthFailed { code, message }
                } else if status == 404 || code.ends_with("DoesNotExistException") {
                    CliError::NotFound { code, message }
                } else {
                    CliError::ServiceError {
                        code,
                        message,
                        request_id,
                    }
                }
            }
            other => CliError::Api(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(code: &str, status: u16) -> ApiError {
        ApiError::Service {
            code: code.into(),
            message: "m".into(),
            status,
            request_id: None,
        }
    }

    #[test]
    fn service_errors_map_to_exit_codes() {
        assert_eq!(
            CliError::from(service("AccessDeniedException", 400)).exit_code(),
            exit_code::AUTH
        );
        assert_eq!(
            CliError::from(service("ApplicationDoesNotExistException", 400)).exit_code(),
            exit_code::NOT_FOUND
        );
        assert_eq!(
            CliError::from(service("InvalidRevisionException", 400)).exit_code(),
            exit_code::GENERAL
        );
    }

    #[test]
    fn model_errors_are_usage_errors() {
        let err = CliError::from(ModelError::UnknownOperation("Nope".into()));
        assert_eq!(err.exit_code(), exit_code::USAGE);
        assert_eq!(err.to_string(), "Unknown operation 'Nope'");
    }
}
