use codedeploy_model::{ModelError, Violations};
use thiserror::Error;

/// Top-level error type for the `codedeploy-api` crate.
///
/// Covers every failure mode of a call: building and signing the request,
/// moving bytes over HTTP, the service rejecting the call, and turning the
/// response back into a shape.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Signing ─────────────────────────────────────────────────────
    /// The configured signer could not authenticate the request.
    #[error("Request signing failed: {0}")]
    Signing(String),

    // ── Model ───────────────────────────────────────────────────────
    /// Encoding the request or decoding the response failed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The request breaks documented constraints and strict validation is on.
    #[error("Request rejected before sending: {0}")]
    Validation(Violations),

    // ── Service ─────────────────────────────────────────────────────
    /// Structured error returned by CodeDeploy.
    #[error("{code} (HTTP {status}): {message}")]
    Service {
        code: String,
        message: String,
        status: u16,
        request_id: Option<String>,
    },
}

impl Error {
    /// Returns `true` if the service asked the caller to slow down.
    pub fn is_throttling(&self) -> bool {
        match self {
            Self::Service { code, status, .. } => {
                *status == 429
                    || matches!(
                        code.as_str(),
                        "ThrottlingException" | "RequestLimitExceeded" | "TooManyRequestsException"
                    )
            }
            _ => false,
        }
    }

    /// Returns `true` if the named resource does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Service { code, status, .. } => {
                *status == 404 || code.ends_with("DoesNotExistException")
            }
            _ => false,
        }
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Service { status, .. } => *status >= 500 || self.is_throttling(),
            _ => false,
        }
    }

    /// The service error code (`DeploymentDoesNotExistException`, ...), if any.
    pub fn service_code(&self) -> Option<&str> {
        match self {
            Self::Service { code, .. } => Some(code),
            _ => None,
        }
    }

    /// The `x-amzn-RequestId` of a failed call, for support tickets.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Service { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(code: &str, status: u16) -> Error {
        Error::Service {
            code: code.into(),
            message: "boom".into(),
            status,
            request_id: Some("req-1".into()),
        }
    }

    #[test]
    fn classifies_service_errors() {
        assert!(service("ThrottlingException", 400).is_throttling());
        assert!(service("ThrottlingException", 400).is_transient());
        assert!(service("DeploymentDoesNotExistException", 400).is_not_found());
        assert!(service("InternalFailure", 500).is_transient());
        assert!(!service("InvalidDeploymentIdException", 400).is_transient());
        assert_eq!(
            service("InvalidDeploymentIdException", 400).service_code(),
            Some("InvalidDeploymentIdException")
        );
        assert_eq!(service("X", 400).request_id(), Some("req-1"));
    }

    #[test]
    fn service_error_display() {
        assert_eq!(
            service("ApplicationDoesNotExistException", 400).to_string(),
            "ApplicationDoesNotExistException (HTTP 400): boom"
        );
    }
}
