// AWS JSON 1.1 protocol details for CodeDeploy.
//
// Every call is `POST /` with the action named in `X-Amz-Target`. Errors
// come back as a JSON body carrying `__type` and a message, with the same
// code mirrored in the `x-amzn-ErrorType` header.

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::Deserialize;

use crate::Error;

/// Service prefix of the `X-Amz-Target` header.
pub const TARGET_PREFIX: &str = "CodeDeploy_20141006";

pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

pub const TARGET_HEADER: &str = "x-amz-target";
pub const REQUEST_ID_HEADER: &str = "x-amzn-requestid";
pub const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

/// `X-Amz-Target` value for an operation, e.g. `CodeDeploy_20141006.GetDeployment`.
pub fn target_header(operation: &str) -> String {
    format!("{TARGET_PREFIX}.{operation}")
}

/// Strip the namespace and any trailing detail from an error type.
///
/// `com.amazonaws.codedeploy#DeploymentDoesNotExistException` and
/// `DeploymentDoesNotExistException:http://internal/` both yield
/// `DeploymentDoesNotExistException`.
pub fn error_code(raw: &str) -> &str {
    let code = raw.rsplit_once('#').map_or(raw, |(_, code)| code);
    code.split_once(':').map_or(code, |(code, _)| code).trim()
}

// ── Error response shape ────────────────────────────────────────────

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type", default)]
    kind: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(rename = "Message", default)]
    message_capitalized: Option<String>,
}

/// Build a typed error from a non-2xx response.
pub(crate) fn parse_error(status: StatusCode, headers: &HeaderMap, body: &str) -> Error {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };

    let parsed = serde_json::from_str::<ErrorBody>(body).ok();
    let (kind, message) = parsed.map_or((None, None), |b| {
        (b.kind, b.message.or(b.message_capitalized))
    });

    let code = kind
        .or_else(|| header(ERROR_TYPE_HEADER))
        .map(|raw| error_code(&raw).to_owned())
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("UnknownError")
                .replace(' ', "")
        });

    let message = message.unwrap_or_else(|| {
        if body.trim().is_empty() {
            status.to_string()
        } else {
            body.to_owned()
        }
    });

    Error::Service {
        code,
        message,
        status: status.as_u16(),
        request_id: header(REQUEST_ID_HEADER),
    }
}
