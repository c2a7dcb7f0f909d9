// ── JSON payload codec ──
//
// Thin wrappers over serde_json that map failures into `ModelError` and
// keep a body preview around for debugging. An empty body decodes as `{}`
// so that operations with no output members still succeed.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ModelError;

const PREVIEW_CHARS: usize = 200;

/// Encode a shape as a JSON request body.
pub fn to_payload<T: Serialize>(value: &T) -> Result<Vec<u8>, ModelError> {
    serde_json::to_vec(value).map_err(ModelError::Encoding)
}

/// Encode a shape as a JSON value (unset fields are absent).
pub fn to_value<T: Serialize>(value: &T) -> Result<serde_json::Value, ModelError> {
    serde_json::to_value(value).map_err(ModelError::Encoding)
}

/// Decode a shape from a raw response body.
///
/// The body must be valid UTF-8 JSON; nothing is replaced on the way in.
pub fn from_payload<T: DeserializeOwned>(body: &[u8]) -> Result<T, ModelError> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };
    serde_json::from_slice(body).map_err(|e| {
        let text = String::from_utf8_lossy(body);
        let preview: String = text.chars().take(PREVIEW_CHARS).collect();
        debug!(error = %e, "failed to decode payload");
        ModelError::Decoding {
            message: format!("{e} (body preview: {preview:?})"),
            body: text.into_owned(),
        }
    })
}

/// Decode a shape from JSON text.
pub fn from_str<T: DeserializeOwned>(text: &str) -> Result<T, ModelError> {
    from_payload(text.as_bytes())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::shapes::{AlarmConfiguration, TagResourceResponse};

    #[test]
    fn empty_body_decodes_as_empty_shape() {
        let out: TagResourceResponse = from_payload(b"").unwrap();
        assert_eq!(out, TagResourceResponse::default());
        let out: TagResourceResponse = from_str("  \n").unwrap();
        assert_eq!(out, TagResourceResponse::default());
    }

    #[test]
    fn decode_failure_keeps_body() {
        let err = from_str::<AlarmConfiguration>(r#"{"enabled":"yes"}"#).unwrap_err();
        assert!(err.is_decoding());
        match err {
            ModelError::Decoding { body, message } => {
                assert_eq!(body, r#"{"enabled":"yes"}"#);
                assert!(message.contains("body preview"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_utf8_is_a_decoding_error() {
        let err = from_payload::<crate::shapes::GetDeploymentRequest>(b"{\"deploymentId\":\"d-\xff\"}")
            .unwrap_err();
        assert!(err.is_decoding(), "unexpected error: {err}");
    }

    #[test]
    fn preview_never_splits_characters() {
        let body = "é".repeat(500);
        let err = from_str::<AlarmConfiguration>(&body).unwrap_err();
        assert!(err.is_decoding());
    }
}
