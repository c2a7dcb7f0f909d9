// Request authentication hook.
//
// The client hands every outgoing request to a `RequestSigner` after the
// protocol headers are set and before it goes on the wire. Credential
// resolution and SigV4 live outside this crate; callers plug them in here.

use std::fmt;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::Error;

/// The parts of a request a signer may read or amend.
pub struct SignableRequest<'a> {
    pub method: &'a str,
    pub url: &'a Url,
    pub headers: &'a mut HeaderMap,
    pub body: &'a [u8],
}

/// Authenticates requests before they are sent.
pub trait RequestSigner: Send + Sync + fmt::Debug {
    fn sign(&self, request: SignableRequest<'_>) -> Result<(), Error>;
}

/// Sends requests as-is. Suitable for local emulators and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsigned;

impl RequestSigner for Unsigned {
    fn sign(&self, _request: SignableRequest<'_>) -> Result<(), Error> {
        Ok(())
    }
}

/// Adds a fixed set of headers to every request.
///
/// Values added through [`StaticHeaders::bearer`] and
/// [`StaticHeaders::secret`] are marked sensitive so they never show up in
/// `Debug` output.
#[derive(Debug, Clone, Default)]
pub struct StaticHeaders {
    headers: HeaderMap,
}

impl StaticHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Authorization: Bearer <token>`, as accepted by gateways in front of
    /// the service.
    pub fn bearer(token: &SecretString) -> Result<Self, Error> {
        Self::new().secret(
            AUTHORIZATION,
            &SecretString::from(format!("Bearer {}", token.expose_secret())),
        )
    }

    /// Add a sensitive header.
    pub fn secret(mut self, name: HeaderName, value: &SecretString) -> Result<Self, Error> {
        let mut value = HeaderValue::from_str(value.expose_secret())
            .map_err(|e| Error::Signing(format!("invalid {name} header value: {e}")))?;
        value.set_sensitive(true);
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Add a plain header.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, Error> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::Signing(format!("invalid header name {name:?}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::Signing(format!("invalid {name} header value: {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }
}

impl RequestSigner for StaticHeaders {
    fn sign(&self, request: SignableRequest<'_>) -> Result<(), Error> {
        for (name, value) in &self.headers {
            request.headers.insert(name.clone(), value.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_is_applied_and_hidden() {
        let signer = StaticHeaders::bearer(&SecretString::from("s3cr3t")).unwrap();
        assert!(!format!("{signer:?}").contains("s3cr3t"));

        let url = Url::parse("https://codedeploy.us-east-1.amazonaws.com/").unwrap();
        let mut headers = HeaderMap::new();
        signer
            .sign(SignableRequest {
                method: "POST",
                url: &url,
                headers: &mut headers,
                body: b"{}",
            })
            .unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer s3cr3t");
    }

    #[test]
    fn invalid_header_name_is_a_signing_error() {
        let result = StaticHeaders::new().header("bad header", "x");
        assert!(matches!(result, Err(Error::Signing(_))));
    }
}
