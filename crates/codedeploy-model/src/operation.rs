// ── Operations ──
//
// An operation ties a wire name to its input and output shapes. The
// marker types and the runtime registry are generated in `operations`.

use std::fmt::{Debug, Display};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec;
use crate::error::ModelError;
use crate::validate::{Validate, Violations};

/// Bounds every request and response shape satisfies.
pub trait Shape:
    Serialize + DeserializeOwned + Validate + Display + Debug + Clone + Send + Sync + 'static
{
}

impl<T> Shape for T where
    T: Serialize + DeserializeOwned + Validate + Display + Debug + Clone + Send + Sync + 'static
{
}

/// A single CodeDeploy API action.
pub trait Operation {
    /// Action name as used in the `X-Amz-Target` header.
    const NAME: &'static str;
    type Input: Shape;
    type Output: Shape;
}

/// An operation whose output may continue on another page.
pub trait Paginated: Operation {
    fn next_token(output: &Self::Output) -> Option<&str>;

    /// Copy of `input` asking for the page after `token`.
    fn with_next_token(input: &Self::Input, token: &str) -> Self::Input;
}

/// Registry entry: lets callers work with an operation known only by name.
#[derive(Debug, Clone, Copy)]
pub struct OperationInfo {
    pub name: &'static str,
    pub paginated: bool,
    pub inspect_input: fn(&str) -> Result<Inspection, ModelError>,
    pub inspect_output: fn(&str) -> Result<Inspection, ModelError>,
}

/// A payload decoded into its shape and looked at from every angle.
#[derive(Debug, Clone)]
pub struct Inspection {
    /// `Display` projection of the decoded shape.
    pub rendered: String,
    /// The shape re-encoded: unknown fields dropped, unset fields omitted.
    pub canonical: serde_json::Value,
    pub violations: Option<Violations>,
}

/// Decode `json` as `T`, then render, re-encode, and validate it.
pub fn inspect<T: Shape>(json: &str) -> Result<Inspection, ModelError> {
    let shape: T = codec::from_str(json)?;
    Ok(Inspection {
        rendered: shape.to_string(),
        canonical: codec::to_value(&shape)?,
        violations: shape.validate().err(),
    })
}

/// Look up an operation by name, ignoring ASCII case.
pub fn find(name: &str) -> Result<&'static OperationInfo, ModelError> {
    crate::operations::REGISTRY
        .iter()
        .find(|info| info.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ModelError::UnknownOperation(name.to_owned()))
}
