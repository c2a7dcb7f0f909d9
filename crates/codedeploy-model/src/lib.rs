// codedeploy-model: typed request/response shapes for the AWS CodeDeploy API.
//
// Every shape is a plain value: optional fields, structural equality,
// consuming builders, and a `Display` projection for logs. The generic
// machinery lives in `macros`; the CodeDeploy catalog in `shapes` and
// `operations`.

#[macro_use]
mod macros;

pub mod codec;
pub mod enumeration;
pub mod error;
pub mod keyed;
pub mod operation;
pub mod operations;
pub mod render;
pub mod scalar;
pub mod shapes;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use enumeration::{StringEnum, UnknownValue};
pub use error::ModelError;
pub use keyed::KeyedCollection;
pub use operation::{Inspection, Operation, OperationInfo, Paginated, Shape};
pub use render::{Render, Rendered};
pub use scalar::{Double, Timestamp};
pub use validate::{Validate, ValidationMode, Violation, Violations};

// Flat access to the catalog: `use codedeploy_model::*` gives you every shape.
pub use shapes::*;
