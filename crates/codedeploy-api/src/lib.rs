// codedeploy-api: async client for the AWS CodeDeploy JSON 1.1 API.

pub mod client;
pub mod error;
pub mod protocol;
pub mod signer;
pub mod transport;

pub use client::{ClientConfig, CodeDeployClient};
pub use error::Error;
pub use signer::{RequestSigner, SignableRequest, StaticHeaders, Unsigned};
pub use transport::{TlsMode, TransportConfig};
