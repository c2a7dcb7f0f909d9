// CodeDeploy shape catalog, grouped by resource.

pub mod application;
pub mod common;
pub mod deployment;
pub mod deployment_config;
pub mod deployment_group;
pub mod enums;
pub mod on_premises;
pub mod revision;
pub mod tagging;
pub mod target;

pub use application::*;
pub use common::*;
pub use deployment::*;
pub use deployment_config::*;
pub use deployment_group::*;
pub use enums::*;
pub use on_premises::*;
pub use revision::*;
pub use tagging::*;
pub use target::*;
