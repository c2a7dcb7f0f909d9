//! Command handlers, one module per top-level subcommand.

pub mod call;
pub mod config_cmd;
pub mod inspect;
pub mod operations;
pub mod util;
