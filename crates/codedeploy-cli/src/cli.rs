//! Clap derive structures for the `cdshape` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use codedeploy_model::ValidationMode;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// cdshape -- decode, validate, and send AWS CodeDeploy payloads
#[derive(Debug, Parser)]
#[command(
    name = "cdshape",
    version,
    about = "Decode, validate, and send AWS CodeDeploy API payloads",
    long_about = "Works with the request and response shapes of the AWS CodeDeploy API.\n\n\
        Offline commands (operations, inspect, validate) need no configuration.\n\
        `call` sends a request to the endpoint of the selected profile.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config profile to use
    #[arg(long, short = 'p', env = "CODEDEPLOY_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Service endpoint URL (overrides profile)
    #[arg(long, short = 'e', env = "CODEDEPLOY_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// AWS region used to derive the endpoint (overrides profile)
    #[arg(long, short = 'r', env = "CODEDEPLOY_REGION", global = true)]
    pub region: Option<String>,

    /// Bearer token sent as `Authorization`
    #[arg(long, env = "CODEDEPLOY_AUTH_TOKEN", global = true, hide_env = true)]
    pub auth_token: Option<String>,

    /// Output format [default: `defaults.output` from config, else text]
    #[arg(long, short = 'o', env = "CODEDEPLOY_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Constraint handling before `call` sends a request: off, warn, strict
    #[arg(long, global = true)]
    pub validation: Option<ValidationMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "CODEDEPLOY_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "CODEDEPLOY_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

impl GlobalOpts {
    /// The selected output format, text until one is resolved.
    pub fn output_format(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// Pretty table
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the operations this tool knows about
    #[command(alias = "ops")]
    Operations(OperationsArgs),

    /// Decode a payload and show its rendering, canonical form, and violations
    #[command(alias = "i")]
    Inspect(PayloadArgs),

    /// Check a payload against documented constraints (non-zero exit if any fail)
    Validate(PayloadArgs),

    /// Send a request to the configured endpoint and print the response
    Call(CallArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Command Arguments ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct OperationsArgs {
    /// Only list operations that return paged results
    #[arg(long)]
    pub paginated: bool,
}

#[derive(Debug, Args)]
pub struct PayloadArgs {
    /// Operation name (case-insensitive), e.g. CreateDeployment
    pub operation: String,

    /// JSON file to read; `-` or omitted reads stdin
    pub file: Option<PathBuf>,

    /// Treat the payload as the operation's response instead of its request
    #[arg(long)]
    pub response: bool,
}

#[derive(Debug, Args)]
pub struct CallArgs {
    /// Operation name (case-insensitive), e.g. GetDeployment
    pub operation: String,

    /// JSON request file; `-` reads stdin, omitted sends `{}`
    pub file: Option<PathBuf>,

    /// Print the response body exactly as received
    #[arg(long)]
    pub raw: bool,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Display current configuration (secrets masked)
    Show,

    /// Add or update a profile
    SetProfile {
        /// Profile name
        name: String,

        /// AWS region
        #[arg(long)]
        region: Option<String>,

        /// Explicit endpoint URL
        #[arg(long)]
        endpoint: Option<String>,

        /// Make this the default profile
        #[arg(long)]
        default: bool,
    },

    /// Store a bearer token for a profile in the system keyring
    SetToken {
        /// Profile name (defaults to the active profile)
        #[arg(long)]
        name: Option<String>,

        /// Token value; read from stdin when omitted
        #[arg(long)]
        token: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
