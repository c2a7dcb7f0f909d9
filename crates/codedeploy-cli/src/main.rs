mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, ConfigArgs, ConfigCommand};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    // Report through miette, exit with the mapped code
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(mut cli: Cli) -> Result<(), CliError> {
    tracing::debug!(command = ?cli.command, "dispatching command");

    // `config path` and completions must work even with a broken config file
    let needs_config = !matches!(
        cli.command,
        Command::Completions(_)
            | Command::Config(ConfigArgs {
                command: ConfigCommand::Path
            })
    );
    if needs_config {
        cli.global.output = Some(config::resolve_output(&cli.global)?);
    }

    match cli.command {
        // Offline commands: no endpoint or credentials involved
        Command::Operations(ref args) => commands::operations::handle(args, &cli.global),
        Command::Inspect(ref args) => commands::inspect::handle_inspect(args, &cli.global),
        Command::Validate(ref args) => commands::inspect::handle_validate(args, &cli.global),
        Command::Config(ref args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(ref args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "cdshape", &mut std::io::stdout());
            Ok(())
        }

        Command::Call(ref args) => commands::call::handle(args, &cli.global).await,
    }
}
