//! Terminal Pulse (tpulse) - CLI entry point

mod commands;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches};
use tracing_subscriber::EnvFilter;

use tpulse::cli::{version, Cli, Commands, ConfigCommands};

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let matches = Cli::command().version(version()).get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(cli.verbose);

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Parse { file, pretty } => commands::parse::handle(file.as_deref(), pretty),
        Commands::Capture {
            lines,
            target,
            pretty,
        } => {
            let config = commands::load_config(config_path)?;
            commands::capture::handle(&config, lines, target.as_deref(), pretty)
        }
        Commands::SnapshotAll { lines, pretty } => {
            let config = commands::load_config(config_path)?;
            commands::capture::handle_all(&config, lines, pretty)
        }
        Commands::Sessions { pretty } => {
            let config = commands::load_config(config_path)?;
            commands::sessions::handle(&config, pretty)
        }
        Commands::Send { text, key, target } => {
            let config = commands::load_config(config_path)?;
            commands::send::handle(&config, text.as_deref(), key.as_deref(), target.as_deref())
        }
        Commands::Health => {
            let config = commands::load_config(config_path)?;
            commands::health::handle(&config)
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => {
                let config = commands::load_config(config_path)?;
                commands::config::handle_show(&config)
            }
            ConfigCommands::Path => commands::config::handle_path(config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(config_path, force),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
