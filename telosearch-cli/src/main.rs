mod generate;
mod search;
mod utils;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use tracing_subscriber::{EnvFilter, fmt};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "telosearch";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Find telomere fragments of a repeat unit among short DNA sequences.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase logging verbosity (-v info, -vv debug)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(search::cli::create_search_cli())
        .subcommand(generate::cli::create_generate_cli())
}

fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        //
        // SEARCH
        //
        Some((search::cli::SEARCH_CMD, matches)) => {
            search::handlers::run_search(matches)?;
        }

        //
        // GENERATE
        //
        Some((generate::cli::GENERATE_CMD, matches)) => {
            generate::handlers::run_generate(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
