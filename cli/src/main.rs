mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, compare, export, probe};
use scout_common::config::Config;
use terminal::{logging, print};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging();
    let cfg: Config = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    let result: anyhow::Result<()> = match commands.command {
        Commands::Compare(args) => {
            print::header("starting comparison", cfg.quiet);
            compare::compare(args, &cfg)
        }
        Commands::Export(args) => {
            print::header("re-exporting report", cfg.quiet);
            export::export(args, &cfg)
        }
        Commands::Probe(args) => {
            print::header("getting ready to probe", cfg.quiet);
            probe::probe(args, &cfg).await
        }
    };

    print::rule();
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
