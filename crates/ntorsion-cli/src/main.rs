mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

/// Exit status after a failed parse. Usage errors exit with 1 instead of clap's
/// 2; `--help` and `--version` are printed to stdout and exit with 0.
fn exit_code_for(err: &clap::Error) -> i32 {
    if err.use_stderr() { 1 } else { 0 }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(exit_code_for(&e));
        }
    };

    if let Err(e) = run_app(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app(cli: Cli) -> Result<()> {
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("pdb-torsion v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!(
            "Setting Rayon global thread pool to {} threads.",
            num_threads
        );
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| {
                CliError::Other(anyhow::anyhow!("Failed to build global thread pool: {}", e))
            })?;
    }

    let result = match &cli.command {
        Some(Commands::Rings(args)) => commands::rings::run(args),
        None => commands::analyze::run(&cli.analyze, cli.quiet),
    };
    match &result {
        Ok(()) => info!("Command completed successfully."),
        Err(e) => debug!("Command failed: {:?}", e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exit_code(args: &[&str]) -> i32 {
        let err = Cli::try_parse_from(args.iter().copied()).unwrap_err();
        exit_code_for(&err)
    }

    #[test]
    fn usage_errors_exit_with_one() {
        assert_eq!(exit_code(&["pdb-torsion"]), 1);
        assert_eq!(exit_code(&["pdb-torsion", "rna.pdb", "--format", "xml"]), 1);
        assert_eq!(exit_code(&["pdb-torsion", "--no-such-flag", "rna.pdb"]), 1);
        assert_eq!(exit_code(&["pdb-torsion", "rings"]), 1);
    }

    #[test]
    fn help_and_version_exit_with_zero() {
        assert_eq!(exit_code(&["pdb-torsion", "--help"]), 0);
        assert_eq!(exit_code(&["pdb-torsion", "--version"]), 0);
        assert_eq!(exit_code(&["pdb-torsion", "rings", "--help"]), 0);
    }
}
