//! Entry point for the `hivemind` binary.
#![forbid(unsafe_code)]

use hivemind_cli::CliError;

fn main() -> eyre::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    match hivemind_cli::run() {
        Ok(()) => Ok(()),
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => Err(err.into()),
    }
}
