//! Command-line interface for the hivemind recommender.
//!
//! Two subcommands share one configuration story: values come from CLI
//! flags, configuration files or `HIVEMIND_`-prefixed environment variables,
//! merged by `ortho_config`.
//! - `score` predicts `prob_willsee` for every row of a query table.
//! - `compare` prints the works two users share and their similarity.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use hivemind_core::RatingScheme;

mod compare;
mod error;
mod score;

pub use error::CliError;

use compare::{CompareArgs, run_compare};
use score::{ScoreArgs, run_score};

pub(crate) const ARG_TRAIN: &str = "train";
pub(crate) const ARG_QUERIES: &str = "queries";
pub(crate) const ARG_WATCHED: &str = "watched";
pub(crate) const ARG_SCHEME: &str = "scheme";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_USER_A: &str = "user-a";
pub(crate) const ARG_USER_B: &str = "user-b";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ENV_SCORE_TRAIN: &str = "HIVEMIND_CMDS_SCORE_TRAIN";
pub(crate) const ENV_SCORE_QUERIES: &str = "HIVEMIND_CMDS_SCORE_QUERIES";
pub(crate) const ENV_COMPARE_TRAIN: &str = "HIVEMIND_CMDS_COMPARE_TRAIN";

/// Output path used when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "submission.csv";

/// Run the hivemind CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, loading,
/// scoring or writing fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    match cli.command {
        Command::Score(args) => run_score(args),
        Command::Compare(args) => run_compare(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "hivemind",
    about = "User-user collaborative filtering over CSV rating tables",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score every (user, work) pair of a query table.
    Score(ScoreArgs),
    /// Show the shared works and similarity of two users.
    Compare(CompareArgs),
}

/// Resolve the effective rating scheme.
///
/// An explicit choice wins; otherwise a watched table implies the four-level
/// scheme and its absence the binary one.
pub(crate) fn resolve_scheme(explicit: Option<RatingScheme>, has_watched: bool) -> RatingScheme {
    explicit.unwrap_or(if has_watched {
        RatingScheme::FourLevel
    } else {
        RatingScheme::Binary
    })
}

/// Pick the file that supplies ratings: the watched table under the
/// four-level scheme when present, the training table otherwise.
pub(crate) fn ratings_source<'a>(
    scheme: RatingScheme,
    train: &'a Utf8Path,
    watched: Option<&'a Utf8Path>,
) -> &'a Utf8Path {
    match (scheme, watched) {
        (RatingScheme::FourLevel, Some(watched)) => watched,
        _ => train,
    }
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match hivemind_fs::is_regular_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests;
