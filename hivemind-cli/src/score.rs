//! Score command implementation for the hivemind CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use hivemind_core::RatingScheme;
use hivemind_data::{load_queries, load_ratings, write_scores};
use hivemind_scorer::{BatchSummary, Recommender, score_queries};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_OUTPUT, ARG_QUERIES, ARG_SCHEME, ARG_TRAIN, ARG_WATCHED, CliError, DEFAULT_OUTPUT,
    ENV_SCORE_QUERIES, ENV_SCORE_TRAIN, ratings_source, require_existing, resolve_scheme,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Predict how likely each user in the query table is to \
                 enjoy the paired work. Binary datasets rate works 0 or 1; \
                 four-level datasets use dislike, neutral, like and love. \
                 Paths can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Score a query table against a ratings table"
)]
#[ortho_config(prefix = "HIVEMIND")]
pub(crate) struct ScoreArgs {
    /// Ratings table with user_id, work_id and rating columns.
    #[arg(long = ARG_TRAIN, value_name = "path")]
    #[serde(default)]
    pub(crate) train: Option<Utf8PathBuf>,
    /// Query table with user_id and work_id columns.
    #[arg(long = ARG_QUERIES, value_name = "path")]
    #[serde(default)]
    pub(crate) queries: Option<Utf8PathBuf>,
    /// Four-level ratings that replace the training table when present.
    #[arg(long = ARG_WATCHED, value_name = "path")]
    #[serde(default)]
    pub(crate) watched: Option<Utf8PathBuf>,
    /// Rating scheme: `binary` or `four-level`.
    #[arg(long = ARG_SCHEME, value_name = "scheme")]
    #[serde(default)]
    pub(crate) scheme: Option<RatingScheme>,
    /// Destination of the scored table.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) train: Utf8PathBuf,
    pub(crate) queries: Utf8PathBuf,
    pub(crate) watched: Option<Utf8PathBuf>,
    pub(crate) scheme: RatingScheme,
    pub(crate) output: Utf8PathBuf,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.train, ARG_TRAIN)?;
        require_existing(&self.queries, ARG_QUERIES)?;
        if let Some(watched) = &self.watched {
            require_existing(watched, ARG_WATCHED)?;
        }
        Ok(())
    }

    /// File the ratings table is loaded from.
    pub(crate) fn ratings_path(&self) -> &Utf8Path {
        ratings_source(self.scheme, &self.train, self.watched.as_deref())
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let train = args.train.ok_or(CliError::MissingArgument {
            field: ARG_TRAIN,
            env: ENV_SCORE_TRAIN,
        })?;
        let queries = args.queries.ok_or(CliError::MissingArgument {
            field: ARG_QUERIES,
            env: ENV_SCORE_QUERIES,
        })?;
        let scheme = resolve_scheme(args.scheme, args.watched.is_some());
        let output = args
            .output
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT));
        Ok(Self {
            train,
            queries,
            watched: args.watched,
            scheme,
            output,
        })
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let config = resolve_score_config(args)?;
    execute_score(&config).map(|_| ())
}

fn resolve_score_config(args: ScoreArgs) -> Result<ScoreConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Load the inputs, score every query and write the output table.
pub(crate) fn execute_score(config: &ScoreConfig) -> Result<BatchSummary, CliError> {
    let table = load_ratings(config.ratings_path(), config.scheme)?;
    let queries = load_queries(&config.queries)?;

    let recommender = Recommender::new(&table);
    info!(
        "scoring {} queries with the {} metric",
        queries.len(),
        recommender.similarity()
    );
    let report = score_queries(&recommender, &queries);
    write_scores(&config.output, &queries, &report.outcomes)?;
    info!(
        "{} scored, {} failed, output in {}",
        report.summary.scored, report.summary.failed, config.output
    );
    Ok(report.summary)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
