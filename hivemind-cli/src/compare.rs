//! Compare command: inspect the shared ratings of two users.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use hivemind_core::{Rating, RatingScheme, Similarity, UserProfile};
use hivemind_data::load_ratings;
use hivemind_scorer::SimilarityMetric;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_SCHEME, ARG_SEED, ARG_TRAIN, ARG_USER_A, ARG_USER_B, ARG_WATCHED, CliError,
    ENV_COMPARE_TRAIN, ratings_source, require_existing, resolve_scheme,
};

/// CLI arguments for the `compare` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print, as JSON, the works two users have both rated, \
                 their ratings of each, and their similarity under the \
                 dataset's metric. Users that are not given are drawn at \
                 random from the ratings table.",
    about = "Compare two users of a ratings table"
)]
#[ortho_config(prefix = "HIVEMIND")]
pub(crate) struct CompareArgs {
    /// Ratings table with user_id, work_id and rating columns.
    #[arg(long = ARG_TRAIN, value_name = "path")]
    #[serde(default)]
    pub(crate) train: Option<Utf8PathBuf>,
    /// Four-level ratings that replace the training table when present.
    #[arg(long = ARG_WATCHED, value_name = "path")]
    #[serde(default)]
    pub(crate) watched: Option<Utf8PathBuf>,
    /// Rating scheme: `binary` or `four-level`.
    #[arg(long = ARG_SCHEME, value_name = "scheme")]
    #[serde(default)]
    pub(crate) scheme: Option<RatingScheme>,
    /// First user; drawn at random when omitted.
    #[arg(long = ARG_USER_A, value_name = "id")]
    #[serde(default)]
    pub(crate) user_a: Option<u64>,
    /// Second user; drawn at random when omitted.
    #[arg(long = ARG_USER_B, value_name = "id")]
    #[serde(default)]
    pub(crate) user_b: Option<u64>,
    /// Seed for the random user draw.
    #[arg(long = ARG_SEED, value_name = "u64")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl CompareArgs {
    pub(crate) fn into_config(self) -> Result<CompareConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CompareConfig::try_from(merged)
    }
}

/// Resolved `compare` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompareConfig {
    pub(crate) train: Utf8PathBuf,
    pub(crate) watched: Option<Utf8PathBuf>,
    pub(crate) scheme: RatingScheme,
    pub(crate) user_a: Option<u64>,
    pub(crate) user_b: Option<u64>,
    pub(crate) seed: Option<u64>,
}

impl CompareConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.train, ARG_TRAIN)?;
        if let Some(watched) = &self.watched {
            require_existing(watched, ARG_WATCHED)?;
        }
        Ok(())
    }

    pub(crate) fn ratings_path(&self) -> &Utf8Path {
        ratings_source(self.scheme, &self.train, self.watched.as_deref())
    }
}

impl TryFrom<CompareArgs> for CompareConfig {
    type Error = CliError;

    fn try_from(args: CompareArgs) -> Result<Self, Self::Error> {
        let train = args.train.ok_or(CliError::MissingArgument {
            field: ARG_TRAIN,
            env: ENV_COMPARE_TRAIN,
        })?;
        Ok(Self {
            train,
            scheme: resolve_scheme(args.scheme, args.watched.is_some()),
            watched: args.watched,
            user_a: args.user_a,
            user_b: args.user_b,
            seed: args.seed,
        })
    }
}

/// A work both users rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SharedWork {
    pub(crate) work_id: u64,
    pub(crate) rating_a: Rating,
    pub(crate) rating_b: Rating,
}

/// JSON document printed by `compare`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Comparison {
    pub(crate) scheme: RatingScheme,
    pub(crate) metric: String,
    pub(crate) user_a: u64,
    pub(crate) user_b: u64,
    pub(crate) common_works: Vec<SharedWork>,
    pub(crate) similarity: f64,
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_compare_with(args, &mut stdout)
}

pub(crate) fn run_compare_with(args: CompareArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let comparison = execute_compare(&config)?;
    write_comparison(writer, &comparison)
}

/// Load the ratings, settle on two users and compare them.
pub(crate) fn execute_compare(config: &CompareConfig) -> Result<Comparison, CliError> {
    let path = config.ratings_path();
    let table = load_ratings(path, config.scheme)?;
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let (user_a, user_b) = pick_users(&table.user_ids(), config.user_a, config.user_b, &mut rng)
        .ok_or_else(|| CliError::NoUsers {
            path: path.to_path_buf(),
        })?;
    debug!("comparing users {user_a} and {user_b}");

    let first = UserProfile::build(user_a, &table);
    let second = UserProfile::build(user_b, &table);
    let metric = SimilarityMetric::for_scheme(table.scheme());
    let similarity = metric.similarity(&first, &second)?;
    let common_works = first
        .co_ratings(&second)
        .into_iter()
        .map(|pair| SharedWork {
            work_id: pair.work_id,
            rating_a: pair.own,
            rating_b: pair.other,
        })
        .collect();

    Ok(Comparison {
        scheme: table.scheme(),
        metric: metric.to_string(),
        user_a,
        user_b,
        common_works,
        similarity,
    })
}

/// Fill in missing user ids from `ids`, preferring two different users.
pub(crate) fn pick_users<R: Rng + ?Sized>(
    ids: &[u64],
    user_a: Option<u64>,
    user_b: Option<u64>,
    rng: &mut R,
) -> Option<(u64, u64)> {
    let user_a = match user_a {
        Some(id) => id,
        None => pick_other(ids, user_b, rng)?,
    };
    let user_b = match user_b {
        Some(id) => id,
        None => pick_other(ids, Some(user_a), rng)?,
    };
    Some((user_a, user_b))
}

fn pick_other<R: Rng + ?Sized>(ids: &[u64], exclude: Option<u64>, rng: &mut R) -> Option<u64> {
    let candidates: Vec<u64> = ids
        .iter()
        .copied()
        .filter(|&id| Some(id) != exclude)
        .collect();
    match candidates.choose(rng) {
        Some(&id) => Some(id),
        None => ids.choose(rng).copied(),
    }
}

fn write_comparison(writer: &mut dyn Write, comparison: &Comparison) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(comparison).map_err(CliError::SerialiseComparison)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<CompareConfig, CliError> {
    let merged = CompareArgs::merge_from_layers(layers).map_err(CliError::from)?;
    CompareConfig::try_from(merged)
}
