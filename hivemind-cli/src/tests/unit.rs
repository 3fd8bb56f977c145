//! Focused unit tests covering shared CLI helpers.

use super::helpers::Dataset;
use super::*;
use rstest::rstest;

#[rstest]
#[case(None, false, RatingScheme::Binary)]
#[case(None, true, RatingScheme::FourLevel)]
#[case(Some(RatingScheme::Binary), true, RatingScheme::Binary)]
#[case(Some(RatingScheme::FourLevel), false, RatingScheme::FourLevel)]
fn scheme_resolution_prefers_explicit_choice(
    #[case] explicit: Option<RatingScheme>,
    #[case] has_watched: bool,
    #[case] expected: RatingScheme,
) {
    assert_eq!(resolve_scheme(explicit, has_watched), expected);
}

#[rstest]
fn watched_table_supplies_four_level_ratings() {
    let train = Utf8Path::new("train.csv");
    let watched = Utf8Path::new("watched.csv");
    assert_eq!(
        ratings_source(RatingScheme::FourLevel, train, Some(watched)),
        watched
    );
    assert_eq!(
        ratings_source(RatingScheme::Binary, train, Some(watched)),
        train
    );
    assert_eq!(ratings_source(RatingScheme::FourLevel, train, None), train);
}

#[rstest]
fn require_existing_distinguishes_missing_and_directories() {
    let dataset = Dataset::new();

    require_existing(&dataset.train(), ARG_TRAIN).expect("train exists");

    let missing = dataset.root().join("absent.csv");
    match require_existing(&missing, ARG_TRAIN) {
        Err(CliError::MissingSourceFile { field, path }) => {
            assert_eq!(field, ARG_TRAIN);
            assert_eq!(path, missing);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }

    match require_existing(dataset.root(), ARG_QUERIES) {
        Err(CliError::SourcePathNotFile { field, .. }) => assert_eq!(field, ARG_QUERIES),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn missing_subcommand_is_a_parse_error() {
    let err = Cli::try_parse_from(["hivemind"]).expect_err("subcommand required");
    assert_eq!(
        err.kind(),
        clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
}

#[rstest]
fn unknown_scheme_is_rejected_by_clap() {
    let err = Cli::try_parse_from(["hivemind", "score", "--scheme", "stars"])
        .expect_err("unknown scheme");
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}
