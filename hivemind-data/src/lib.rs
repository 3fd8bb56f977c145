//! CSV input and output for the hivemind recommender.
//!
//! Responsibilities:
//! - Load ratings and watched tables into a [`hivemind_core::RatingsTable`]
//!   under a chosen [`hivemind_core::RatingScheme`].
//! - Load query tables as ordered [`hivemind_core::Query`] lists.
//! - Write the scored output table, one row per query.
//!
//! Boundaries:
//! - No scoring happens here (see `hivemind-scorer`).
//! - Filesystem access goes through `hivemind-fs`.
//!
//! Invariants:
//! - Columns are located by header name; unknown columns are ignored.
//! - Row order is preserved in both directions.

#![forbid(unsafe_code)]

mod columns;
mod error;
mod output;
mod queries;
mod ratings;

pub use columns::{PROB_WILLSEE, RATING, USER_ID, WORK_ID};
pub use error::DataError;
pub use output::{write_scores, write_scores_to};
pub use queries::{load_queries, read_queries};
pub use ratings::{load_ratings, read_ratings};
