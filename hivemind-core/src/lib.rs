//! Core domain types for the hivemind recommender.
//!
//! A [`RatingsTable`] holds every `(user, work, rating)` row of a dataset.
//! [`UserProfile`] and [`WorkProfile`] are views derived from it on demand,
//! and the [`Similarity`] trait compares two users by their shared ratings.
//! Constructors that can reject input return `Result` to surface bad data
//! early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod profile;
pub mod query;
pub mod rating;
pub mod similarity;
pub mod table;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use profile::{CategoryCounts, CoRating, UserProfile, WorkProfile};
pub use query::Query;
pub use rating::{Polarity, Rating, RatingParseError, RatingScheme, UnknownSchemeError};
pub use similarity::{Similarity, SimilarityError};
pub use table::{RatingRecord, RatingsTable, RatingsTableError};
