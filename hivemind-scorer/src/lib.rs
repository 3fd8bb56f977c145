//! Collaborative-filtering scorer for the hivemind recommender.
//!
//! The crate provides the two user-user similarity metrics and the
//! aggregation that turns them into a recommendation:
//! - **Agreement ratio** ([`AgreementRatio`]) compares users of binary
//!   datasets by net agreement on shared works, relative to the total number
//!   of ratings both users made.
//! - **Label Jaccard** ([`LabelJaccard`]) compares users of four-level
//!   datasets by the fraction of shared works rated with the same label.
//! - **Hive-mind aggregation** ([`Recommender`]) adds the similarity of every
//!   rater in favour of a work, subtracts the similarity of every rater
//!   against it, averages over the raters and rescales onto `0.0..=1.0`.
//!
//! [`SimilarityMetric::for_scheme`] ties the metric to the dataset's rating
//! scheme so the two are never mixed within a run.
//!
//! # Examples
//!
//! ```
//! use hivemind_core::{Query, Rating, RatingRecord, RatingScheme, RatingsTable};
//! use hivemind_scorer::{Recommender, score_queries};
//!
//! # fn main() -> Result<(), hivemind_core::RatingsTableError> {
//! let table = RatingsTable::new(
//!     RatingScheme::Binary,
//!     vec![
//!         RatingRecord::new(1, 10, Rating::Like),
//!         RatingRecord::new(1, 11, Rating::Dislike),
//!         RatingRecord::new(2, 10, Rating::Like),
//!         RatingRecord::new(2, 11, Rating::Like),
//!     ],
//! )?;
//! let report = score_queries(&Recommender::new(&table), &[Query::new(2, 10)]);
//! assert_eq!(report.summary.failed, 0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod agreement;
mod batch;
mod jaccard;
mod metric;
mod recommender;

pub use agreement::{Agreement, AgreementRatio};
pub use batch::{BatchReport, BatchSummary, QueryOutcome, score_queries};
pub use jaccard::LabelJaccard;
pub use metric::SimilarityMetric;
pub use recommender::{RecommendError, Recommendation, Recommender, clamp_score};
