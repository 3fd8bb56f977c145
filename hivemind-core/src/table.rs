//! The in-memory ratings table shared by every derived view.
//!
//! A [`RatingsTable`] is built once from loaded rows and never mutated
//! afterwards. Lookups by user or by work go through an index built at
//! construction time; the results are identical to a full scan of the rows,
//! including their order.

use std::collections::HashMap;

use thiserror::Error;

use crate::{Rating, RatingScheme};

/// One `(user, work, rating)` row of a ratings table.
///
/// # Examples
/// ```
/// use hivemind_core::{Rating, RatingRecord};
///
/// let record = RatingRecord::new(1, 10, Rating::Like);
/// assert_eq!(record.work_id, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatingRecord {
    /// User who rated the work.
    pub user_id: u64,
    /// Rated work.
    pub work_id: u64,
    /// Category the user assigned.
    pub rating: Rating,
}

impl RatingRecord {
    /// Construct a record.
    #[must_use]
    pub const fn new(user_id: u64, work_id: u64, rating: Rating) -> Self {
        Self {
            user_id,
            work_id,
            rating,
        }
    }
}

/// Errors returned by [`RatingsTable::new`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RatingsTableError {
    /// A record used a category the table's scheme does not define.
    #[error("row {row} rates work {work_id} as {rating}, which is outside the {scheme} scheme")]
    RatingOutsideScheme {
        /// Zero-based position of the record.
        row: usize,
        /// Work named by the record.
        work_id: u64,
        /// Offending category.
        rating: Rating,
        /// Scheme of the table.
        scheme: RatingScheme,
    },
}

/// Immutable collection of rating records in a single scheme.
///
/// Each `(user_id, work_id)` pair is expected to appear at most once; the
/// table does not deduplicate and repeated pairs count twice downstream.
///
/// # Examples
/// ```
/// use hivemind_core::{Rating, RatingRecord, RatingScheme, RatingsTable};
///
/// # fn main() -> Result<(), hivemind_core::RatingsTableError> {
/// let table = RatingsTable::new(
///     RatingScheme::Binary,
///     vec![
///         RatingRecord::new(1, 10, Rating::Like),
///         RatingRecord::new(2, 10, Rating::Dislike),
///     ],
/// )?;
/// assert_eq!(table.rows_for_work(10).count(), 2);
/// assert_eq!(table.rows_for_user(3).count(), 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RatingsTable {
    scheme: RatingScheme,
    records: Vec<RatingRecord>,
    by_user: HashMap<u64, Vec<usize>>,
    by_work: HashMap<u64, Vec<usize>>,
}

impl RatingsTable {
    /// Validate `records` against `scheme` and index them.
    ///
    /// # Errors
    /// Returns [`RatingsTableError::RatingOutsideScheme`] for the first record
    /// whose category is not part of `scheme`.
    pub fn new(
        scheme: RatingScheme,
        records: Vec<RatingRecord>,
    ) -> Result<Self, RatingsTableError> {
        let mut by_user: HashMap<u64, Vec<usize>> = HashMap::new();
        let mut by_work: HashMap<u64, Vec<usize>> = HashMap::new();
        for (row, record) in records.iter().enumerate() {
            if !scheme.contains(record.rating) {
                return Err(RatingsTableError::RatingOutsideScheme {
                    row,
                    work_id: record.work_id,
                    rating: record.rating,
                    scheme,
                });
            }
            by_user.entry(record.user_id).or_default().push(row);
            by_work.entry(record.work_id).or_default().push(row);
        }
        Ok(Self {
            scheme,
            records,
            by_user,
            by_work,
        })
    }

    /// Scheme every record in the table belongs to.
    #[must_use]
    pub const fn scheme(&self) -> RatingScheme {
        self.scheme
    }

    /// All records in load order.
    #[must_use]
    pub fn records(&self) -> &[RatingRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Report whether the table holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records made by `user_id`, in load order.
    ///
    /// Unknown users yield an empty iterator.
    pub fn rows_for_user(&self, user_id: u64) -> impl Iterator<Item = &RatingRecord> + '_ {
        self.rows(self.by_user.get(&user_id))
    }

    /// Records for `work_id`, in load order.
    ///
    /// Unknown works yield an empty iterator.
    pub fn rows_for_work(&self, work_id: u64) -> impl Iterator<Item = &RatingRecord> + '_ {
        self.rows(self.by_work.get(&work_id))
    }

    /// Distinct user identifiers in order of first appearance.
    #[must_use]
    pub fn user_ids(&self) -> Vec<u64> {
        let mut seen = std::collections::HashSet::new();
        self.records
            .iter()
            .map(|record| record.user_id)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    fn rows<'a>(
        &'a self,
        positions: Option<&'a Vec<usize>>,
    ) -> impl Iterator<Item = &'a RatingRecord> + 'a {
        positions
            .into_iter()
            .flatten()
            .filter_map(move |&row| self.records.get(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn records() -> Vec<RatingRecord> {
        vec![
            RatingRecord::new(1, 10, Rating::Like),
            RatingRecord::new(2, 11, Rating::Dislike),
            RatingRecord::new(1, 11, Rating::Dislike),
            RatingRecord::new(2, 10, Rating::Like),
        ]
    }

    fn full_scan_user(records: &[RatingRecord], user_id: u64) -> Vec<RatingRecord> {
        records
            .iter()
            .filter(|r| r.user_id == user_id)
            .copied()
            .collect()
    }

    #[rstest]
    fn user_lookup_matches_full_scan(records: Vec<RatingRecord>) {
        let table = RatingsTable::new(RatingScheme::Binary, records.clone()).expect("valid table");
        for user in [1, 2, 3] {
            let indexed: Vec<_> = table.rows_for_user(user).copied().collect();
            assert_eq!(indexed, full_scan_user(&records, user));
        }
    }

    #[rstest]
    fn work_lookup_preserves_order(records: Vec<RatingRecord>) {
        let table = RatingsTable::new(RatingScheme::Binary, records).expect("valid table");
        let users: Vec<_> = table.rows_for_work(11).map(|r| r.user_id).collect();
        assert_eq!(users, vec![2, 1]);
    }

    #[rstest]
    fn unknown_ids_yield_nothing(records: Vec<RatingRecord>) {
        let table = RatingsTable::new(RatingScheme::Binary, records).expect("valid table");
        assert_eq!(table.rows_for_user(99).count(), 0);
        assert_eq!(table.rows_for_work(99).count(), 0);
    }

    #[rstest]
    fn rejects_categories_outside_scheme() {
        let err = RatingsTable::new(
            RatingScheme::Binary,
            vec![
                RatingRecord::new(1, 10, Rating::Like),
                RatingRecord::new(1, 11, Rating::Love),
            ],
        )
        .expect_err("love is not binary");
        assert_eq!(
            err,
            RatingsTableError::RatingOutsideScheme {
                row: 1,
                work_id: 11,
                rating: Rating::Love,
                scheme: RatingScheme::Binary,
            }
        );
    }

    #[rstest]
    fn user_ids_are_distinct_in_first_seen_order(records: Vec<RatingRecord>) {
        let table = RatingsTable::new(RatingScheme::Binary, records).expect("valid table");
        assert_eq!(table.user_ids(), vec![1, 2]);
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
    }
}
