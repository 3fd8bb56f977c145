//! Per-user and per-work views derived from a [`RatingsTable`].
//!
//! Profiles are cheap, owned snapshots built on demand. Building one for an
//! identifier absent from the table is not an error: the profile is simply
//! empty and every count is zero.

use std::collections::HashMap;

use crate::{Polarity, Rating, RatingRecord, RatingScheme, RatingsTable};

/// Number of ratings per category.
///
/// # Examples
/// ```
/// use hivemind_core::{CategoryCounts, Rating};
///
/// let counts: CategoryCounts = [Rating::Like, Rating::Like, Rating::Dislike]
///     .into_iter()
///     .collect();
/// assert_eq!(counts.count(Rating::Like), 2);
/// assert_eq!(counts.total(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    counts: [usize; 4],
}

impl CategoryCounts {
    /// Count one more rating in `rating`'s category.
    pub fn record(&mut self, rating: Rating) {
        if let Some(slot) = self.counts.get_mut(rating.index()) {
            *slot += 1;
        }
    }

    /// Number of ratings in `rating`'s category.
    #[must_use]
    pub fn count(&self, rating: Rating) -> usize {
        self.counts.get(rating.index()).copied().unwrap_or(0)
    }

    /// Number of ratings across all categories.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl FromIterator<Rating> for CategoryCounts {
    fn from_iter<I: IntoIterator<Item = Rating>>(iter: I) -> Self {
        let mut counts = Self::default();
        for rating in iter {
            counts.record(rating);
        }
        counts
    }
}

/// Everything one user has rated.
///
/// # Examples
/// ```
/// use hivemind_core::{Rating, RatingRecord, RatingScheme, RatingsTable, UserProfile};
///
/// # fn main() -> Result<(), hivemind_core::RatingsTableError> {
/// let table = RatingsTable::new(
///     RatingScheme::Binary,
///     vec![RatingRecord::new(1, 10, Rating::Like)],
/// )?;
/// let profile = UserProfile::build(1, &table);
/// assert_eq!(profile.rating_for(10), Some(Rating::Like));
/// assert_eq!(UserProfile::build(2, &table).counts().total(), 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    user_id: u64,
    records: Vec<RatingRecord>,
    counts: CategoryCounts,
}

impl UserProfile {
    /// Build the profile of `user_id` from `table`.
    #[must_use]
    pub fn build(user_id: u64, table: &RatingsTable) -> Self {
        Self::from_records(user_id, table.rows_for_user(user_id).copied().collect())
    }

    /// Build a profile from records already selected for `user_id`.
    ///
    /// Records naming another user are dropped.
    #[must_use]
    pub fn from_records(user_id: u64, records: Vec<RatingRecord>) -> Self {
        let own: Vec<RatingRecord> = records
            .into_iter()
            .filter(|record| record.user_id == user_id)
            .collect();
        let counts = own.iter().map(|record| record.rating).collect();
        Self {
            user_id,
            records: own,
            counts,
        }
    }

    /// Identifier of the profiled user.
    #[must_use]
    pub const fn user_id(&self) -> u64 {
        self.user_id
    }

    /// The user's rows, in table order.
    #[must_use]
    pub fn records(&self) -> &[RatingRecord] {
        &self.records
    }

    /// Per-category rating counts.
    #[must_use]
    pub const fn counts(&self) -> &CategoryCounts {
        &self.counts
    }

    /// Rating the user gave `work_id`, if any.
    #[must_use]
    pub fn rating_for(&self, work_id: u64) -> Option<Rating> {
        self.records
            .iter()
            .find(|record| record.work_id == work_id)
            .map(|record| record.rating)
    }

    /// Map of rated works to the rating given.
    #[must_use]
    pub fn rated_works(&self) -> HashMap<u64, Rating> {
        self.records
            .iter()
            .map(|record| (record.work_id, record.rating))
            .collect()
    }

    /// Inner join of both users' rows on `work_id`.
    ///
    /// Each pair holds `(self's rating, other's rating)`; pairs follow
    /// `self`'s row order. Repeated `(user, work)` rows produce one pair per
    /// matching combination.
    #[must_use]
    pub fn co_ratings(&self, other: &Self) -> Vec<CoRating> {
        let mut theirs: HashMap<u64, Vec<Rating>> = HashMap::new();
        for record in &other.records {
            theirs.entry(record.work_id).or_default().push(record.rating);
        }
        self.records
            .iter()
            .flat_map(|mine| {
                theirs
                    .get(&mine.work_id)
                    .into_iter()
                    .flatten()
                    .map(move |&other_rating| CoRating {
                        work_id: mine.work_id,
                        own: mine.rating,
                        other: other_rating,
                    })
            })
            .collect()
    }
}

/// One work both users rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoRating {
    /// Shared work.
    pub work_id: u64,
    /// Rating of the profile the join was called on.
    pub own: Rating,
    /// Rating of the other profile.
    pub other: Rating,
}

/// Who rated a work, grouped by category.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkProfile {
    work_id: u64,
    scheme: RatingScheme,
    raters: [Vec<u64>; 4],
}

impl WorkProfile {
    /// Build the profile of `work_id` from `table`.
    ///
    /// # Examples
    /// ```
    /// use hivemind_core::{Rating, RatingRecord, RatingScheme, RatingsTable, WorkProfile};
    ///
    /// # fn main() -> Result<(), hivemind_core::RatingsTableError> {
    /// let table = RatingsTable::new(
    ///     RatingScheme::FourLevel,
    ///     vec![
    ///         RatingRecord::new(1, 10, Rating::Love),
    ///         RatingRecord::new(2, 10, Rating::Neutral),
    ///     ],
    /// )?;
    /// let work = WorkProfile::build(10, &table);
    /// assert_eq!(work.raters(Rating::Love), &[1]);
    /// assert_eq!(work.rated_by(), 2);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn build(work_id: u64, table: &RatingsTable) -> Self {
        let mut raters: [Vec<u64>; 4] = Default::default();
        for record in table.rows_for_work(work_id) {
            if let Some(group) = raters.get_mut(record.rating.index()) {
                group.push(record.user_id);
            }
        }
        Self {
            work_id,
            scheme: table.scheme(),
            raters,
        }
    }

    /// Identifier of the profiled work.
    #[must_use]
    pub const fn work_id(&self) -> u64 {
        self.work_id
    }

    /// Users who rated the work as `rating`, in table order.
    #[must_use]
    pub fn raters(&self, rating: Rating) -> &[u64] {
        self.raters
            .get(rating.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of users who rated the work as `rating`.
    #[must_use]
    pub fn count(&self, rating: Rating) -> usize {
        self.raters(rating).len()
    }

    /// Total number of raters across the scheme's categories.
    #[must_use]
    pub fn rated_by(&self) -> usize {
        self.scheme
            .categories()
            .iter()
            .map(|&rating| self.count(rating))
            .sum()
    }

    /// Raters whose category counts in favour of the work.
    pub fn positive_raters(&self) -> impl Iterator<Item = u64> + '_ {
        self.raters_with(Polarity::Positive)
    }

    /// Raters whose category counts against the work.
    pub fn negative_raters(&self) -> impl Iterator<Item = u64> + '_ {
        self.raters_with(Polarity::Negative)
    }

    fn raters_with(&self, polarity: Polarity) -> impl Iterator<Item = u64> + '_ {
        self.scheme
            .categories()
            .iter()
            .filter(move |rating| rating.polarity() == polarity)
            .flat_map(move |&rating| self.raters(rating).iter().copied())
    }
}
