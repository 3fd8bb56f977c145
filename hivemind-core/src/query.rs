//! A `(user, work)` pair to be scored.

/// One row of a query table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Query {
    /// User asking for a recommendation.
    pub user_id: u64,
    /// Work being considered.
    pub work_id: u64,
}

impl Query {
    /// Construct a query.
    #[must_use]
    pub const fn new(user_id: u64, work_id: u64) -> Self {
        Self { user_id, work_id }
    }
}
