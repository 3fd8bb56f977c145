//! Writing the scored output table.

use std::io::Write;

use camino::Utf8Path;
use hivemind_core::Query;
use hivemind_fs::create_output;
use hivemind_scorer::QueryOutcome;
use log::info;
use serde::Serialize;

use crate::DataError;
use crate::columns::{PROB_WILLSEE, USER_ID, WORK_ID};

#[derive(Debug, Serialize)]
struct ScoreRow {
    user_id: u64,
    work_id: u64,
    prob_willsee: Option<f64>,
}

/// Write one row per query to `path`, creating parent directories.
///
/// # Errors
/// Returns [`DataError::Create`] when the file cannot be created and the
/// errors of [`write_scores_to`] otherwise.
pub fn write_scores(
    path: &Utf8Path,
    queries: &[Query],
    outcomes: &[QueryOutcome],
) -> Result<(), DataError> {
    let file = create_output(path).map_err(|source| DataError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    emit(file, queries, outcomes, path.as_str())?;
    info!("wrote {} scores to {path}", queries.len());
    Ok(())
}

/// Write `user_id,work_id,prob_willsee` rows to `writer`.
///
/// Rows follow query order. A failed outcome leaves the score cell empty.
///
/// # Errors
/// Returns [`DataError::OutcomeCount`] when `queries` and `outcomes` differ
/// in length, and [`DataError::Write`] when encoding or flushing fails.
///
/// # Examples
/// ```
/// use hivemind_core::Query;
/// use hivemind_data::write_scores_to;
///
/// # fn main() -> Result<(), hivemind_data::DataError> {
/// let mut buffer = Vec::new();
/// write_scores_to(&mut buffer, &[], &[])?;
/// assert_eq!(buffer, b"user_id,work_id,prob_willsee\n");
/// # Ok(())
/// # }
/// ```
pub fn write_scores_to<W: Write>(
    writer: W,
    queries: &[Query],
    outcomes: &[QueryOutcome],
) -> Result<(), DataError> {
    emit(writer, queries, outcomes, "<output>")
}

fn emit<W: Write>(
    writer: W,
    queries: &[Query],
    outcomes: &[QueryOutcome],
    origin: &str,
) -> Result<(), DataError> {
    if queries.len() != outcomes.len() {
        return Err(DataError::OutcomeCount {
            queries: queries.len(),
            outcomes: outcomes.len(),
        });
    }
    let write_error = |source: csv::Error| DataError::Write {
        origin: origin.to_owned(),
        source,
    };

    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record([USER_ID, WORK_ID, PROB_WILLSEE])
        .map_err(write_error)?;
    for (query, outcome) in queries.iter().zip(outcomes) {
        let row = ScoreRow {
            user_id: query.user_id,
            work_id: query.work_id,
            prob_willsee: outcome.as_ref().ok().map(|rec| rec.score),
        };
        csv.serialize(row).map_err(write_error)?;
    }
    csv.flush()
        .map_err(|source| write_error(csv::Error::from(source)))
}
