//! Loading ratings (and watched) tables.

use std::io::Read;

use camino::Utf8Path;
use hivemind_core::{RatingRecord, RatingScheme, RatingsTable};
use hivemind_fs::open_input;
use log::info;

use crate::DataError;
use crate::columns::{RATING, USER_ID, WORK_ID, csv_error, csv_reader, line_of, locate, parse_id};

const INPUT: &str = "<input>";

/// Load a ratings CSV from `path`, interpreting ratings with `scheme`.
///
/// The file needs a header row naming `user_id`, `work_id` and `rating`;
/// other columns are ignored. The watched table of four-level datasets has
/// the same layout and is loaded the same way.
///
/// # Errors
/// Returns [`DataError::Open`] when the file cannot be opened, and the
/// errors of [`read_ratings`] for its contents.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use hivemind_core::RatingScheme;
/// use hivemind_data::load_ratings;
///
/// # fn main() -> Result<(), hivemind_data::DataError> {
/// let table = load_ratings(Utf8Path::new("data/train.csv"), RatingScheme::Binary)?;
/// println!("{} ratings", table.len());
/// # Ok(())
/// # }
/// ```
pub fn load_ratings(path: &Utf8Path, scheme: RatingScheme) -> Result<RatingsTable, DataError> {
    let file = open_input(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_ratings(file, scheme, path.as_str())?;
    info!(
        "loaded {} {scheme} ratings from {path} ({} users)",
        table.len(),
        table.user_ids().len()
    );
    Ok(table)
}

/// Read a ratings CSV from any reader.
///
/// # Errors
/// Returns [`DataError::MissingColumn`] for an incomplete header,
/// [`DataError::MalformedId`] or [`DataError::InvalidRating`] for bad cells,
/// and [`DataError::Csv`] when the stream itself cannot be decoded.
pub fn read_ratings<R: Read>(reader: R, scheme: RatingScheme) -> Result<RatingsTable, DataError> {
    parse_ratings(reader, scheme, INPUT)
}

fn parse_ratings<R: Read>(
    reader: R,
    scheme: RatingScheme,
    origin: &str,
) -> Result<RatingsTable, DataError> {
    let mut csv = csv_reader(reader);
    let headers = csv
        .headers()
        .map_err(|source| csv_error(origin, source))?
        .clone();
    let user_col = locate(&headers, USER_ID, origin)?;
    let work_col = locate(&headers, WORK_ID, origin)?;
    let rating_col = locate(&headers, RATING, origin)?;

    let mut records = Vec::new();
    for row in csv.records() {
        let row = row.map_err(|source| csv_error(origin, source))?;
        let line = line_of(&row);
        let user_id = parse_id(&row, user_col, USER_ID, origin, line)?;
        let work_id = parse_id(&row, work_col, WORK_ID, origin, line)?;
        let rating = scheme
            .parse_rating(row.get(rating_col).unwrap_or_default())
            .map_err(|source| DataError::InvalidRating {
                origin: origin.to_owned(),
                line,
                source,
            })?;
        records.push(RatingRecord::new(user_id, work_id, rating));
    }

    RatingsTable::new(scheme, records).map_err(|source| DataError::Table {
        origin: origin.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    //! Unit coverage for the ratings reader.

    use hivemind_core::{Rating, RatingScheme};
    use rstest::rstest;

    use super::read_ratings;
    use crate::DataError;

    #[rstest]
    fn reads_binary_rows_in_order() {
        let csv = "user_id,work_id,rating\n1,10,1\n1,11,0\n2,10,1\n";
        let table = read_ratings(csv.as_bytes(), RatingScheme::Binary).expect("valid csv");
        let ratings: Vec<_> = table
            .records()
            .iter()
            .map(|r| (r.user_id, r.work_id, r.rating))
            .collect();
        assert_eq!(
            ratings,
            vec![
                (1, 10, Rating::Like),
                (1, 11, Rating::Dislike),
                (2, 10, Rating::Like),
            ]
        );
    }

    #[rstest]
    fn columns_are_found_by_name() {
        let csv = "rating,note,work_id,user_id\nlove,x,20,3\n neutral ,y,21,3\n";
        let table = read_ratings(csv.as_bytes(), RatingScheme::FourLevel).expect("valid csv");
        assert_eq!(table.len(), 2);
        let ratings: Vec<_> = table.rows_for_user(3).map(|r| r.rating).collect();
        assert_eq!(ratings, vec![Rating::Love, Rating::Neutral]);
    }

    #[rstest]
    fn header_only_yields_an_empty_table() {
        let table = read_ratings("user_id,work_id,rating\n".as_bytes(), RatingScheme::Binary)
            .expect("header only");
        assert!(table.is_empty());
    }

    #[rstest]
    fn missing_column_is_reported() {
        let err = read_ratings("user_id,work_id\n1,2\n".as_bytes(), RatingScheme::Binary)
            .expect_err("rating column missing");
        assert!(matches!(
            err,
            DataError::MissingColumn {
                column: "rating",
                ..
            }
        ));
    }

    #[rstest]
    #[case::label_in_binary("user_id,work_id,rating\n1,10,like\n", RatingScheme::Binary)]
    #[case::digit_in_four_level("user_id,work_id,rating\n1,10,1\n", RatingScheme::FourLevel)]
    #[case::empty_cell("user_id,work_id,rating\n1,10,\n", RatingScheme::Binary)]
    fn out_of_domain_ratings_name_the_line(#[case] csv: &str, #[case] scheme: RatingScheme) {
        let err = read_ratings(csv.as_bytes(), scheme).expect_err("invalid rating");
        assert!(
            matches!(err, DataError::InvalidRating { line: 2, .. }),
            "unexpected error: {err}"
        );
    }

    #[rstest]
    fn malformed_ids_are_rejected() {
        let csv = "user_id,work_id,rating\n1,10,1\nabc,11,0\n";
        let err = read_ratings(csv.as_bytes(), RatingScheme::Binary).expect_err("bad id");
        match err {
            DataError::MalformedId {
                line,
                column,
                value,
                ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, "user_id");
                assert_eq!(value, "abc");
            }
            other => panic!("expected malformed id, got {other:?}"),
        }
    }

    #[rstest]
    fn ragged_rows_are_csv_errors() {
        let csv = "user_id,work_id,rating\n1,10\n";
        let err = read_ratings(csv.as_bytes(), RatingScheme::Binary).expect_err("ragged row");
        assert!(matches!(err, DataError::Csv { .. }), "unexpected error: {err}");
    }
}
