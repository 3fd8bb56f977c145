//! Loading query tables.

use std::io::Read;

use camino::Utf8Path;
use hivemind_core::Query;
use hivemind_fs::open_input;
use log::info;

use crate::DataError;
use crate::columns::{USER_ID, WORK_ID, csv_error, csv_reader, line_of, locate, parse_id};

/// Load the `(user_id, work_id)` pairs to score from `path`.
///
/// # Errors
/// Returns [`DataError::Open`] when the file cannot be opened, and the
/// errors of [`read_queries`] for its contents.
pub fn load_queries(path: &Utf8Path) -> Result<Vec<Query>, DataError> {
    let file = open_input(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let queries = parse_queries(file, path.as_str())?;
    info!("loaded {} queries from {path}", queries.len());
    Ok(queries)
}

/// Read a query CSV from any reader, preserving row order.
///
/// # Errors
/// Returns [`DataError::MissingColumn`] for an incomplete header,
/// [`DataError::MalformedId`] for bad ids and [`DataError::Csv`] when the
/// stream cannot be decoded.
pub fn read_queries<R: Read>(reader: R) -> Result<Vec<Query>, DataError> {
    parse_queries(reader, "<input>")
}

fn parse_queries<R: Read>(reader: R, origin: &str) -> Result<Vec<Query>, DataError> {
    let mut csv = csv_reader(reader);
    let headers = csv
        .headers()
        .map_err(|source| csv_error(origin, source))?
        .clone();
    let user_col = locate(&headers, USER_ID, origin)?;
    let work_col = locate(&headers, WORK_ID, origin)?;

    csv.records()
        .map(|row| {
            let row = row.map_err(|source| csv_error(origin, source))?;
            let line = line_of(&row);
            Ok(Query::new(
                parse_id(&row, user_col, USER_ID, origin, line)?,
                parse_id(&row, work_col, WORK_ID, origin, line)?,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    //! Unit coverage for the query reader.

    use hivemind_core::Query;
    use rstest::rstest;

    use super::read_queries;
    use crate::DataError;

    #[rstest]
    fn keeps_duplicates_and_order() {
        let csv = "user_id,work_id\n2,10\n1,11\n2,10\n";
        let queries = read_queries(csv.as_bytes()).expect("valid queries");
        assert_eq!(
            queries,
            vec![Query::new(2, 10), Query::new(1, 11), Query::new(2, 10)]
        );
    }

    #[rstest]
    fn ignores_extra_columns() {
        let csv = "work_id,prob_willsee,user_id\n10,0.3,2\n";
        let queries = read_queries(csv.as_bytes()).expect("valid queries");
        assert_eq!(queries, vec![Query::new(2, 10)]);
    }

    #[rstest]
    fn rejects_a_missing_work_column() {
        let err = read_queries("user_id\n2\n".as_bytes()).expect_err("no work column");
        assert!(matches!(
            err,
            DataError::MissingColumn {
                column: "work_id",
                ..
            }
        ));
    }

    #[rstest]
    fn rejects_negative_ids() {
        let err = read_queries("user_id,work_id\n-1,10\n".as_bytes()).expect_err("negative id");
        assert!(matches!(err, DataError::MalformedId { line: 2, .. }));
    }
}
