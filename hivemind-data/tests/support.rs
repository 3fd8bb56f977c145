//! Shared fixtures for the data behaviour tests.

use camino::Utf8PathBuf;
use tempfile::TempDir;

/// Binary training ratings for users 1 and 2.
pub const BINARY_TRAIN: &str = "user_id,work_id,rating\n1,10,1\n1,11,0\n2,10,1\n2,11,1\n";

/// Queries including an unrated work and a repeated pair.
pub const QUERIES: &str = "user_id,work_id\n2,10\n1,11\n2,99\n2,10\n";

/// Write `contents` to `name` inside `dir` and return its UTF-8 path.
///
/// # Panics
/// Panics when the temporary file cannot be written.
pub fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(dir.path().join(name))
        .unwrap_or_else(|path| panic!("non-UTF-8 temp path {path:?}"));
    std::fs::write(&path, contents).unwrap_or_else(|err| panic!("write {path}: {err}"));
    path
}
