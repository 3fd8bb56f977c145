//! Test helpers for writing CSV datasets into temporary directories.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Binary ratings: users 1 and 2 agree on work 10 and disagree on work 11.
pub(super) const BINARY_TRAIN: &str = "user_id,work_id,rating\n1,10,1\n1,11,0\n2,10,1\n2,11,1\n";

/// Four-level ratings for the same users.
pub(super) const WATCHED: &str =
    "user_id,work_id,rating\n1,10,love\n1,11,like\n2,10,love\n2,11,neutral\n";

/// Queries covering a rated and an unrated work.
pub(super) const QUERIES: &str = "user_id,work_id\n2,10\n2,99\n";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directory");
    }
    fs::write(path, contents).expect("write fixture file");
}

/// A temporary directory holding the CLI input tables.
pub(super) struct Dataset {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Dataset {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        write_utf8(&root.join("train.csv"), BINARY_TRAIN.as_bytes());
        write_utf8(&root.join("watched.csv"), WATCHED.as_bytes());
        write_utf8(&root.join("test.csv"), QUERIES.as_bytes());
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn train(&self) -> Utf8PathBuf {
        self.root.join("train.csv")
    }

    pub(super) fn watched(&self) -> Utf8PathBuf {
        self.root.join("watched.csv")
    }

    pub(super) fn queries(&self) -> Utf8PathBuf {
        self.root.join("test.csv")
    }
}
