//! Capability-based file access for the hivemind CSV inputs and outputs.
//!
//! Paths arrive as UTF-8 [`Utf8Path`]s from the command line. Reads open the
//! file through ambient authority; writes first resolve the parent directory
//! as a `cap-std` [`fs_utf8::Dir`] so the output file is created relative to
//! a directory handle.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io;
use std::path::{Component, MAIN_SEPARATOR};

/// Open an existing file for reading.
///
/// # Errors
/// Propagates the underlying IO error, e.g. when the file is missing.
pub fn open_input(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create (or truncate) `path` for writing, creating missing parent
/// directories first.
///
/// # Errors
/// Fails when the parent cannot be created or the file cannot be opened.
pub fn create_output(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, name) = parent_dir_and_name(path)?;
    dir.create(name.as_str())
}

/// Report whether `path` names an existing regular file.
///
/// # Errors
/// Fails when the parent directory cannot be opened or the entry cannot be
/// inspected.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Create every missing directory above `path`.
///
/// # Errors
/// Propagates failures to open the base directory or create the chain.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }
    let (base, relative) = split_anchor(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base.create_dir_all(&relative)
}

fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split a directory path into an openable anchor (root, drive prefix or
/// `.`) and the remainder relative to it.
fn split_anchor(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let anchor = match dir.as_std_path().components().next() {
        Some(Component::Prefix(prefix)) => {
            let prefix = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            Utf8PathBuf::from(format!("{prefix}{MAIN_SEPARATOR}"))
        }
        Some(Component::RootDir) => Utf8PathBuf::from(MAIN_SEPARATOR.to_string()),
        _ => Utf8PathBuf::from("."),
    };
    let relative = if anchor == Utf8Path::new(".") {
        dir.to_path_buf()
    } else {
        dir.strip_prefix(&anchor)
            .map_err(|_| io::Error::other(format!("cannot strip {anchor} from {dir}")))?
            .to_path_buf()
    };
    let base = fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?;
    Ok((base, relative))
}

#[cfg(test)]
mod tests {
    //! Unit coverage for the filesystem helpers.

    use std::io::{Read, Write};

    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    use super::{create_output, ensure_parent_dir, is_regular_file, open_input};

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("create temp dir")
    }

    fn utf8(dir: &TempDir, relative: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join(relative)).expect("utf8 temp path")
    }

    #[rstest]
    fn create_output_builds_missing_parents(temp_dir: TempDir) {
        let path = utf8(&temp_dir, "nested/deeper/scores.csv");
        let mut file = create_output(&path).expect("create nested output");
        file.write_all(b"user_id\n").expect("write output");
        drop(file);

        let mut contents = String::new();
        open_input(&path)
            .expect("reopen output")
            .read_to_string(&mut contents)
            .expect("read output");
        assert_eq!(contents, "user_id\n");
    }

    #[rstest]
    fn regular_file_detection(temp_dir: TempDir) {
        let path = utf8(&temp_dir, "train.csv");
        assert!(!is_regular_file(&path).unwrap_or(false));
        create_output(&path).expect("create file");
        assert!(is_regular_file(&path).expect("inspect file"));
        ensure_parent_dir(&utf8(&temp_dir, "sub/inner.csv")).expect("create sub");
        assert!(!is_regular_file(&utf8(&temp_dir, "sub")).expect("inspect dir"));
    }

    #[rstest]
    fn ensure_parent_dir_accepts_bare_names() {
        ensure_parent_dir(Utf8PathBuf::from("scores.csv").as_path())
            .expect("bare file names need no parent");
    }

    #[rstest]
    fn opening_a_missing_file_fails(temp_dir: TempDir) {
        let path = utf8(&temp_dir, "missing.csv");
        let err = open_input(&path).expect_err("missing file");
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
