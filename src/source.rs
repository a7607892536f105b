//! Source tree helpers: recursive file discovery and lenient reads.
use glob::Pattern;
use log::*;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{error::Result, path_helpers::normalize_root};

/// File extension of the sources scanned for annotations and routes.
pub const SOURCE_EXTENSION: &str = "java";

/// Reads a whole file, replacing malformed UTF-8 sequences instead of
/// failing on them.
pub fn read_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Paths matched by one walk of the project tree.
#[derive(Debug, Default)]
pub struct SourceWalk {
    /// Matching paths, in traversal order
    pub paths: Vec<PathBuf>,
    /// Entries the walk could not read, with the reason
    pub skipped: Vec<(PathBuf, io::Error)>,
}

/// Walks `root` for `pattern`, keeping the entries that could not be read.
pub fn walk(root: &Path, pattern: &str) -> Result<SourceWalk> {
    let root = normalize_root(root);
    let escaped_root = Pattern::escape(&root.display().to_string());
    let full_pattern = format!("{escaped_root}/{pattern}");

    let mut result = SourceWalk::default();

    for entry in glob::glob(&full_pattern)? {
        match entry {
            Ok(path) => result.paths.push(path),
            Err(e) => {
                let path = e.path().to_path_buf();
                result.skipped.push((path, e.into_error()));
            }
        }
    }

    Ok(result)
}

/// Expands `pattern` relative to `root` and returns the matching paths.
/// Entries that cannot be read while walking are skipped.
pub fn glob_in(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let walk = walk(root, pattern)?;

    for (path, e) in walk.skipped.iter() {
        debug!("skipping unreadable path {}: {e}", path.display());
    }

    Ok(walk.paths)
}

/// Every source file under `root`, recursively, in traversal order. Callers
/// decide how loudly to report the skipped entries.
pub fn source_files(root: &Path) -> Result<SourceWalk> {
    let mut walk = walk(root, &format!("**/*.{SOURCE_EXTENSION}"))?;
    walk.paths.retain(|path| path.is_file());
    Ok(walk)
}
