use log::*;
use regex::Regex;
use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use crate::{
    detection::{
        DEPENDENCY_MANIFESTS,
        types::{FrameworkEvidence, FrameworkSignature},
    },
    path_helpers::relative_path,
    source::{glob_in, read_lossy},
};

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\w+\]").unwrap());

/// Contents of the leading source files of a project, read once and shared
/// by every signature. Unreadable files keep their slot so that the file
/// limits count files encountered rather than files read.
#[derive(Debug, Default)]
pub struct SourceSample {
    contents: Vec<Option<String>>,
}

impl SourceSample {
    /// Read at most `limit` files from `files`, in order.
    pub fn read(files: &[PathBuf], limit: usize) -> Self {
        let contents = files
            .iter()
            .take(limit)
            .map(|file| match read_lossy(file) {
                Ok(content) => Some(content),
                Err(e) => {
                    debug!("skipping unreadable {}: {e}", file.display());
                    None
                }
            })
            .collect();

        Self { contents }
    }

    /// True if any of the first `limit` files contains `needle`.
    pub fn contains(&self, needle: &str, limit: usize) -> bool {
        self.contents
            .iter()
            .take(limit)
            .flatten()
            .any(|content| content.contains(needle))
    }
}

/// Helper for collecting signature evidence from a project tree
pub struct DetectionHelper {}

impl DetectionHelper {
    /// Collect every kind of evidence for `signature`.
    pub fn analyze(
        root: &Path,
        signature: &FrameworkSignature,
        sample: &SourceSample,
        annotation_limit: usize,
        class_limit: usize,
    ) -> FrameworkEvidence {
        FrameworkEvidence {
            files: Self::check_files(root, signature.files),
            dependencies: Self::check_dependencies(root, signature.dependencies),
            annotations: Self::check_sources(
                sample,
                signature.annotations,
                annotation_limit,
            ),
            classes: Self::check_sources(sample, signature.classes, class_limit),
        }
    }

    /// Rewrite `[name]` placeholders into single-segment wildcards.
    pub fn expand_placeholders(pattern: &str) -> String {
        PLACEHOLDER_REGEX.replace_all(pattern, "*").into_owned()
    }

    /// Marker files present under `root`, relative to it. Every matching
    /// path counts, so a wildcard pattern may contribute several.
    pub fn check_files(root: &Path, patterns: &[&str]) -> Vec<String> {
        let mut found = vec![];

        for pattern in patterns {
            let pattern = Self::expand_placeholders(pattern);

            match glob_in(root, &pattern) {
                Ok(matches) => found.extend(
                    matches.iter().map(|path| relative_path(root, path)),
                ),
                Err(e) => warn!("invalid marker pattern {pattern}: {e}"),
            }
        }

        found
    }

    /// Dependency strings found in each manifest that exists. A string is
    /// reported once per manifest containing it.
    pub fn check_dependencies(root: &Path, dependencies: &[&str]) -> Vec<String> {
        let mut found = vec![];

        if dependencies.is_empty() {
            return found;
        }

        for manifest in DEPENDENCY_MANIFESTS {
            let manifest_path = root.join(manifest);

            if !manifest_path.is_file() {
                continue;
            }

            match read_lossy(&manifest_path) {
                Ok(content) => found.extend(
                    dependencies
                        .iter()
                        .filter(|dep| content.contains(*dep))
                        .map(|dep| dep.to_string()),
                ),
                Err(e) => {
                    debug!("skipping unreadable {}: {e}", manifest_path.display())
                }
            }
        }

        found
    }

    /// Markers present in at least one of the first `limit` sampled files.
    pub fn check_sources(
        sample: &SourceSample,
        markers: &[&str],
        limit: usize,
    ) -> Vec<String> {
        markers
            .iter()
            .filter(|marker| sample.contains(marker, limit))
            .map(|marker| marker.to_string())
            .collect()
    }
}
