use std::{
    borrow::Cow,
    path::{Component, Path, PathBuf},
};

/// Normalizes a path by replacing backslashes with forward slashes and removing
/// all "./" sequences. Uses Cow to avoid allocation when path is already
/// normalized.
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if path.contains('\\') || path.contains("./") {
        Cow::Owned(path.replace("\\", "/").replace("./", ""))
    } else {
        Cow::Borrowed(path)
    }
}

/// Rebuilds `root` from its components, dropping repeated and trailing
/// separators and inner `.` segments. An empty root becomes `.`.
pub fn normalize_root(root: &Path) -> PathBuf {
    let normalized = root.components().collect::<PathBuf>();

    if normalized.as_os_str().is_empty() {
        return PathBuf::from(Component::CurDir.as_os_str());
    }

    normalized
}

/// Path of `file` relative to `root`, rendered with forward slashes. Falls
/// back to the full path when `file` is not under `root`.
pub fn relative_path(root: &Path, file: &Path) -> String {
    let relative = file
        .strip_prefix(root)
        .or_else(|_| file.strip_prefix(normalize_root(root)))
        .unwrap_or(file);
    normalize_path(&relative.display().to_string()).into_owned()
}
