//! Metadata probes: the HTTP context path from Spring configuration files and
//! the project's base package.
//!
//! Both are line-oriented regex lookups. YAML is not parsed structurally, so
//! deeply nested or aliased keys may be missed.
use log::*;
use regex::Regex;
use std::{fs, path::Path, sync::LazyLock};

use crate::source::read_lossy;

const APPLICATION_PROPERTIES: &str = "src/main/resources/application.properties";
const APPLICATION_YML: &str = "src/main/resources/application.yml";
const POM_XML: &str = "pom.xml";
const JAVA_SOURCE_ROOT: &str = "src/main/java";

static SERVLET_CONTEXT_PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"server\.servlet\.context-path\s*=\s*(.+)").unwrap()
});

static LEGACY_CONTEXT_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"server\.contextPath\s*=\s*(.+)").unwrap());

static YAML_CONTEXT_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"context-path:\s*(.+)").unwrap());

static GROUP_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<groupId>(.+?)</groupId>").unwrap());

/// Context path sources in priority order: file relative to the project root
/// and the pattern capturing the value.
fn context_path_sources() -> [(&'static str, &'static Regex); 3] {
    [
        (APPLICATION_PROPERTIES, &*SERVLET_CONTEXT_PATH_REGEX),
        (APPLICATION_PROPERTIES, &*LEGACY_CONTEXT_PATH_REGEX),
        (APPLICATION_YML, &*YAML_CONTEXT_PATH_REGEX),
    ]
}

/// First context path declared in the project's configuration files.
pub fn get_context_path(root: &Path) -> Option<String> {
    for (file, regex) in context_path_sources() {
        let Some(content) = read_if_present(&root.join(file)) else {
            continue;
        };

        if let Some(caps) = regex.captures(&content) {
            let value = clean_value(&caps[1]);
            debug!("found context path {value} in {file}");
            return Some(value);
        }
    }

    None
}

/// Base package from the first `<groupId>` of `pom.xml`, falling back to the
/// first non-hidden directory under `src/main/java`.
pub fn get_base_package(root: &Path) -> Option<String> {
    if let Some(content) = read_if_present(&root.join(POM_XML))
        && let Some(caps) = GROUP_ID_REGEX.captures(&content)
    {
        return Some(caps[1].trim().to_string());
    }

    let source_root = root.join(JAVA_SOURCE_ROOT);

    let entries = match fs::read_dir(&source_root) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("no source root at {}: {e}", source_root.display());
            return None;
        }
    };

    let mut packages = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| !name.starts_with('.'))
        .collect::<Vec<String>>();

    packages.sort();
    packages.into_iter().next()
}

fn read_if_present(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }

    match read_lossy(path) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!("failed to read {}: {e}", path.display());
            None
        }
    }
}

/// Trim whitespace and one pair of surrounding quotes from a captured value.
fn clean_value(raw: &str) -> String {
    let value = raw.trim();

    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner.to_string();
        }
    }

    value.to_string()
}
