//! Spring MVC / Spring Boot controller parsing.
use log::*;
use regex::Regex;
use std::sync::LazyLock;

use crate::routes::{
    METHOD_SEARCH_WINDOW,
    dialect::Dialect,
    helpers::{compose_path, find_method_signature},
    params::parse_parameters,
    traits::DialectParser,
    types::{ClassInfo, ParsedClass, Route, SourceFile},
};

const BASE_PATH_MARKER: &str = "@RequestMapping";

/// Controller annotation directly followed by the class declaration.
static CLASS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@(?:Rest)?Controller\s+(?:public\s+)?class\s+(\w+)").unwrap()
});

static BASE_PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@RequestMapping\s*\(\s*["']([^"']+)["']"#).unwrap()
});

/// `@GetMapping("/x")` style shortcut annotations.
static VERB_MAPPING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"@(Get|Post|Put|Patch|Delete)Mapping\s*\(\s*(?:(?:value|path)\s*=\s*)?["']([^"']+)["']"#,
    )
    .unwrap()
});

/// `@RequestMapping(..., method = RequestMethod.X, ...)` annotations.
static REQUEST_MAPPING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"@RequestMapping\s*\(.*?\bmethod\s*=\s*\{?\s*RequestMethod\.(\w+)",
    )
    .unwrap()
});

static KEYED_PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(?:value|path)\s*=\s*\{?\s*["']([^"']*)["']"#).unwrap()
});

static POSITIONAL_PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@RequestMapping\s*\(\s*\{?\s*["']([^"']*)["']"#).unwrap()
});

/// Parser for annotation-based Spring controllers
pub struct SpringParser {
    method_search_window: usize,
}

impl Default for SpringParser {
    fn default() -> Self {
        Self::new(METHOD_SEARCH_WINDOW)
    }
}

impl SpringParser {
    pub fn new(method_search_window: usize) -> Self {
        Self {
            method_search_window,
        }
    }

    /// Base path from the first line mentioning `@RequestMapping`. Only that
    /// line is considered, even when it carries no positional path.
    fn class_base_path(lines: &[&str]) -> String {
        lines
            .iter()
            .find(|line| line.contains(BASE_PATH_MARKER))
            .and_then(|line| BASE_PATH_REGEX.captures(line))
            .map(|caps| caps[1].to_string())
            .unwrap_or_default()
    }

    /// HTTP verb and method-level path declared on `line`, if any.
    fn route_annotation(line: &str) -> Option<(String, String)> {
        if let Some(caps) = VERB_MAPPING_REGEX.captures(line) {
            return Some((caps[1].to_uppercase(), caps[2].to_string()));
        }

        let caps = REQUEST_MAPPING_REGEX.captures(line)?;

        Some((caps[1].to_uppercase(), Self::request_mapping_path(line)))
    }

    /// Path of a `@RequestMapping` carrying an explicit method. A mapping
    /// without any path applies to the base path and yields "".
    fn request_mapping_path(line: &str) -> String {
        KEYED_PATH_REGEX
            .captures(line)
            .or_else(|| POSITIONAL_PATH_REGEX.captures(line))
            .map(|caps| caps[1].to_string())
            .unwrap_or_default()
    }

    fn build_route(
        &self,
        lines: &[&str],
        index: usize,
        http_method: String,
        method_path: &str,
        class: &ClassInfo,
    ) -> Option<Route> {
        let Some((signature_index, method_name)) =
            find_method_signature(lines, index, self.method_search_window)
        else {
            debug!(
                "{}:{}: no method signature within {} lines",
                class.source_file,
                index + 1,
                self.method_search_window
            );
            return None;
        };

        let window = lines[index..=signature_index].join("\n");

        Some(Route {
            http_method,
            path: compose_path(&class.base_path, method_path),
            class_name: class.name.clone(),
            method_name,
            source_file: class.source_file.clone(),
            line_number: index + 1,
            parameters: parse_parameters(&window),
            description: String::new(),
        })
    }
}

impl DialectParser for SpringParser {
    fn dialect(&self) -> Dialect {
        Dialect::Spring
    }

    fn parse(&self, file: &SourceFile) -> Option<ParsedClass> {
        let Some(caps) = CLASS_REGEX.captures(&file.content) else {
            debug!("{}: no controller class declaration", file.relative_path);
            return None;
        };

        let lines = file.lines();

        let class = ClassInfo {
            name: caps[1].to_string(),
            source_file: file.relative_path.clone(),
            base_path: Self::class_base_path(&lines),
            class_level_annotations: vec![],
        };

        let routes = lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| {
                let (http_method, method_path) = Self::route_annotation(line)?;
                self.build_route(&lines, index, http_method, &method_path, &class)
            })
            .collect();

        Some(ParsedClass { class, routes })
    }
}
