//! Request parameter discovery for Spring handler methods.
//!
//! Parameters are recovered from annotations found anywhere in the lines
//! between a route annotation and its method signature. Names come from a
//! `value`/`name` attribute or the leading positional argument, falling back
//! to a placeholder when neither is present.
use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::routes::types::{Parameter, ParameterSource};

pub const DEFAULT_PATH_VARIABLE_NAME: &str = "pathVar";
pub const DEFAULT_QUERY_PARAM_NAME: &str = "param";
pub const DEFAULT_HEADER_NAME: &str = "header";
pub const DEFAULT_COOKIE_NAME: &str = "cookie";
pub const DEFAULT_REQUIRED: &str = "true";

static PATH_VARIABLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@PathVariable\b(?:\s*\(([^)]*)\))?").unwrap()
});

static REQUEST_PARAM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@RequestParam\b(?:\s*\(([^)]*)\))?").unwrap()
});

static REQUEST_BODY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@RequestBody\b").unwrap());

static REQUEST_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@RequestHeader\b(?:\s*\(([^)]*)\))?").unwrap()
});

static COOKIE_VALUE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@CookieValue\b(?:\s*\(([^)]*)\))?").unwrap()
});

static KEYED_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(?:value|name)\s*=\s*["']([^"']+)["']"#).unwrap()
});

static POSITIONAL_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?:"([^"]+)"|'([^']+)'|(\w+)\s*(?:,|$))"#).unwrap()
});

static REQUIRED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\brequired\s*=\s*(\w+)").unwrap());

/// Every parameter declared in `window`, grouped by source in the order
/// path, query, body, header, cookie.
pub fn parse_parameters(window: &str) -> Vec<Parameter> {
    let mut parameters = vec![];

    for caps in PATH_VARIABLE_REGEX.captures_iter(window) {
        let name = annotation_name(&caps)
            .unwrap_or_else(|| DEFAULT_PATH_VARIABLE_NAME.into());
        parameters.push(Parameter::new(name, ParameterSource::Path));
    }

    for caps in REQUEST_PARAM_REGEX.captures_iter(window) {
        let name = annotation_name(&caps)
            .unwrap_or_else(|| DEFAULT_QUERY_PARAM_NAME.into());
        let required = caps
            .get(1)
            .and_then(|args| REQUIRED_REGEX.captures(args.as_str()))
            .map(|req| req[1].to_string())
            .unwrap_or_else(|| DEFAULT_REQUIRED.into());
        parameters.push(Parameter::query(name, required));
    }

    if REQUEST_BODY_REGEX.is_match(window) {
        parameters.push(Parameter::json_body());
    }

    for caps in REQUEST_HEADER_REGEX.captures_iter(window) {
        let name =
            annotation_name(&caps).unwrap_or_else(|| DEFAULT_HEADER_NAME.into());
        parameters.push(Parameter::new(name, ParameterSource::Header));
    }

    for caps in COOKIE_VALUE_REGEX.captures_iter(window) {
        let name =
            annotation_name(&caps).unwrap_or_else(|| DEFAULT_COOKIE_NAME.into());
        parameters.push(Parameter::new(name, ParameterSource::Cookie));
    }

    parameters
}

/// Name given in the annotation's argument list, if any.
fn annotation_name(caps: &Captures) -> Option<String> {
    let args = caps.get(1)?.as_str();

    if let Some(keyed) = KEYED_NAME_REGEX.captures(args) {
        return Some(keyed[1].to_string());
    }

    POSITIONAL_NAME_REGEX.captures(args).and_then(|positional| {
        positional
            .get(1)
            .or_else(|| positional.get(2))
            .or_else(|| positional.get(3))
            .map(|m| m.as_str().to_string())
    })
}
