use serde::Serialize;
use std::fmt;

/// Where a request parameter is carried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterSource {
    Path,
    Query,
    Body,
    Header,
    Cookie,
}

impl fmt::Display for ParameterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParameterSource::Path => "path",
            ParameterSource::Query => "query",
            ParameterSource::Body => "body",
            ParameterSource::Header => "header",
            ParameterSource::Cookie => "cookie",
        };
        write!(f, "{name}")
    }
}

/// Request parameter bound by a handler method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub source: ParameterSource,
    /// Best-effort type, `unknown` when not inferred
    #[serde(rename = "type")]
    pub param_type: String,
    /// Only set for query parameters, as written in the annotation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<String>,
}

impl Parameter {
    pub const UNKNOWN_TYPE: &'static str = "unknown";
    pub const JSON_TYPE: &'static str = "application/json";

    pub fn new(name: impl Into<String>, source: ParameterSource) -> Self {
        Self {
            name: name.into(),
            source,
            param_type: Self::UNKNOWN_TYPE.into(),
            required: None,
        }
    }

    pub fn query(name: impl Into<String>, required: impl Into<String>) -> Self {
        Self {
            required: Some(required.into()),
            ..Self::new(name, ParameterSource::Query)
        }
    }

    /// The synthetic parameter standing for a JSON request body.
    pub fn json_body() -> Self {
        Self {
            param_type: Self::JSON_TYPE.into(),
            ..Self::new("body", ParameterSource::Body)
        }
    }
}

/// One discovered HTTP endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Uppercase HTTP verb
    pub http_method: String,
    /// Composed class and method path
    pub path: String,
    pub class_name: String,
    pub method_name: String,
    /// File declaring the route, relative to the project root
    pub source_file: String,
    /// 1-based line of the method-level annotation
    pub line_number: usize,
    pub parameters: Vec<Parameter>,
    /// Reserved for doc-comment extraction, currently always empty
    pub description: String,
}

impl Route {
    pub fn has_body(&self) -> bool {
        self.parameters
            .iter()
            .any(|p| p.source == ParameterSource::Body)
    }
}

/// Controller class discovered while scanning
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassInfo {
    pub name: String,
    pub source_file: String,
    /// Class-level path prefix, empty when none is declared
    pub base_path: String,
    pub class_level_annotations: Vec<String>,
}

/// A source file handed to a dialect parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to the project root, forward slashes
    pub relative_path: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }

    pub fn lines(&self) -> Vec<&str> {
        self.content.lines().collect()
    }
}

/// Result of parsing one controller file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClass {
    pub class: ClassInfo,
    pub routes: Vec<Route>,
}
