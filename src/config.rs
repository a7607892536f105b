//! Configuration loading and parsing for `route-mapper.toml` files.
//!
//! Every table is optional; missing values fall back to the built-in
//! scanning limits and request template.
use log::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::{
    detection::{ANNOTATION_FILE_LIMIT, CLASS_FILE_LIMIT},
    error::{Result, RouteMapperError},
    render::request::{DEFAULT_HOST_PLACEHOLDER, DEFAULT_REQUEST_TEMPLATE},
    routes::METHOD_SEARCH_WINDOW,
};

/// Default configuration filename, looked up in the project root.
pub const DEFAULT_CONFIG_FILE: &str = "route-mapper.toml";

/// Limits applied by the framework signature scorer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Number of source files inspected for annotation evidence.
    pub annotation_file_limit: usize,
    /// Number of source files inspected for class-reference evidence.
    pub class_file_limit: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            annotation_file_limit: ANNOTATION_FILE_LIMIT,
            class_file_limit: CLASS_FILE_LIMIT,
        }
    }
}

/// Settings for the route extractor.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Lines searched after a route annotation for the method signature.
    /// Defaults to [`METHOD_SEARCH_WINDOW`]; other values change which
    /// routes are extracted, since signatures further away are dropped.
    pub method_search_window: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            method_search_window: METHOD_SEARCH_WINDOW,
        }
    }
}

/// Settings for the request template renderer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Value written into the `Host` header of request templates.
    pub host: String,
    /// Tera template rendered once per route.
    pub request_template: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST_PLACEHOLDER.into(),
            request_template: DEFAULT_REQUEST_TEMPLATE.into(),
        }
    }
}

/// Root configuration structure for `route-mapper.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub detection: DetectionConfig,
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit file, or from
    /// [`DEFAULT_CONFIG_FILE`] in the project root when it exists.
    pub fn load(explicit: Option<&Path>, project_root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            info!("loading configuration from {}", path.display());
            let content = fs::read_to_string(path)?;
            return Self::from_toml(&content);
        }

        let default_path = project_root.join(DEFAULT_CONFIG_FILE);

        if default_path.is_file() {
            info!("loading configuration from {}", default_path.display());
            let content = fs::read_to_string(&default_path)?;
            return Self::from_toml(&content);
        }

        debug!("project configuration not found: using default");
        Ok(Config::default())
    }

    fn validate(&self) -> Result<()> {
        if self.scan.method_search_window == 0 {
            return Err(RouteMapperError::invalid_config(
                "scan.method_search_window must be at least 1",
            ));
        }

        Ok(())
    }
}
