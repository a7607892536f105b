//! Output renderers for extracted routes and detection results.

pub mod json;
pub mod report;
pub mod request;
pub mod text;

use clap::ValueEnum;

use crate::{config::OutputConfig, error::Result, routes::Route};

/// Supported route output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per route
    #[default]
    Text,
    /// Pretty-printed JSON array of routes
    Json,
    /// Raw HTTP request template per route
    #[value(alias = "burp")]
    Request,
}

/// Render `routes` in the requested format.
pub fn render_routes(
    routes: &[Route],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(routes)),
        OutputFormat::Json => json::render(routes),
        OutputFormat::Request => request::render(routes, config),
    }
}
