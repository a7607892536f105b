//! Framework detection and HTTP route mapping for Java web projects.
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod path_helpers;
pub mod render;
pub mod result;
pub mod routes;
pub mod source;

pub use cli::{Args, Command};
pub use error::{Result, RouteMapperError};

#[cfg(test)]
pub mod test_helpers;
