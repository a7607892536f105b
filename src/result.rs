//! Result type used by the route-mapper binary.
//!
//! Library code returns [`crate::error::Result`] with a typed
//! [`RouteMapperError`](crate::error::RouteMapperError). The CLI layer wraps
//! those errors in a `color-eyre` report so failures print with context and
//! colored output.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::result::Result;
//! use color_eyre::eyre::Context;
//!
//! fn write_report(path: &Path, report: &str) -> Result<()> {
//!     std::fs::write(path, report)
//!         .wrap_err_with(|| format!("failed to write {}", path.display()))?;
//!     Ok(())
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used by the command-line layer.
pub type Result<T> = EyreResult<T>;
