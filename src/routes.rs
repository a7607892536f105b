//! HTTP route extraction from annotated Java sources.
//!
//! Files are sniffed into a [`Dialect`](dialect::Dialect) and handed to the
//! matching [`DialectParser`](traits::DialectParser). Parsers work on raw
//! text with regular expressions and bounded forward scans; no syntax tree
//! is ever built, so multi-line signatures beyond the search window are
//! missed.

pub mod dialect;
pub mod helpers;
pub mod jaxrs;
pub mod params;
pub mod scanner;
pub mod servlet;
pub mod spring;
pub mod traits;
pub mod types;


pub use dialect::Dialect;
pub use scanner::{RouteScanner, ScanReport, ScanSummary};
pub use types::{ClassInfo, Parameter, ParameterSource, Route};

/// Lines searched after a route annotation for the handler method signature.
pub const METHOD_SEARCH_WINDOW: usize = 10;
