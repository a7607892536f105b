#[cfg(test)]
use mockall::automock;

use crate::routes::{
    dialect::Dialect,
    types::{ParsedClass, SourceFile},
};

/// Extracts routes from files sniffed into one dialect
#[cfg_attr(test, automock)]
pub trait DialectParser {
    /// Dialect whose files this parser handles.
    fn dialect(&self) -> Dialect;

    /// Parse one source file. `None` means the file declares no controller
    /// class this parser understands, which is not an error.
    fn parse(&self, file: &SourceFile) -> Option<ParsedClass>;
}
