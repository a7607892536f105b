use log::*;

use crate::routes::{
    dialect::Dialect,
    traits::DialectParser,
    types::{ParsedClass, SourceFile},
};

/// Servlets are recognized during dispatch, but `@WebServlet` URL patterns
/// and `web.xml` mappings are not extracted: every file yields no routes.
#[derive(Default)]
pub struct ServletParser {}

impl ServletParser {
    pub fn new() -> Self {
        Self {}
    }
}

impl DialectParser for ServletParser {
    fn dialect(&self) -> Dialect {
        Dialect::Servlet
    }

    fn parse(&self, file: &SourceFile) -> Option<ParsedClass> {
        debug!(
            "{}: servlet route extraction not supported, skipping",
            file.relative_path
        );
        None
    }
}
