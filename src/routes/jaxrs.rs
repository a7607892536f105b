use log::*;

use crate::routes::{
    dialect::Dialect,
    traits::DialectParser,
    types::{ParsedClass, SourceFile},
};

/// JAX-RS resources are recognized during dispatch but route extraction for
/// them is not implemented yet: every file yields no routes.
#[derive(Default)]
pub struct JaxRsParser {}

impl JaxRsParser {
    pub fn new() -> Self {
        Self {}
    }
}

impl DialectParser for JaxRsParser {
    fn dialect(&self) -> Dialect {
        Dialect::JaxRs
    }

    // TODO: compose class and method @Path values with the @GET/@POST verb
    // annotations once resource parsing is added.
    fn parse(&self, file: &SourceFile) -> Option<ParsedClass> {
        debug!(
            "{}: JAX-RS route extraction not supported, skipping",
            file.relative_path
        );
        None
    }
}
