use log::*;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::{
    config::ScanConfig,
    error::Result,
    path_helpers::relative_path,
    routes::{
        dialect::Dialect,
        jaxrs::JaxRsParser,
        servlet::ServletParser,
        spring::SpringParser,
        traits::DialectParser,
        types::{ClassInfo, Route, SourceFile},
    },
    source::{read_lossy, source_files},
};

/// Counters describing one scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Source files discovered under the project root
    pub files_found: usize,
    /// Files and directories that could not be read
    pub unreadable: usize,
    /// Files matching no dialect
    pub unclassified: usize,
    /// Files dispatched to a parser, per dialect
    pub dispatched: HashMap<Dialect, usize>,
}

impl ScanSummary {
    pub fn dispatched_to(&self, dialect: Dialect) -> usize {
        self.dispatched.get(&dialect).copied().unwrap_or(0)
    }
}

/// Everything discovered by one scan
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub routes: Vec<Route>,
    /// Controller classes by name, last declaration wins
    pub classes: HashMap<String, ClassInfo>,
    pub summary: ScanSummary,
}

/// Walks a project tree and dispatches each source file to the parser of
/// its dialect
pub struct RouteScanner {
    root_path: PathBuf,
    parsers: Vec<Box<dyn DialectParser>>,
}

impl RouteScanner {
    /// Scanner with the built-in parser for every dialect.
    pub fn new(root_path: impl Into<PathBuf>, config: &ScanConfig) -> Self {
        let parsers: Vec<Box<dyn DialectParser>> = vec![
            Box::new(SpringParser::new(config.method_search_window)),
            Box::new(JaxRsParser::new()),
            Box::new(ServletParser::new()),
        ];

        Self::with_parsers(root_path, parsers)
    }

    pub fn with_parsers(
        root_path: impl Into<PathBuf>,
        parsers: Vec<Box<dyn DialectParser>>,
    ) -> Self {
        Self {
            root_path: root_path.into(),
            parsers,
        }
    }

    /// Scan every source file under the root. Unreadable files and
    /// directories are skipped with a warning and never abort the scan.
    pub fn scan(&self) -> Result<ScanReport> {
        let walk = source_files(&self.root_path)?;

        info!("found {} source files", walk.paths.len());

        let mut report = ScanReport::default();
        report.summary.files_found = walk.paths.len();

        for (path, e) in walk.skipped.iter() {
            warn!("could not read {}: {e}", path.display());
            report.summary.unreadable += 1;
        }

        for file in walk.paths {
            self.scan_file(&file, &mut report);
        }

        info!(
            "found {} routes in {} controller classes",
            report.routes.len(),
            report.classes.len()
        );

        Ok(report)
    }

    fn scan_file(&self, path: &Path, report: &mut ScanReport) {
        let content = match read_lossy(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("could not read {}: {e}", path.display());
                report.summary.unreadable += 1;
                return;
            }
        };

        let Some(dialect) = Dialect::sniff(&content) else {
            report.summary.unclassified += 1;
            return;
        };

        let Some(parser) = self.parsers.iter().find(|p| p.dialect() == dialect)
        else {
            debug!("no parser registered for {dialect} dialect");
            return;
        };

        *report.summary.dispatched.entry(dialect).or_insert(0) += 1;

        let file = SourceFile::new(relative_path(&self.root_path, path), content);

        if let Some(parsed) = parser.parse(&file) {
            debug!(
                "{}: {} routes in {}",
                file.relative_path,
                parsed.routes.len(),
                parsed.class.name
            );
            report.routes.extend(parsed.routes);
            report.classes.insert(parsed.class.name.clone(), parsed.class);
        }
    }
}
