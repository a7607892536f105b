//! Framework detection for identifying which Java web framework a project
//! uses, plus the metadata probes that read context path and base package.
//!
//! Detection is a weighted-evidence heuristic: each entry of the static
//! signature [`catalog`] is scored by how many of its marker files,
//! dependency strings, annotations and class references appear in the
//! project, and the frameworks are ranked by that score.

pub mod catalog;
pub mod helper;
pub mod manager;
pub mod probe;
pub mod types;

pub use manager::DetectionManager;
pub use types::{DetectionResult, FrameworkScore, FrameworkSignature};

/// Score contributed by each matched marker file.
pub const FILE_WEIGHT: u32 = 10;
/// Score contributed by each dependency string found in a manifest.
pub const DEPENDENCY_WEIGHT: u32 = 5;
/// Score contributed by each annotation found in the sources.
pub const ANNOTATION_WEIGHT: u32 = 3;
/// Score contributed by each class reference found in the sources.
pub const CLASS_WEIGHT: u32 = 2;

/// Source files inspected when looking for annotation evidence.
pub const ANNOTATION_FILE_LIMIT: usize = 100;
/// Source files inspected when looking for class-reference evidence.
pub const CLASS_FILE_LIMIT: usize = 50;

/// Dependency manifests checked for dependency strings, in order.
pub const DEPENDENCY_MANIFESTS: &[&str] =
    &["pom.xml", "build.gradle", "build.gradle.kts"];
