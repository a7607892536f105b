use serde::Serialize;

use crate::detection::{
    ANNOTATION_WEIGHT, CLASS_WEIGHT, DEPENDENCY_WEIGHT, FILE_WEIGHT,
};

/// Evidence patterns describing one framework
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameworkSignature {
    /// Framework identifier reported in detection results
    pub name: &'static str,
    /// Glob patterns relative to the project root. A `[name]` placeholder
    /// stands for any single path segment.
    pub files: &'static [&'static str],
    /// Substrings expected in a dependency manifest
    pub dependencies: &'static [&'static str],
    /// Substrings expected in source files
    pub annotations: &'static [&'static str],
    /// Class names expected to be referenced in source files
    pub classes: &'static [&'static str],
}

/// Evidence gathered for a single signature
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameworkEvidence {
    /// Marker files found, relative to the project root
    pub files: Vec<String>,
    /// Dependency strings found, once per manifest they appear in
    pub dependencies: Vec<String>,
    /// Annotations found in at least one inspected source file
    pub annotations: Vec<String>,
    /// Class references found in at least one inspected source file
    pub classes: Vec<String>,
}

impl FrameworkEvidence {
    /// Weighted sum of every piece of evidence.
    pub fn score(&self) -> u32 {
        self.files.len() as u32 * FILE_WEIGHT
            + self.dependencies.len() as u32 * DEPENDENCY_WEIGHT
            + self.annotations.len() as u32 * ANNOTATION_WEIGHT
            + self.classes.len() as u32 * CLASS_WEIGHT
    }

    /// Human-readable evidence lines, one per non-empty category.
    pub fn details(&self) -> Vec<String> {
        let mut details = vec![];

        if !self.files.is_empty() {
            details.push(format!("Found files: {}", self.files.join(", ")));
        }

        if !self.dependencies.is_empty() {
            details.push(format!(
                "Found dependencies: {}",
                self.dependencies.join(", ")
            ));
        }

        if !self.annotations.is_empty() {
            details.push(format!(
                "Found annotations: {}",
                self.annotations.join(", ")
            ));
        }

        if !self.classes.is_empty() {
            details.push(format!(
                "Found class references: {}",
                self.classes.join(", ")
            ));
        }

        details
    }
}

/// Score and evidence for one detected framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameworkScore {
    pub name: String,
    pub score: u32,
    pub details: Vec<String>,
}

/// Framework detection result for a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetectionResult {
    /// Highest-scoring framework, if any evidence was found
    pub primary_framework: Option<String>,
    /// Every framework with a nonzero score, best first
    pub detected_frameworks: Vec<String>,
    /// Scores and evidence, in the same order as `detected_frameworks`
    pub details: Vec<FrameworkScore>,
}

impl DetectionResult {
    /// Build a result from scores in catalog order. Zero scores are dropped
    /// and ties keep their catalog order.
    pub fn from_scores(scores: Vec<FrameworkScore>) -> Self {
        let mut ranked = scores
            .into_iter()
            .filter(|s| s.score > 0)
            .collect::<Vec<FrameworkScore>>();

        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        Self {
            primary_framework: ranked.first().map(|s| s.name.clone()),
            detected_frameworks: ranked.iter().map(|s| s.name.clone()).collect(),
            details: ranked,
        }
    }

    /// Score recorded for `framework`, if it was detected.
    pub fn score_of(&self, framework: &str) -> Option<u32> {
        self.details
            .iter()
            .find(|s| s.name == framework)
            .map(|s| s.score)
    }
}
