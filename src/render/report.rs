use serde::Serialize;
use std::fmt;

use crate::{detection::DetectionResult, error::Result};

const RULE_WIDTH: usize = 60;

/// Detection results plus the project probes, as printed by `detect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionReport {
    #[serde(flatten)]
    pub result: DetectionResult,
    pub context_path: Option<String>,
    pub base_package: Option<String>,
}

impl DetectionReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human readable report.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DetectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{rule}")?;
        writeln!(f, "Java Framework Detection Results")?;
        writeln!(f, "{rule}")?;

        match &self.result.primary_framework {
            Some(primary) => {
                writeln!(f, "\nPrimary Framework: {}", primary.to_uppercase())?;
                writeln!(f, "\nAll Detected Frameworks:")?;
                for framework in self.result.details.iter() {
                    writeln!(
                        f,
                        "\n  {} (score: {})",
                        framework.name.to_uppercase(),
                        framework.score
                    )?;
                    for detail in framework.details.iter() {
                        writeln!(f, "    - {detail}")?;
                    }
                }
            }
            None => writeln!(f, "\nNo frameworks detected.")?,
        }

        writeln!(f, "\n{rule}")?;
        writeln!(f, "Additional Information")?;
        writeln!(f, "{rule}")?;

        match &self.context_path {
            Some(path) => writeln!(f, "Context Path: {path}")?,
            None => writeln!(f, "Context Path: Not found (default: '/')")?,
        }

        match &self.base_package {
            Some(package) => writeln!(f, "Base Package: {package}")?,
            None => writeln!(f, "Base Package: Not found")?,
        }

        write!(f, "{rule}")
    }
}
