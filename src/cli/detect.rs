//! Framework detection command.
use log::*;
use std::path::Path;

use crate::{
    cli::write_output,
    config::Config,
    detection::DetectionManager,
    render::report::DetectionReport,
    result::Result,
};

/// Score the project against the framework catalog and print the report.
pub fn execute(project: &Path, json: bool, config: &Config) -> Result<()> {
    let report = build_report(project, config);

    let output = if json {
        report.to_json()?
    } else {
        report.to_text()
    };

    write_output(None, &output)
}

/// Detection results combined with the context path and base package
/// probes.
pub fn build_report(project: &Path, config: &Config) -> DetectionReport {
    info!("detecting frameworks in {}", project.display());

    let manager = DetectionManager::new(project, config.detection.clone());
    let result = manager.detect();

    match &result.primary_framework {
        Some(primary) => info!("primary framework: {primary}"),
        None => info!("no frameworks detected"),
    }

    DetectionReport {
        result,
        context_path: manager.context_path(),
        base_package: manager.base_package(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{USER_CONTROLLER, create_test_project};

    #[test_log::test]
    fn builds_report_for_spring_boot_project() {
        let project = create_test_project(&[
            (
                "pom.xml",
                "<project><groupId>com.acme</groupId><dependencies><dependency><artifactId>spring-boot-starter-web</artifactId></dependency></dependencies></project>",
            ),
            (
                "src/main/resources/application.properties",
                "server.servlet.context-path=/shop\n",
            ),
            ("src/main/java/com/acme/web/UserController.java", USER_CONTROLLER),
        ]);

        let report = build_report(project.path(), &Config::default());

        assert_eq!(
            report.result.primary_framework.as_deref(),
            Some("spring_boot")
        );
        assert_eq!(report.context_path.as_deref(), Some("/shop"));
        assert_eq!(report.base_package.as_deref(), Some("com.acme"));
    }

    #[test]
    fn empty_project_reports_nothing() {
        let project = create_test_project(&[]);

        let report = build_report(project.path(), &Config::default());

        assert!(report.result.primary_framework.is_none());
        assert!(report.result.detected_frameworks.is_empty());
        assert!(report.context_path.is_none());
        assert!(report.base_package.is_none());
    }
}
