//! Route scanning command.
use log::*;
use std::path::Path;

use crate::{
    cli::write_output,
    config::Config,
    render::{OutputFormat, render_routes},
    result::Result,
    routes::RouteScanner,
};

/// Scan the project for routes and write them in the requested format.
pub fn execute(
    project: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let rendered = scan_project(project, format, config)?;
    write_output(output, &rendered)
}

/// Scan `project` and render the discovered routes.
pub fn scan_project(
    project: &Path,
    format: OutputFormat,
    config: &Config,
) -> Result<String> {
    info!("scanning {} for routes", project.display());

    let scanner = RouteScanner::new(project, &config.scan);
    let report = scanner.scan()?;

    if report.summary.unreadable > 0 {
        warn!("{} source paths could not be read", report.summary.unreadable);
    }

    Ok(render_routes(&report.routes, format, &config.output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{USER_CONTROLLER, create_test_project};
    use std::fs;

    const CONTROLLER: &str = "src/main/java/com/acme/web/UserController.java";

    #[test_log::test]
    fn scans_and_renders_text() {
        let project = create_test_project(&[(CONTROLLER, USER_CONTROLLER)]);

        let output =
            scan_project(project.path(), OutputFormat::Text, &Config::default())
                .unwrap();

        let lines = output.lines().collect::<Vec<&str>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("GET    /api/users/{id}"));
        assert!(lines[0].ends_with("-> UserController.getUser()"));
    }

    #[test]
    fn writes_request_templates_to_file() {
        let project = create_test_project(&[(CONTROLLER, USER_CONTROLLER)]);
        let out = project.path().join("out/requests.txt");

        execute(
            project.path(),
            Some(&out),
            OutputFormat::Request,
            &Config::default(),
        )
        .unwrap();

        let content = fs::read_to_string(out).unwrap();
        assert_eq!(content.split("\n\n===\n\n").count(), 3);
        assert!(content.contains(
            "POST /api/users HTTP/1.1\nHost: {{host}}\nContent-Type: application/json"
        ));
    }

    #[test]
    fn configured_window_limits_signature_search() {
        let project = create_test_project(&[(
            "Api.java",
            "@RestController\npublic class Api {\n    @GetMapping(\"/late\")\n\n\n    public String late() {\n        return \"\";\n    }\n}\n",
        )]);
        let config = Config::from_toml("[scan]\nmethod_search_window = 2\n")
            .unwrap();

        let output =
            scan_project(project.path(), OutputFormat::Json, &config).unwrap();

        assert_eq!(output, "[]");
    }
}
