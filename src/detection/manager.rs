use log::*;
use std::path::PathBuf;

use crate::{
    config::DetectionConfig,
    detection::{
        catalog::SIGNATURES,
        helper::{DetectionHelper, SourceSample},
        probe,
        types::{DetectionResult, FrameworkScore, FrameworkSignature},
    },
    source::source_files,
};

/// Scores every signature of a catalog against one project tree
pub struct DetectionManager {
    root_path: PathBuf,
    signatures: Vec<FrameworkSignature>,
    config: DetectionConfig,
}

impl DetectionManager {
    /// Manager over the built-in signature catalog.
    pub fn new(root_path: impl Into<PathBuf>, config: DetectionConfig) -> Self {
        Self::with_signatures(root_path, SIGNATURES.to_vec(), config)
    }

    pub fn with_signatures(
        root_path: impl Into<PathBuf>,
        signatures: Vec<FrameworkSignature>,
        config: DetectionConfig,
    ) -> Self {
        Self {
            root_path: root_path.into(),
            signatures,
            config,
        }
    }

    /// Rank the catalog's frameworks by the evidence found in the project.
    /// Missing or unreadable files only reduce the evidence, they never
    /// fail the detection.
    pub fn detect(&self) -> DetectionResult {
        debug!("detecting frameworks for: {}", self.root_path.display());

        let files = match source_files(&self.root_path) {
            Ok(walk) => {
                for (path, e) in walk.skipped.iter() {
                    debug!("skipping unreadable {}: {e}", path.display());
                }
                walk.paths
            }
            Err(e) => {
                debug!("unable to list source files: {e}");
                vec![]
            }
        };

        let sample_size = self
            .config
            .annotation_file_limit
            .max(self.config.class_file_limit);

        let sample = SourceSample::read(&files, sample_size);

        let scores = self
            .signatures
            .iter()
            .map(|signature| {
                let evidence = DetectionHelper::analyze(
                    &self.root_path,
                    signature,
                    &sample,
                    self.config.annotation_file_limit,
                    self.config.class_file_limit,
                );

                let score = evidence.score();

                debug!("framework {} detection score: {score}", signature.name);

                FrameworkScore {
                    name: signature.name.to_string(),
                    score,
                    details: evidence.details(),
                }
            })
            .collect();

        DetectionResult::from_scores(scores)
    }

    /// HTTP context path configured for the project, if any.
    pub fn context_path(&self) -> Option<String> {
        probe::get_context_path(&self.root_path)
    }

    /// Base Java package of the project, if it can be inferred.
    pub fn base_package(&self) -> Option<String> {
        probe::get_base_package(&self.root_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_file;
    use std::path::Path;
    use tempfile::TempDir;

    fn manager(root: &Path) -> DetectionManager {
        DetectionManager::new(root, DetectionConfig::default())
    }

    #[test]
    fn empty_project_detects_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager(temp_dir.path());

        let result = manager.detect();

        assert_eq!(result.primary_framework, None);
        assert!(result.detected_frameworks.is_empty());
        assert!(result.details.is_empty());
        assert_eq!(manager.context_path(), None);
        assert_eq!(manager.base_package(), None);
    }

    #[test]
    fn missing_project_detects_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let result = manager(&temp_dir.path().join("absent")).detect();
        assert_eq!(result, DetectionResult::default());
    }

    #[test]
    fn single_dependency_identifies_spring_boot() {
        let temp_dir = TempDir::new().unwrap();
        write_file(
            temp_dir.path(),
            "pom.xml",
            "<dependency><artifactId>spring-boot-starter-web</artifactId></dependency>",
        );

        let result = manager(temp_dir.path()).detect();

        assert_eq!(result.primary_framework.as_deref(), Some("spring_boot"));
        assert_eq!(result.detected_frameworks, vec!["spring_boot"]);
        assert_eq!(result.score_of("spring_boot"), Some(5));
        assert_eq!(
            result.details[0].details,
            vec!["Found dependencies: spring-boot-starter-web".to_string()]
        );
    }

    #[test]
    fn mixed_evidence_ranks_frameworks() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_file(root, "src/main/webapp/WEB-INF/web.xml", "<web-app/>");
        write_file(
            root,
            "src/main/java/com/acme/HelloServlet.java",
            "@WebServlet(\"/hello\")\npublic class HelloServlet extends HttpServlet {}",
        );
        write_file(
            root,
            "src/main/java/com/acme/LoginAction.java",
            "import com.opensymphony.xwork2.ActionSupport;\npublic class LoginAction extends ActionSupport {}",
        );

        let result = manager(root).detect();

        assert_eq!(result.detected_frameworks, vec!["servlet", "struts2"]);
        assert_eq!(result.score_of("servlet"), Some(10 + 3));
        assert_eq!(result.score_of("struts2"), Some(2 + 2));
    }

    #[test]
    fn annotation_counts_once_across_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for name in ["A", "B", "C"] {
            write_file(
                root,
                &format!("src/{name}.java"),
                "@Path(\"/x\")\npublic class X {}",
            );
        }

        let result = manager(root).detect();

        assert_eq!(result.score_of("jersey"), Some(3));
        assert_eq!(result.score_of("resteasy"), Some(3));
        assert_eq!(result.detected_frameworks, vec!["jersey", "resteasy"]);
    }

    #[test]
    fn annotation_limit_bounds_inspected_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_file(root, "src/A.java", "class A {}");
        write_file(root, "src/B.java", "@WebFilter class B {}");

        let config = DetectionConfig {
            annotation_file_limit: 1,
            class_file_limit: 1,
        };
        let result = DetectionManager::new(root, config).detect();

        assert_eq!(result.primary_framework, None);
    }

    #[test]
    fn custom_catalog_uses_literal_weights() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_file(root, "marker.txt", "");
        write_file(root, "src/App.java", "@One @Two @Three @Four @Five");

        let file_only = FrameworkSignature {
            name: "file_only",
            files: &["marker.txt"],
            dependencies: &[],
            annotations: &[],
            classes: &[],
        };
        let annotations_only = FrameworkSignature {
            name: "annotations_only",
            files: &[],
            dependencies: &[],
            annotations: &["@One", "@Two", "@Three", "@Four", "@Five"],
            classes: &[],
        };

        let result = DetectionManager::with_signatures(
            root,
            vec![file_only, annotations_only],
            DetectionConfig::default(),
        )
        .detect();

        assert_eq!(result.score_of("file_only"), Some(10));
        assert_eq!(result.score_of("annotations_only"), Some(15));
        assert_eq!(
            result.primary_framework.as_deref(),
            Some("annotations_only")
        );
    }

    #[test]
    fn current_dir_style_root_keeps_file_evidence() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_file(root, "src/main/resources/application.yml", "server:\n");
        write_file(
            root,
            "src/main/java/com/acme/Api.java",
            "@RestController\npublic class Api {}",
        );

        let expected = manager(root).detect();

        for suffix in ["./", ".//"] {
            let dotted = PathBuf::from(format!("{}/{suffix}", root.display()));
            let result = manager(&dotted).detect();

            assert_eq!(result, expected, "root {}", dotted.display());
            assert_eq!(result.score_of("spring_boot"), Some(10 + 3));
            assert_eq!(
                result.details[0].details[0],
                "Found files: src/main/resources/application.yml"
            );
        }
    }
}
