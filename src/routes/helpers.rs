use regex::Regex;
use std::sync::LazyLock;

/// Single-line public method declaration, capturing the method name. One
/// level of nested parentheses is allowed inside the parameter list so that
/// annotated parameters such as `@PathVariable("id") Long id` still match.
static PUBLIC_METHOD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"public\s+(?:[\w<>\[\],.?]+\s+)+(\w+)\s*\((?:[^()]|\([^()]*\))*\)\s*(?:throws\s+[\w\s,.]+)?\s*\{",
    )
    .unwrap()
});

/// Join a class-level and a method-level path with exactly one slash and
/// no trailing slash, except for the root path itself.
pub fn compose_path(base_path: &str, method_path: &str) -> String {
    let joined = format!(
        "{}/{}",
        base_path.trim_end_matches('/'),
        method_path.trim_start_matches('/')
    );

    if joined == "/" {
        return joined;
    }

    joined.trim_end_matches('/').to_string()
}

/// Method name declared on `line`, if it holds a public method signature.
pub fn method_signature(line: &str) -> Option<String> {
    PUBLIC_METHOD_REGEX
        .captures(line)
        .map(|caps| caps[1].to_string())
}

/// Search the `window` lines following `start` (0-based index) for the
/// nearest public method signature. Returns its index and method name.
pub fn find_method_signature(
    lines: &[&str],
    start: usize,
    window: usize,
) -> Option<(usize, String)> {
    let end = (start + window).min(lines.len().saturating_sub(1));

    ((start + 1)..=end).find_map(|index| {
        method_signature(lines[index]).map(|name| (index, name))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_path_collapses_boundary_slashes() {
        assert_eq!(compose_path("/api/", "/users/"), "/api/users");
        assert_eq!(compose_path("/api", "users"), "/api/users");
        assert_eq!(compose_path("api", "users/{id}"), "api/users/{id}");
    }

    #[test]
    fn compose_path_with_empty_parts() {
        assert_eq!(compose_path("", "/x"), "/x");
        assert_eq!(compose_path("/api", ""), "/api");
        assert_eq!(compose_path("", ""), "/");
        assert_eq!(compose_path("/", "/"), "/");
    }

    #[test]
    fn compose_path_is_idempotent_on_separators() {
        let once = compose_path("/api/", "/users/");
        assert_eq!(compose_path(&once, ""), once);
    }

    #[test]
    fn method_signature_reads_common_declarations() {
        assert_eq!(
            method_signature("    public User getUser(@PathVariable(\"id\") Long id) {")
                .as_deref(),
            Some("getUser")
        );
        assert_eq!(
            method_signature(
                "public ResponseEntity<List<Order>> list(@RequestParam(value = \"page\", required = false) int page) throws IOException {"
            )
            .as_deref(),
            Some("list")
        );
        assert_eq!(
            method_signature("public static Map<String, Object> stats() {").as_deref(),
            Some("stats")
        );
    }

    #[test]
    fn method_signature_rejects_classes_and_constructors() {
        assert_eq!(method_signature("public class UserController {"), None);
        assert_eq!(method_signature("public UserController(UserService s) {"), None);
        assert_eq!(method_signature("public User getUser(Long id);"), None);
    }

    #[test]
    fn method_signature_misses_multi_line_parameter_lists() {
        assert_eq!(method_signature("public User create("), None);
    }

    #[test]
    fn find_method_signature_within_window() {
        let mut lines = vec!["@GetMapping(\"/x\")"];
        lines.extend(std::iter::repeat_n("// filler", 9));
        lines.push("public String x() {");

        assert_eq!(
            find_method_signature(&lines, 0, 10),
            Some((10, "x".to_string()))
        );
    }

    #[test]
    fn find_method_signature_excludes_eleventh_line() {
        let mut lines = vec!["@GetMapping(\"/x\")"];
        lines.extend(std::iter::repeat_n("// filler", 10));
        lines.push("public String x() {");

        assert_eq!(find_method_signature(&lines, 0, 10), None);
    }

    #[test]
    fn find_method_signature_ignores_start_line() {
        let lines = vec!["public String x() { @GetMapping(\"/x\")"];
        assert_eq!(find_method_signature(&lines, 0, 10), None);
    }

    #[test]
    fn find_method_signature_at_end_of_file() {
        let lines = vec!["@GetMapping(\"/x\")"];
        assert_eq!(find_method_signature(&lines, 0, 10), None);
        assert_eq!(find_method_signature(&[], 0, 10), None);
    }
}
