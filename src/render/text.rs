use crate::routes::Route;

/// One line per route: padded verb and path, then the handler.
pub fn render(routes: &[Route]) -> String {
    routes
        .iter()
        .map(|r| {
            format!(
                "{:6} {:40} -> {}.{}()",
                r.http_method, r.path, r.class_name, r.method_name
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}
