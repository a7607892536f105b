//! Raw HTTP request templates, one per route, for replay in an
//! intercepting proxy.
use log::*;

use crate::{config::OutputConfig, error::Result, routes::Route};

/// Literal written into the `Host` header unless configured otherwise.
pub const DEFAULT_HOST_PLACEHOLDER: &str = "{{host}}";

/// Placeholder payload for routes that accept a request body.
pub const PLACEHOLDER_BODY: &str = r#"{"key": "value"}"#;

/// Separator between consecutive request templates.
pub const TEMPLATE_SEPARATOR: &str = "\n\n===\n\n";

/// Template variables: `method`, `path`, `host`, `has_body`, `body`, and the
/// route itself as `route`.
pub const DEFAULT_REQUEST_TEMPLATE: &str = "{{ method }} {{ path }} HTTP/1.1
Host: {{ host }}
{% if has_body %}Content-Type: application/json

{{ body }}{% endif %}";

/// Renders the request template for a single route.
pub fn render_route(route: &Route, config: &OutputConfig) -> Result<String> {
    let mut context = tera::Context::new();
    context.insert("method", &route.http_method);
    context.insert("path", &route.path);
    context.insert("host", &config.host);
    context.insert("has_body", &route.has_body());
    context.insert("body", PLACEHOLDER_BODY);
    context.insert("route", route);

    Ok(tera::Tera::one_off(&config.request_template, &context, false)?)
}

/// Renders every route and joins the templates with [`TEMPLATE_SEPARATOR`].
pub fn render(routes: &[Route], config: &OutputConfig) -> Result<String> {
    let templates = routes
        .iter()
        .map(|route| render_route(route, config))
        .collect::<Result<Vec<String>>>()?;

    debug!("rendered {} request templates", templates.len());

    Ok(templates.join(TEMPLATE_SEPARATOR))
}
