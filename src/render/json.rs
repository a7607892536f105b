use crate::{error::Result, routes::Route};

/// Pretty-printed JSON array with every field of every route.
pub fn render(routes: &[Route]) -> Result<String> {
    Ok(serde_json::to_string_pretty(routes)?)
}
