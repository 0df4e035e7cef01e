use crate::method::Method;

/// Output unit a documented entry is appended to, keyed by URL shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocGroup {
    /// File stem of the group's markdown file.
    pub stem: String,
    /// Section heading written once when the group is created.
    pub entity: String,
}

/// Derive the documentation group of a URL.
///
/// Single-segment paths group under the segment itself (`index` for the bare
/// root). Deeper paths group under the first two segments plus the method, so
/// `/v1/widgets/create` documented with POST lands in `v1_widgets_post` under
/// the `widgets` heading.
pub fn resolve_group(url: &str, method: Method) -> DocGroup {
    let path = url.split('?').next().unwrap_or("");
    let parts: Vec<&str> = path.split('/').skip(1).collect();

    if parts.len() <= 1 {
        let segment = parts.first().map(|p| p.trim()).unwrap_or("");
        let name = if segment.is_empty() { "index" } else { segment };
        return DocGroup {
            stem: name.to_string(),
            entity: name.to_string(),
        };
    }

    DocGroup {
        stem: format!(
            "{}_{}_{}",
            parts[0],
            parts[1],
            method.as_str().to_lowercase()
        ),
        entity: parts[1].to_string(),
    }
}
