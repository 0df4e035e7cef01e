use std::fmt::Write;

use crate::method::Method;
use crate::params::FormParameter;
use crate::schema::ColumnDefault;

// Header and body blocks are indented by exactly 12 spaces; downstream doc
// tooling parses the files on that layout.
const BLOCK_INDENT: &str = "            ";

/// Everything needed to format one documented endpoint.
#[derive(Debug)]
pub struct Entry<'a> {
    pub role: &'a str,
    pub method: Method,
    pub url: &'a str,
    pub params: &'a [FormParameter],
    pub query_string: &'a [(String, String)],
    pub request_headers: &'a [(String, String)],
    pub response_headers: &'a [(String, String)],
    pub body: &'a str,
}

/// Header block written once per documentation group, followed by the entity
/// heading and its underline.
pub fn render_header(title: &str, version: &str, entity: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {title} API Documentation");
    out.push('\n');
    let _ = writeln!(out, "Version: {version}");
    let _ = write!(out, "\n{entity}\n{}\n", "-".repeat(entity.len()));
    out
}

/// Render one documented endpoint as markdown, ending with a blank line.
pub fn render_entry(entry: &Entry<'_>) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "\n- ({}) **{}** `{}`\n",
        entry.role, entry.method, entry.url
    );

    if !entry.params.is_empty() {
        out.push_str("\n    - Form Parameters:\n\n");
        out.push_str("        | Parameter | Optional | Type | Default | Example |\n");
        out.push_str("        | --------- | -------- | ---- | ------- | ------- |\n");
        for param in entry.params {
            let _ = write!(
                out,
                "        | {} | {} | {} | {} | {} |\n",
                param.name,
                optional_cell(param, entry.method),
                param.type_name(),
                default_cell(param),
                param.example()
            );
        }
    }

    if !entry.query_string.is_empty() {
        out.push_str("\n    - Query String:\n\n");
        out.push_str("        | Parameter | Example |\n");
        out.push_str("        | --------- | ------- |\n");
        for (name, value) in entry.query_string {
            let _ = write!(out, "        | {name} | {value} |\n");
        }
    }

    if !entry.request_headers.is_empty() {
        out.push_str("\n    - Request Headers:\n\n");
        for (name, value) in entry.request_headers {
            let _ = write!(out, "{BLOCK_INDENT}{name}: {value}\n");
        }
    }

    out.push_str("\n    - Response Headers:\n\n");
    for (name, value) in entry.response_headers {
        let _ = write!(out, "{BLOCK_INDENT}{name}: {value}\n");
    }

    out.push_str("\n    - Response Body:\n\n");
    for line in entry.body.lines() {
        let _ = write!(out, "{BLOCK_INDENT}{line}\n");
    }
    out.push_str("\n\n");
    out
}

/// Update-in-place verbs force the displayed optionality to true; the value
/// recorded from the schema is untouched.
fn optional_cell(param: &FormParameter, method: Method) -> String {
    if method.is_update_in_place() {
        return "true".to_string();
    }
    match param.optional {
        Some(optional) => optional.to_string(),
        None => String::new(),
    }
}

fn default_cell(param: &FormParameter) -> String {
    param
        .default
        .as_ref()
        .map(ColumnDefault::display)
        .unwrap_or_default()
}
