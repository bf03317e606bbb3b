//! HTML fragments for each fetch state.

use std::fmt::Write as _;

use serde_json::Value;

use super::state::FetchState;
use crate::api::types::APP_NAME;

/// Text of the loading indicator.
pub const LOADING_TEXT: &str = "Loading...";

/// Notice shown when the fetch succeeded with an empty payload.
pub const NO_DATA_TEXT: &str = "No data available";

/// Render the fragment for `state`.
pub fn render(state: &FetchState) -> String {
    match state {
        FetchState::Loading => format!(r#"<div class="loading">{}</div>"#, LOADING_TEXT),
        FetchState::Error(message) => {
            format!(r#"<div class="error">{}</div>"#, escape_html(message))
        }
        FetchState::Success(body) => render_page(body),
    }
}

fn render_page(body: &Value) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"App\">\n");
    out.push_str("  <header class=\"App-header\">\n");
    let _ = writeln!(out, "    <h1>{}</h1>", escape_html(APP_NAME));
    out.push_str("  </header>\n");
    out.push_str("  <main>\n");
    out.push_str("    <h2>Environment Data from API</h2>\n");

    if is_empty_payload(body) {
        let _ = writeln!(out, "    <p>{}</p>", NO_DATA_TEXT);
    } else {
        let pretty = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
        out.push_str("    <div class=\"env-data\">\n");
        let _ = writeln!(out, "      <pre>{}</pre>", escape_html(&pretty));
        out.push_str("    </div>\n");
    }

    out.push_str("  </main>\n");
    out.push_str("</div>");
    out
}

fn is_empty_payload(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Escape text content. Quotes are left alone; they are safe outside attributes.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
