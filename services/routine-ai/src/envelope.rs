//! Locates the assistant-generated text inside an arbitrary vendor response
//! envelope by probing known paths in priority order.

use serde_json::Value;

/// One accessor inside a vendor envelope path.
#[derive(Debug, Clone, Copy)]
enum Step {
    Key(&'static str),
    Index(usize),
}

use Step::{Index, Key};

/// Known envelope shapes, most common first. The first path that resolves
/// to a present node wins; an unresolved path just means "try the next".
const TEXT_PATHS: &[&[Step]] = &[
    &[Key("choices"), Index(0), Key("message"), Key("content")],
    &[Key("choices"), Index(0), Key("message"), Key("content"), Index(0)],
    &[Key("choices"), Index(0), Key("text")],
    &[Key("outputs"), Index(0)],
    &[Key("output")],
    &[Key("response")],
    &[Key("choices"), Index(0), Key("response")],
    &[
        Key("candidates"),
        Index(0),
        Key("content"),
        Key("parts"),
        Index(0),
        Key("text"),
    ],
    &[
        Key("candidates"),
        Index(0),
        Key("content"),
        Index(0),
        Key("parts"),
        Index(0),
        Key("text"),
    ],
];

fn resolve<'a>(root: &'a Value, path: &[Step]) -> Option<&'a Value> {
    let mut node = root;
    for step in path {
        node = match step {
            Step::Key(k) => node.get(k)?,
            Step::Index(i) => node.get(*i)?,
        };
    }
    Some(node)
}

fn node_text(node: &Value) -> String {
    match node {
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let mut out = String::new();
            for item in items {
                match item {
                    Value::String(s) => out.push_str(s),
                    other => out.push_str(&other.to_string()),
                }
                out.push('\n');
            }
            out.trim().to_string()
        }
        other => other.to_string(),
    }
}

/// Extract the assistant text from a raw vendor response body.
///
/// Pure and total: a body that is not JSON, or whose tree matches none of
/// the known paths, comes back unchanged and the later stages deal with it.
pub fn extract_assistant_text(raw: &str) -> String {
    let root: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(_) => return raw.to_string(),
    };
    for path in TEXT_PATHS {
        if let Some(node) = resolve(&root, path) {
            return node_text(node);
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_completions_shape() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"{\"weeks\":[]}"}}]}"#;
        assert_eq!(extract_assistant_text(raw), r#"{"weeks":[]}"#);
    }

    #[test]
    fn candidates_parts_shape() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"hola"}]}}]}"#;
        assert_eq!(extract_assistant_text(raw), "hola");
    }

    #[test]
    fn array_content_joined_by_newline() {
        let raw = r#"{"outputs":["line one","line two"]}"#;
        // "outputs/0" resolves to the first element directly.
        assert_eq!(extract_assistant_text(raw), "line one");

        let raw = r#"{"choices":[{"message":{"content":["a","b"]}}]}"#;
        assert_eq!(extract_assistant_text(raw), "a\nb");
    }

    #[test]
    fn non_json_body_passes_through() {
        assert_eq!(extract_assistant_text("just text"), "just text");
    }

    #[test]
    fn unknown_envelope_passes_through() {
        let raw = r#"{"data":{"something":"else"}}"#;
        assert_eq!(extract_assistant_text(raw), raw);
    }

    #[test]
    fn non_string_node_is_serialized() {
        let raw = r#"{"output":{"weeks":[]}}"#;
        assert_eq!(extract_assistant_text(raw), r#"{"weeks":[]}"#);
    }
}
