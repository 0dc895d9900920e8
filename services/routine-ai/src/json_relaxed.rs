//! Helpers for parsing loosely formatted JSON responses returned by LLMs:
//! stripping code fences, undoing double-encoding, and extracting the first
//! balanced block, repairing simple truncation when possible.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use shared::error::{PipelineError, Result};

static FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:[A-Za-z0-9_-]+)?\s*(.*?)\s*```").unwrap());
static JSON_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*json\s*[:\n]+").unwrap());
static OPEN_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^```\s*").unwrap());
static TRAIL_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)\s*```\s*$").unwrap());

/// Attempt to parse JSON even when the model wrapped it in code fences,
/// double-encoded it, surrounded it with prose, or truncated it.
pub fn parse_json_relaxed(input: &str) -> Result<Value> {
    let cleaned = strip_code_fences(input.trim());
    // Text that already parses needs no unescaping; a top-level string is
    // the double-encoded case and stays with the unescaper.
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(Value::String(_)) | Err(_) => {}
        Ok(v) => return Ok(v),
    }
    let cleaned = unescape_if_quoted(&cleaned);
    if let Ok(v) = serde_json::from_str::<Value>(&cleaned) {
        return Ok(v);
    }
    let block = extract_first_json_block(&cleaned).ok_or(PipelineError::UnbalancedJson)?;
    serde_json::from_str::<Value>(&block).map_err(|e| PipelineError::InvalidJson(e.to_string()))
}

/// Remove the first complete Markdown fence (optional language tag) and
/// return its content; otherwise drop a leading bare "json" label and any
/// stray unmatched fence markers. Applied to its own output this is a no-op.
pub fn strip_code_fences(s: &str) -> String {
    if let Some(caps) = FENCED_BLOCK.captures(s) {
        return caps[1].trim().to_string();
    }
    let mut t = s.to_string();
    loop {
        let next = JSON_LABEL.replace(&t, "").into_owned();
        let next = OPEN_FENCE.replace_all(&next, "").into_owned();
        let next = TRAIL_FENCE.replace_all(&next, "").into_owned();
        if next == t {
            break;
        }
        t = next;
    }
    t.trim().to_string()
}

/// Reverse double-encoding: a payload that is itself an escaped JSON string
/// literal, or plain text riddled with `\"`/`\n` sequences.
///
/// Deliberately conservative: text that already parses as JSON is returned
/// untouched, and the sequence-replacement branch is only kept when its
/// result re-parses, or looks structural while the original did not parse
/// at all (the truncated case the repair stage can still save). Anything
/// ambiguous falls through to the original text.
pub fn unescape_if_quoted(text: &str) -> String {
    let t = text.trim();
    if t.len() > 1 && t.starts_with('"') && t.ends_with('"') && t.contains("\\\"") {
        if let Ok(inner) = serde_json::from_str::<String>(t) {
            return inner;
        }
    }
    // Already-valid JSON needs no help: escape sequences inside its string
    // literals belong to the parser, not to us.
    if serde_json::from_str::<Value>(t).is_ok() {
        return t.to_string();
    }
    if t.contains("\\n") || t.contains("\\\"") {
        let attempt = t
            .replace("\\n", "\n")
            .replace("\\r", "\r")
            .replace("\\t", "\t")
            .replace("\\\"", "\"")
            .replace("\\\\", "\\");
        let trimmed = attempt.trim();
        if serde_json::from_str::<Value>(trimmed).is_ok() {
            return attempt;
        }
        // Truncated double-encoded output cannot re-parse yet; keep it for
        // the repair stage only when it at least looks structural.
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            return attempt;
        }
    }
    t.to_string()
}

/// Extract the first balanced JSON object or array, ignoring brackets that
/// occur inside string literals. A scan that ends with open brackets (and
/// outside any string) is repaired by closing them innermost-first; the
/// repaired candidate is kept only when it parses.
pub fn extract_first_json_block(s: &str) -> Option<String> {
    let s = s.trim();
    let mut in_str = false;
    let mut esc = false;
    let mut stack: Vec<char> = Vec::new();
    let mut start: Option<usize> = None;

    for (i, ch) in s.char_indices() {
        if in_str {
            if esc {
                esc = false;
            } else if ch == '\\' {
                esc = true;
            } else if ch == '"' {
                in_str = false;
            }
            continue;
        }

        match ch {
            '"' => in_str = true,
            '{' | '[' => {
                if start.is_none() {
                    start = Some(i);
                }
                stack.push(ch);
            }
            '}' | ']' => {
                if let Some(open) = stack.pop() {
                    let matches = (open == '{' && ch == '}') || (open == '[' && ch == ']');
                    if !matches {
                        stack.clear();
                        start = None;
                        continue;
                    }
                    if stack.is_empty() {
                        let st = start.unwrap_or(0);
                        return Some(s[st..=i].trim().to_string());
                    }
                } else {
                    start = None;
                }
            }
            _ => {}
        }
    }

    if let Some(st) = start {
        if !in_str && !stack.is_empty() {
            let mut repaired = s[st..].trim_end().to_string();
            while let Some(open) = stack.pop() {
                repaired.push(if open == '{' { '}' } else { ']' });
            }
            if serde_json::from_str::<Value>(&repaired).is_ok() {
                return Some(repaired);
            }
        }
    }
    None
}
