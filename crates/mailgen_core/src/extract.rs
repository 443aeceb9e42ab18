//! Best-effort recovery of a JSON object embedded in free-text model output.

use serde_json::{Map, Value};

/// Returns the first JSON object embedded in `text`.
///
/// Scanning starts at the first `{` and each candidate span is closed by the
/// brace that balances its opening one, so prose before and after the object
/// is tolerated. A span that is not a JSON object is skipped and the search
/// resumes at the next `{` after it; objects nested inside a rejected span are
/// not tried. Braces inside JSON string literals do not count.
/// Any failure (no `{`, no balancing `}`, no valid object) yields `None`.
pub fn extract_json(text: &str) -> Option<Map<String, Value>> {
    let mut start = text.find('{')?;
    loop {
        let end = start + balanced_object_end(&text[start..])?;
        if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(&text[start..end]) {
            return Some(object);
        }
        start = end + text[end..].find('{')?;
    }
}

/// Byte length of the balanced `{...}` span at the start of `text`.
fn balanced_object_end(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (index, ch) in text.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(index + ch.len_utf8());
                }
            }
            _ => {}
        }
    }

    None
}
