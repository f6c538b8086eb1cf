//! Reply sanitizer
//!
//! The reply prompt instructs the model to keep JSON and data-update notes
//! out of the visible reply, but they leak often enough that every reply is
//! scrubbed before it is shown to the user or persisted.

/// Markers that begin a leaked profile-update section. Everything from the
/// first occurrence of a marker through the end of the text is dropped.
const UPDATE_MARKERS: [&str; 2] = ["updated info:", "new info:"];

/// Remove JSON objects, data update notifications, and technical information
/// from a generated reply, keeping only the conversational part
///
/// Guarantees that no line of the output is a bare `{...}` object and that no
/// line starts with an update marker. Makes no attempt to repair the
/// surrounding prose.
pub fn sanitize_reply(reply: &str) -> String {
    let mut text = reply.to_string();

    // Cut "Updated info:" / "New info:" sections and everything after
    for marker in UPDATE_MARKERS {
        if let Some(at) = find_ignore_ascii_case(&text, marker) {
            text.truncate(at);
        }
    }

    let cleaned: Vec<&str> = text
        .lines()
        .filter(|line| {
            let stripped = line.trim();

            // Skip lines that are pure JSON objects
            if stripped.starts_with('{') && stripped.ends_with('}') {
                return false;
            }

            // Skip leftover update labels
            let lower = stripped.to_lowercase();
            !(lower.starts_with("updated") || lower.starts_with("new info"))
        })
        .collect();

    cleaned.join("\n").trim().to_string()
}

/// Byte offset of the first ASCII-case-insensitive occurrence of `needle`
///
/// Safe to truncate at: the match starts with an ASCII byte, which is always
/// a UTF-8 character boundary.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}
