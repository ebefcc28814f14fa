//! Input utilities for terminal applications
//!
//! Text typed by the user ends up inside a single protocol line, so anything
//! that could break the line framing has to go before encoding.

/// Sanitize a line of user text before it is sent
///
/// This function:
/// - Converts tabs to 4 spaces
/// - Drops carriage returns and newlines
/// - Filters out all other control characters
/// - Trims trailing whitespace
pub fn sanitize_text_input(text: &str) -> String {
    let mut sanitized = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\t' => sanitized.push_str("    "),
            _ if !c.is_control() => sanitized.push(c),
            _ => {}
        }
    }

    let trimmed = sanitized.trim_end().len();
    sanitized.truncate(trimmed);
    sanitized
}
