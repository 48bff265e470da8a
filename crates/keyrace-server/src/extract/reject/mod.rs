//! Drop-in replacements for axum extractors with detailed error rejections.

pub mod enhanced_json;
pub mod enhanced_path;
pub mod enhanced_query;

pub use self::enhanced_json::Json;
pub use self::enhanced_path::Path;
pub use self::enhanced_query::Query;

/// Truncates a rejection message to its first lines.
fn sanitize_error_message(message: &str, max_lines: usize, max_chars: usize) -> String {
    message
        .lines()
        .take(max_lines)
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(max_chars)
        .collect()
}
