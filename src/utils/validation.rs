use std::path::Path;
use tracing::warn;

/// Fallback name for uploads that arrive without a filename.
pub const UNNAMED_FILE: &str = "unnamed";

/// Maximum stored filename length in bytes
const MAX_FILENAME_LEN: usize = 255;

/// Reduces an uploaded filename to a safe path component.
///
/// Strips any directory part, replaces reserved characters, and caps
/// the length on a UTF-8 boundary. Source files of every language are
/// accepted, so there is no extension filtering.
pub fn sanitize_filename(filename: &str) -> String {
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        warn!("Path components in uploaded filename: {}", filename);
    }

    let name = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");

    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_control()
                || matches!(
                    c,
                    '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | ';'
                )
            {
                '_'
            } else {
                c
            }
        })
        .collect();

    let sanitized = if sanitized.len() > MAX_FILENAME_LEN {
        let mut end = MAX_FILENAME_LEN;
        while !sanitized.is_char_boundary(end) {
            end -= 1;
        }
        sanitized[..end].to_string()
    } else {
        sanitized
    };

    if sanitized.is_empty() {
        UNNAMED_FILE.to_string()
    } else {
        sanitized
    }
}
