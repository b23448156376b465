//! Utilities module for Axion
//!
//! Shared helper functions:
//! - Path utilities
//! - Text utilities

/// Path utilities
pub mod path {
    use std::path::Path;

    /// Get the file name component as a string
    pub fn file_name(path: &Path) -> Option<String> {
        path.file_name()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string())
    }

    /// Get the file extension
    pub fn extension(path: &Path) -> Option<&str> {
        path.extension().and_then(|s| s.to_str())
    }
}

/// Text utilities
pub mod text {
    /// Truncate string to `max_chars` characters with an ellipsis
    pub fn truncate(s: &str, max_chars: usize) -> String {
        if s.chars().count() <= max_chars {
            s.to_string()
        } else if max_chars <= 3 {
            "...".to_string()
        } else {
            let kept: String = s.chars().take(max_chars - 3).collect();
            format!("{}...", kept)
        }
    }
}
