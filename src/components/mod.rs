//! UI Components
//!
//! Reusable Leptos components for the app.

pub mod comment_thread;
pub mod loading;
pub mod nav;
pub mod pdf_overlay;
pub mod toast;

pub use comment_thread::CommentThread;
pub use loading::{CardSkeleton, ListSkeleton, Loading};
pub use nav::Nav;
pub use pdf_overlay::PdfOverlayViewer;
pub use toast::Toast;

/// Human-readable date for an API timestamp, falling back to the raw
/// string when it is not RFC 3339.
pub fn format_timestamp(iso: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.format("%b %e, %Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_rfc3339() {
        assert_eq!(format_timestamp("2024-03-09T12:30:00Z"), "Mar  9, 2024");
    }

    #[test]
    fn test_format_timestamp_passthrough() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
