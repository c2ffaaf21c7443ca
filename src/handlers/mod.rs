/// HTTP request handlers
pub mod current_date;
pub mod related;

// Re-export handlers for convenience
pub use current_date::{get_current_date, CurrentDateParams};
pub use related::{get_related_posts, RawRelatedParams, RelatedHandlerState};
