pub mod api;
pub mod error;
pub mod net;

// Re-exports for convenience
pub use api::ApiClient;
pub use error::{ApiError, ApiErrorKind};
pub use net::{default_http_client, ApiSettings};
