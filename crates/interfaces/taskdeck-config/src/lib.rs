//! Central configuration constants for the client and its defaults.

/// Default API root of the todo-list service. Always ends with a slash so
/// relative endpoint paths join onto it.
pub const DEFAULT_BASE_URL: &str = "https://social-network.samuraijs.com/api/1.1/";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "TASKDECK_BASE_URL";

/// Environment variable holding the `API-KEY` header value.
pub const API_KEY_ENV: &str = "TASKDECK_API_KEY";

/// Per-request timeout applied by the HTTP client, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connect timeout applied by the HTTP client, in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Banner text used when a failed response carries no message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Some error occurred";

/// Capacity of the store's event broadcast channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Minimum password length accepted by the login form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Ensures a base URL ends with exactly one trailing slash.
pub fn normalize_base_url(url: &str) -> String {
    format!("{}/", url.trim_end_matches('/'))
}
