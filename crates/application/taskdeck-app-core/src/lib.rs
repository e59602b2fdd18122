pub mod app_core;
pub mod auth;
pub mod domain;
pub mod errors;
pub mod forms;
pub mod http;
pub mod kernel;
pub mod orchestrator;
pub mod ports;
pub mod tasks;
pub mod todolists;

pub use app_core::*;
pub use domain::{AppSlice, AppState, AuthState, EntityKey};
pub use errors::{classify_network_error, handle_server_app_error, OperationError, Rejected};
pub use forms::LoginForm;
pub use http::HttpApi;
pub use kernel::{AppKernel, HttpKernel};
pub use orchestrator::{run_operation, BannerPolicy};
pub use ports::*;
