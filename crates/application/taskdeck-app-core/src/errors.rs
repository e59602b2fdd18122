//! The two error channels: application failures reported inside an envelope,
//! and transport failures that never produced one.

use taskdeck_config::FALLBACK_ERROR_MESSAGE;
use taskdeck_core::{FieldError, RequestStatus, ServerFailure};

use crate::app_core::{AppStore, DomainEvent};
use crate::ports::TransportError;

/// Error type of a unit of work run by the orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    /// Already routed through [`handle_server_app_error`].
    #[error("server rejected the request")]
    Server(ServerFailure),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// What a rejected operation hands back to its caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejected {
    /// Transport failure; the banner already carries the message.
    #[error("network request failed")]
    Network,
    /// The server answered with a failed envelope.
    #[error("server rejected the request: {}", .0.first_message().unwrap_or("no message"))]
    Server(ServerFailure),
}

impl Rejected {
    pub fn failure(&self) -> Option<&ServerFailure> {
        match self {
            Rejected::Server(f) => Some(f),
            Rejected::Network => None,
        }
    }

    pub fn field_errors(&self) -> &[FieldError] {
        self.failure()
            .map(|f| f.fields_error.as_slice())
            .unwrap_or(&[])
    }
}

/// Surfaces a failed envelope: the first message (or a fallback) goes to the
/// banner unless `show_banner` is false, and the global status becomes failed
/// either way. Field errors are left to the caller.
pub fn handle_server_app_error(store: &AppStore, failure: &ServerFailure, show_banner: bool) {
    if show_banner {
        let message = failure
            .first_message()
            .unwrap_or(FALLBACK_ERROR_MESSAGE)
            .to_string();
        store.apply(DomainEvent::AppErrorSet(Some(message)));
    }
    store.apply(DomainEvent::AppStatusChanged(RequestStatus::Failed));
}

/// Human-readable message for a transport failure: the payload's `message`,
/// then the failure's own message, then its rendering.
pub fn classify_network_error(err: &TransportError) -> String {
    if let Some(message) = err.payload_message() {
        return message.to_string();
    }
    if let Some(message) = err.message().filter(|m| !m.is_empty()) {
        return message.to_string();
    }
    match err {
        TransportError::Other(inner) => format!("{inner:#}"),
        other => other.to_string(),
    }
}
