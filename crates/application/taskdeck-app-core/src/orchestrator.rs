use std::future::Future;

use taskdeck_core::{EntityStatus, RequestStatus, ServerFailure, ServerReply};
use tracing::{debug, warn};

use crate::app_core::{AppStore, DomainEvent};
use crate::domain::EntityKey;
use crate::errors::{classify_network_error, handle_server_app_error, OperationError, Rejected};

/// Keeps the global status in `loading` while alive. Dropping it is the final
/// reset, so the reset also happens on early returns and dropped futures.
pub struct OperationScope {
    store: AppStore,
}

impl OperationScope {
    pub fn enter(store: &AppStore) -> Self {
        store.apply(DomainEvent::OperationStarted);
        Self {
            store: store.clone(),
        }
    }
}

impl Drop for OperationScope {
    fn drop(&mut self) {
        self.store.apply(DomainEvent::OperationFinished);
    }
}

/// Runs one unit of work inside an [`OperationScope`].
///
/// The work marks `succeeded` itself once it has validated the envelope, and
/// reports server failures it already handled as [`OperationError::Server`].
/// Transport failures are classified here: the message goes to the banner and
/// the status becomes `failed`. The caller gets either the work's value or a
/// [`Rejected`], never a raw transport error.
pub async fn run_operation<T, F, Fut>(
    store: &AppStore,
    name: &'static str,
    work: F,
) -> Result<T, Rejected>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, OperationError>>,
{
    let _scope = OperationScope::enter(store);
    debug!(operation = name, "operation started");

    match work().await {
        Ok(value) => {
            debug!(operation = name, "operation fulfilled");
            Ok(value)
        }
        Err(OperationError::Server(failure)) => {
            warn!(
                operation = name,
                result_code = failure.result_code,
                "server rejected operation"
            );
            Err(Rejected::Server(failure))
        }
        Err(OperationError::Transport(err)) => {
            let message = classify_network_error(&err);
            warn!(operation = name, error = %message, "transport failure");
            store.apply(DomainEvent::AppErrorSet(Some(message)));
            store.apply(DomainEvent::AppStatusChanged(RequestStatus::Failed));
            Err(Rejected::Network)
        }
    }
}

/// Called by a unit of work once its envelope reported success.
pub fn mark_succeeded(store: &AppStore) {
    store.apply(DomainEvent::AppStatusChanged(RequestStatus::Succeeded));
}

/// Whether a failed envelope is allowed to reach the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerPolicy {
    Always,
    /// Field errors take precedence: when any are present the banner stays
    /// untouched, even if the envelope also carries messages.
    UnlessFieldErrors,
    Never,
}

impl BannerPolicy {
    pub fn shows_banner(self, failure: &ServerFailure) -> bool {
        match self {
            BannerPolicy::Always => true,
            BannerPolicy::UnlessFieldErrors => !failure.has_field_errors(),
            BannerPolicy::Never => false,
        }
    }
}

/// Unwraps a successful reply, or routes the failure through the server error
/// handler and turns it into [`OperationError::Server`].
pub fn settle<D>(
    store: &AppStore,
    reply: ServerReply<D>,
    policy: BannerPolicy,
) -> Result<D, OperationError> {
    match reply {
        ServerReply::Success(data) => Ok(data),
        ServerReply::Failure(failure) => {
            handle_server_app_error(store, &failure, policy.shows_banner(&failure));
            Err(OperationError::Server(failure))
        }
    }
}

/// Marks one record `loading` for the duration of an operation on it. Unless
/// resolved explicitly, the record ends up `failed` when the scope drops, so
/// it can never stay stuck in `loading`.
pub struct EntityScope {
    store: AppStore,
    key: EntityKey,
    resolved: bool,
}

impl EntityScope {
    pub fn enter(store: &AppStore, key: EntityKey) -> Self {
        store.apply(DomainEvent::EntityStatusChanged {
            key: key.clone(),
            status: EntityStatus::Loading,
        });
        Self {
            store: store.clone(),
            key,
            resolved: false,
        }
    }

    pub fn resolve(mut self, status: EntityStatus) {
        self.set(status);
    }

    fn set(&mut self, status: EntityStatus) {
        self.resolved = true;
        self.store.apply(DomainEvent::EntityStatusChanged {
            key: self.key.clone(),
            status,
        });
    }
}

impl Drop for EntityScope {
    fn drop(&mut self) {
        if !self.resolved {
            self.set(EntityStatus::Failed);
        }
    }
}

/// Flags the app as initialized when dropped.
pub struct InitializationScope {
    store: AppStore,
}

impl InitializationScope {
    pub fn enter(store: &AppStore) -> Self {
        Self {
            store: store.clone(),
        }
    }
}

impl Drop for InitializationScope {
    fn drop(&mut self) {
        self.store.apply(DomainEvent::AppInitialized);
    }
}
