use std::sync::Arc;

use taskdeck_core::{AuthMe, LoginParams};
use tracing::info;

use crate::app_core::DomainEvent;
use crate::errors::Rejected;
use crate::kernel::AppKernel;
use crate::orchestrator::{
    mark_succeeded, run_operation, settle, BannerPolicy, InitializationScope,
};
use crate::ports::{AuthApi, TasksApi, TodolistsApi};

impl<T, K, A> AppKernel<T, K, A>
where
    T: TodolistsApi,
    K: TasksApi,
    A: AuthApi,
{
    /// Field errors in the rejection are meant for the login form; when the
    /// server sends any, the banner is left alone.
    pub async fn login(&self, params: LoginParams) -> Result<(), Rejected> {
        let api = Arc::clone(&self.auth);
        let store = self.store.clone();
        let data = run_operation(&self.store, "auth/login", || async move {
            let reply = api.login(&params).await?;
            let data = settle(&store, reply, BannerPolicy::UnlessFieldErrors)?;
            mark_succeeded(&store);
            Ok(data)
        })
        .await?;

        info!(user_id = data.user_id, "logged in");
        self.store.apply(DomainEvent::LoggedInChanged(true));
        Ok(())
    }

    /// Clears every entity collection before declaring success.
    pub async fn logout(&self) -> Result<(), Rejected> {
        let api = Arc::clone(&self.auth);
        let store = self.store.clone();
        run_operation(&self.store, "auth/logout", || async move {
            let reply = api.logout().await?;
            settle(&store, reply, BannerPolicy::Always)?;
            store.apply(DomainEvent::EntitiesCleared);
            mark_succeeded(&store);
            Ok(())
        })
        .await?;

        info!("logged out");
        self.store.apply(DomainEvent::LoggedInChanged(false));
        Ok(())
    }

    /// Restores the session. An anonymous visit is not an error, so a failed
    /// envelope never reaches the banner. The app is flagged initialized last,
    /// whatever the outcome.
    pub async fn initialize_app(&self) -> Result<AuthMe, Rejected> {
        let _initialized = InitializationScope::enter(&self.store);

        let api = Arc::clone(&self.auth);
        let store = self.store.clone();
        let me = run_operation(&self.store, "auth/initializeApp", || async move {
            let reply = api.me().await?;
            let me = settle(&store, reply, BannerPolicy::Never)?;
            mark_succeeded(&store);
            Ok(me)
        })
        .await?;

        info!(login = %me.login, "session restored");
        self.store.apply(DomainEvent::LoggedInChanged(true));
        Ok(me)
    }

    /// Asks the server who the session belongs to, without re-running the
    /// start-up restore. A server rejection means the session is gone.
    pub async fn fetch_me(&self) -> Result<AuthMe, Rejected> {
        let api = Arc::clone(&self.auth);
        let store = self.store.clone();
        let res = run_operation(&self.store, "auth/me", || async move {
            let reply = api.me().await?;
            let me = settle(&store, reply, BannerPolicy::Never)?;
            mark_succeeded(&store);
            Ok(me)
        })
        .await;

        if let Err(Rejected::Server(_)) = &res {
            self.store.apply(DomainEvent::LoggedInChanged(false));
        }
        res
    }
}
