use std::sync::Arc;

use taskdeck_core::{EntityStatus, Todolist, UpdateTodolistTitle};

use crate::app_core::DomainEvent;
use crate::domain::EntityKey;
use crate::errors::Rejected;
use crate::kernel::AppKernel;
use crate::orchestrator::{mark_succeeded, run_operation, settle, BannerPolicy, EntityScope};
use crate::ports::{AuthApi, TasksApi, TodolistsApi};

impl<T, K, A> AppKernel<T, K, A>
where
    T: TodolistsApi,
    K: TasksApi,
    A: AuthApi,
{
    pub async fn fetch_todolists(&self) -> Result<Vec<Todolist>, Rejected> {
        let api = Arc::clone(&self.todolists);
        let store = self.store.clone();
        let lists = run_operation(&self.store, "todolists/fetch", || async move {
            let reply = api.fetch_todolists().await?;
            let lists = settle(&store, reply, BannerPolicy::Always)?;
            mark_succeeded(&store);
            Ok(lists)
        })
        .await?;

        self.store
            .apply(DomainEvent::TodolistsFetched(lists.clone()));
        Ok(lists)
    }

    pub async fn add_todolist(&self, title: &str) -> Result<Todolist, Rejected> {
        let api = Arc::clone(&self.todolists);
        let store = self.store.clone();
        let list = run_operation(&self.store, "todolists/add", || async move {
            let reply = api.create_todolist(title).await?;
            let created = settle(&store, reply, BannerPolicy::Always)?;
            mark_succeeded(&store);
            Ok(created.item)
        })
        .await?;

        self.store.apply(DomainEvent::TodolistAdded(list.clone()));
        Ok(list)
    }

    /// Only the removed list is marked busy; a failed removal leaves it
    /// `failed` rather than stuck in `loading`.
    pub async fn remove_todolist(&self, id: &str) -> Result<(), Rejected> {
        let scope = EntityScope::enter(&self.store, EntityKey::Todolist(id.to_string()));

        let api = Arc::clone(&self.todolists);
        let store = self.store.clone();
        run_operation(&self.store, "todolists/remove", || async move {
            let reply = api.delete_todolist(id).await?;
            settle(&store, reply, BannerPolicy::Always)?;
            mark_succeeded(&store);
            Ok(())
        })
        .await?;

        scope.resolve(EntityStatus::Idle);
        self.store
            .apply(DomainEvent::TodolistRemoved(id.to_string()));
        Ok(())
    }

    pub async fn change_todolist_title(
        &self,
        arg: UpdateTodolistTitle,
    ) -> Result<UpdateTodolistTitle, Rejected> {
        let api = Arc::clone(&self.todolists);
        let store = self.store.clone();
        let arg = run_operation(&self.store, "todolists/rename", || async move {
            let reply = api.update_todolist_title(&arg).await?;
            settle(&store, reply, BannerPolicy::Always)?;
            mark_succeeded(&store);
            Ok(arg)
        })
        .await?;

        self.store.apply(DomainEvent::TodolistTitleChanged {
            id: arg.id.clone(),
            title: arg.title.clone(),
        });
        Ok(arg)
    }
}
