use std::sync::Arc;

use taskdeck_core::{EntityStatus, Task};

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
    pub async fn fetch_tasks(&self, list_id: &str) -> Result<Vec<Task>, Rejected> {
        let api = Arc::clone(&self.tasks);
        let store = self.store.clone();
        let tasks = run_operation(&self.store, "tasks/fetch", || async move {
            let reply = api.fetch_tasks(list_id).await?;
            let tasks = settle(&store, reply, BannerPolicy::Always)?;
            mark_succeeded(&store);
            Ok(tasks)
        })
        .await?;

        self.store.apply(DomainEvent::TasksFetched {
            list_id: list_id.to_string(),
            tasks: tasks.clone(),
        });
        Ok(tasks)
    }

    pub async fn add_task(&self, list_id: &str, title: &str) -> Result<Task, Rejected> {
        let api = Arc::clone(&self.tasks);
        let store = self.store.clone();
        let task = run_operation(&self.store, "tasks/add", || async move {
            let reply = api.create_task(list_id, title).await?;
            let created = settle(&store, reply, BannerPolicy::Always)?;
            mark_succeeded(&store);
            Ok(created.item)
        })
        .await?;

        self.store.apply(DomainEvent::TaskAdded(task.clone()));
        Ok(task)
    }

    pub async fn remove_task(&self, list_id: &str, task_id: &str) -> Result<(), Rejected> {
        let scope = EntityScope::enter(
            &self.store,
            EntityKey::Task {
                list_id: list_id.to_string(),
                task_id: task_id.to_string(),
            },
        );

        let api = Arc::clone(&self.tasks);
        let store = self.store.clone();
        run_operation(&self.store, "tasks/remove", || async move {
            let reply = api.delete_task(list_id, task_id).await?;
            settle(&store, reply, BannerPolicy::Always)?;
            mark_succeeded(&store);
            Ok(())
        })
        .await?;

        scope.resolve(EntityStatus::Idle);
        self.store.apply(DomainEvent::TaskRemoved {
            list_id: list_id.to_string(),
            task_id: task_id.to_string(),
        });
        Ok(())
    }
}
