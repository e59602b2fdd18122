use std::sync::Arc;

use taskdeck_core::{EntityStatus, FilterValue, UpdateTodolistTitle};
use tracing::debug;

use crate::app_core::{AppCommand, AppStore, DomainEvent};
use crate::domain::{AppState, EntityKey};
use crate::errors::Rejected;
use crate::http::HttpApi;
use crate::ports::{AuthApi, TasksApi, TodolistsApi};

/// Entry point of the state layer: owns the store and the transport ports and
/// runs every entity operation through the orchestrator.
pub struct AppKernel<T, K, A> {
    pub store: AppStore,
    pub(crate) todolists: Arc<T>,
    pub(crate) tasks: Arc<K>,
    pub(crate) auth: Arc<A>,
}

pub type HttpKernel = AppKernel<HttpApi, HttpApi, HttpApi>;

impl HttpKernel {
    pub fn over_http(store: AppStore, api: HttpApi) -> Self {
        Self::new(store, api.clone(), api.clone(), api)
    }
}

impl<T, K, A> AppKernel<T, K, A>
where
    T: TodolistsApi,
    K: TasksApi,
    A: AuthApi,
{
    pub fn new(store: AppStore, todolists: T, tasks: K, auth: A) -> Self {
        Self {
            store,
            todolists: Arc::new(todolists),
            tasks: Arc::new(tasks),
            auth: Arc::new(auth),
        }
    }

    pub fn state(&self) -> AppState {
        self.store.state()
    }

    pub async fn dispatch(&self, cmd: AppCommand) -> Result<(), Rejected> {
        debug!(?cmd, "dispatch");
        match cmd {
            AppCommand::InitializeApp => self.initialize_app().await.map(drop),
            AppCommand::Login(params) => self.login(params).await,
            AppCommand::Logout => self.logout().await,

            AppCommand::FetchTodolists => self.fetch_todolists().await.map(drop),
            AppCommand::AddTodolist { title } => self.add_todolist(&title).await.map(drop),
            AppCommand::RemoveTodolist(id) => self.remove_todolist(&id).await,
            AppCommand::ChangeTodolistTitle { id, title } => self
                .change_todolist_title(UpdateTodolistTitle { id, title })
                .await
                .map(drop),
            AppCommand::ChangeTodolistFilter { id, filter } => {
                self.change_todolist_filter(&id, filter);
                Ok(())
            }

            AppCommand::FetchTasks(list_id) => self.fetch_tasks(&list_id).await.map(drop),
            AppCommand::AddTask { list_id, title } => {
                self.add_task(&list_id, &title).await.map(drop)
            }
            AppCommand::RemoveTask { list_id, task_id } => {
                self.remove_task(&list_id, &task_id).await
            }

            AppCommand::DismissError => {
                self.set_app_error(None);
                Ok(())
            }
        }
    }

    pub fn change_todolist_filter(&self, id: &str, filter: FilterValue) {
        self.store.apply(DomainEvent::TodolistFilterChanged {
            id: id.to_string(),
            filter,
        });
    }

    pub fn change_todolist_entity_status(&self, id: &str, status: EntityStatus) {
        self.store.apply(DomainEvent::EntityStatusChanged {
            key: EntityKey::Todolist(id.to_string()),
            status,
        });
    }

    pub fn set_app_error(&self, error: Option<String>) {
        self.store.apply(DomainEvent::AppErrorSet(error));
    }
}
