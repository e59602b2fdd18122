use taskdeck_core::RequestStatus;

use crate::domain::{AppState, EntityKey};

use super::events::DomainEvent;

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::OperationStarted => {
            state.app.in_flight += 1;
            state.app.status = RequestStatus::Loading;
        }

        // The last operation to finish resets to idle; earlier ones hand the
        // flag back to whoever is still in flight.
        DomainEvent::OperationFinished => {
            state.app.in_flight = state.app.in_flight.saturating_sub(1);
            state.app.status = if state.app.in_flight == 0 {
                RequestStatus::Idle
            } else {
                RequestStatus::Loading
            };
        }

        DomainEvent::AppStatusChanged(status) => state.app.status = status,
        DomainEvent::AppErrorSet(error) => state.app.error = error,
        DomainEvent::AppInitialized => state.app.is_initialized = true,

        DomainEvent::LoggedInChanged(v) => state.auth.is_logged_in = v,

        DomainEvent::TodolistsFetched(lists) => {
            state
                .tasks
                .reset_buckets(lists.iter().map(|l| l.id.as_str()));
            state.todolists.replace_all(lists);
        }
        DomainEvent::TodolistAdded(list) => {
            state.tasks.open_bucket(&list.id);
            state.todolists.insert_front(list);
        }
        DomainEvent::TodolistRemoved(id) => {
            state.todolists.remove(&id);
            state.tasks.drop_bucket(&id);
        }
        DomainEvent::TodolistTitleChanged { id, title } => state.todolists.rename(&id, title),
        DomainEvent::TodolistFilterChanged { id, filter } => {
            state.todolists.set_filter(&id, filter)
        }

        DomainEvent::TasksFetched { list_id, tasks } => {
            state.tasks.replace_bucket(&list_id, tasks)
        }
        DomainEvent::TaskAdded(task) => state.tasks.insert_front(task),
        DomainEvent::TaskRemoved { list_id, task_id } => {
            state.tasks.remove(&list_id, &task_id);
        }

        DomainEvent::EntityStatusChanged { key, status } => match key {
            EntityKey::Todolist(id) => state.todolists.set_entity_status(&id, status),
            EntityKey::Task { list_id, task_id } => {
                state.tasks.set_entity_status(&list_id, &task_id, status)
            }
        },

        DomainEvent::EntitiesCleared => {
            state.todolists.clear();
            state.tasks.clear();
        }
    }
    state
}
