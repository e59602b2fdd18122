#![allow(dead_code)]

use std::collections::VecDeque;
use std::ops::Deref;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use taskdeck_app_core::{
    reduce, AppKernel, AppState, AppStore, AuthApi, DomainEvent, TasksApi, TodolistsApi,
    TransportError,
};
use taskdeck_core::{
    AuthMe, CreatedItem, Empty, FieldError, LoginData, LoginParams, RequestStatus, ServerFailure,
    ServerReply, Task, TaskPriority, TaskStatus, Todolist, UpdateTodolistTitle,
};
use tokio::sync::{broadcast, oneshot};

pub type Reply<D> = Result<ServerReply<D>, TransportError>;

/// Replies handed out in order; a call with nothing scripted is a test bug.
pub struct Script<D>(Mutex<VecDeque<Reply<D>>>);

impl<D> Default for Script<D> {
    fn default() -> Self {
        Self(Mutex::new(VecDeque::new()))
    }
}

impl<D> Script<D> {
    pub fn push(&self, reply: Reply<D>) {
        self.0.lock().unwrap().push_back(reply);
    }

    fn next(&self, call: &str) -> Reply<D> {
        self.0
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted call to {call}"))
    }
}

#[derive(Default)]
pub struct FakeApi {
    pub fetch_todolists: Script<Vec<Todolist>>,
    pub create_todolist: Script<CreatedItem<Todolist>>,
    pub delete_todolist: Script<Empty>,
    pub update_todolist_title: Script<Empty>,
    pub fetch_tasks: Script<Vec<Task>>,
    pub create_task: Script<CreatedItem<Task>>,
    pub delete_task: Script<Empty>,
    pub login: Script<LoginData>,
    pub logout: Script<Empty>,
    pub me: Script<AuthMe>,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl FakeApi {
    /// The next transport call waits until the returned sender fires.
    pub fn hold_next_call(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.lock().unwrap() = Some(rx);
        tx
    }

    async fn pass_gate(&self) {
        let gate = self.gate.lock().unwrap().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
    }
}

#[derive(Clone, Default)]
pub struct Fake(pub Arc<FakeApi>);

impl Deref for Fake {
    type Target = FakeApi;

    fn deref(&self) -> &FakeApi {
        &self.0
    }
}

#[async_trait]
impl TodolistsApi for Fake {
    async fn fetch_todolists(&self) -> Reply<Vec<Todolist>> {
        self.pass_gate().await;
        self.0.fetch_todolists.next("fetch_todolists")
    }

    async fn create_todolist(&self, _title: &str) -> Reply<CreatedItem<Todolist>> {
        self.pass_gate().await;
        self.0.create_todolist.next("create_todolist")
    }

    async fn delete_todolist(&self, _id: &str) -> Reply<Empty> {
        self.pass_gate().await;
        self.0.delete_todolist.next("delete_todolist")
    }

    async fn update_todolist_title(&self, _arg: &UpdateTodolistTitle) -> Reply<Empty> {
        self.pass_gate().await;
        self.0.update_todolist_title.next("update_todolist_title")
    }
}

#[async_trait]
impl TasksApi for Fake {
    async fn fetch_tasks(&self, _list_id: &str) -> Reply<Vec<Task>> {
        self.pass_gate().await;
        self.0.fetch_tasks.next("fetch_tasks")
    }

    async fn create_task(&self, _list_id: &str, _title: &str) -> Reply<CreatedItem<Task>> {
        self.pass_gate().await;
        self.0.create_task.next("create_task")
    }

    async fn delete_task(&self, _list_id: &str, _task_id: &str) -> Reply<Empty> {
        self.pass_gate().await;
        self.0.delete_task.next("delete_task")
    }
}

#[async_trait]
impl AuthApi for Fake {
    async fn login(&self, _params: &LoginParams) -> Reply<LoginData> {
        self.pass_gate().await;
        self.0.login.next("login")
    }

    async fn logout(&self) -> Reply<Empty> {
        self.pass_gate().await;
        self.0.logout.next("logout")
    }

    async fn me(&self) -> Reply<AuthMe> {
        self.pass_gate().await;
        self.0.me.next("me")
    }
}

pub type FakeKernel = AppKernel<Fake, Fake, Fake>;

pub fn kernel(fake: &Fake) -> FakeKernel {
    AppKernel::new(AppStore::default(), fake.clone(), fake.clone(), fake.clone())
}

// --- Data helpers ---

pub fn list(id: &str, title: &str) -> Todolist {
    Todolist {
        id: id.to_string(),
        title: title.to_string(),
        added_date: None,
        order: 0,
    }
}

pub fn task(list_id: &str, id: &str) -> Task {
    Task {
        id: id.to_string(),
        todo_list_id: list_id.to_string(),
        title: format!("task {id}"),
        description: None,
        status: TaskStatus::New,
        priority: TaskPriority::Low,
        order: 0,
        added_date: None,
        start_date: None,
        deadline: None,
    }
}

pub fn me() -> AuthMe {
    AuthMe {
        id: 2,
        email: "free@samuraijs.com".into(),
        login: "free".into(),
    }
}

pub fn login_params() -> LoginParams {
    LoginParams {
        email: "free@samuraijs.com".into(),
        password: "freefree".into(),
        remember_me: false,
        captcha: None,
    }
}

pub fn ok<D>(data: D) -> Reply<D> {
    Ok(ServerReply::Success(data))
}

pub fn failed<D>(messages: &[&str]) -> Reply<D> {
    Ok(ServerReply::Failure(ServerFailure::new(
        messages.iter().map(|m| m.to_string()).collect(),
    )))
}

pub fn failed_with_fields<D>(messages: &[&str], fields: &[(&str, &str)]) -> Reply<D> {
    let failure = ServerFailure::new(messages.iter().map(|m| m.to_string()).collect())
        .with_field_errors(fields.iter().map(|(f, e)| FieldError::new(*f, *e)).collect());
    Ok(ServerReply::Failure(failure))
}

pub fn timeout<D>() -> Reply<D> {
    Err(TransportError::network("timeout"))
}

// --- Event helpers ---

pub fn drain(rx: &mut broadcast::Receiver<DomainEvent>) -> Vec<DomainEvent> {
    let mut out = Vec::new();
    while let Ok(ev) = rx.try_recv() {
        out.push(ev);
    }
    out
}

/// Global status after each event, with repeats collapsed. Replays the events
/// through the reducer starting from `initial`.
pub fn status_trail(initial: &AppState, events: &[DomainEvent]) -> Vec<RequestStatus> {
    let mut state = initial.clone();
    let mut last = state.app.status;
    let mut trail = Vec::new();
    for ev in events {
        state = reduce(state, ev.clone());
        if state.app.status != last {
            last = state.app.status;
            trail.push(last);
        }
    }
    trail
}
