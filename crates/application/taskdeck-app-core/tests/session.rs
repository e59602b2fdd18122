mod common;

use common::*;
use taskdeck_app_core::{DomainEvent, LoginForm, Rejected};
use taskdeck_core::{Empty, LoginData, RequestStatus};

#[tokio::test]
async fn login_success_marks_the_session() {
    let fake = Fake::default();
    fake.login.push(ok(LoginData { user_id: 7 }));
    let kernel = kernel(&fake);

    kernel.login(login_params()).await.unwrap();

    assert!(kernel.state().auth.is_logged_in);
}

#[tokio::test]
async fn field_errors_go_to_the_form_and_skip_the_banner() {
    let fake = Fake::default();
    fake.login.push(failed_with_fields(
        &["Incorrect Email or Password"],
        &[("email", "Invalid email")],
    ));
    let kernel = kernel(&fake);
    let mut form = LoginForm::new("free@samuraijs.com", "freefree", false);

    let rejection = kernel.login(form.params()).await.unwrap_err();
    assert!(form.apply_rejection(&rejection));

    let state = kernel.state();
    assert_eq!(state.app.error, None);
    assert_eq!(state.app.status, RequestStatus::Idle);
    assert!(!state.auth.is_logged_in);
    assert_eq!(form.error("email"), Some("Invalid email"));
}

#[tokio::test]
async fn login_failure_without_field_errors_uses_the_banner() {
    let fake = Fake::default();
    fake.login.push(failed(&["Incorrect Email or Password"]));
    let kernel = kernel(&fake);
    let mut form = LoginForm::new("free@samuraijs.com", "freefree", false);

    let rejection = kernel.login(form.params()).await.unwrap_err();

    assert!(!form.apply_rejection(&rejection));
    assert_eq!(
        kernel.state().app.error.as_deref(),
        Some("Incorrect Email or Password")
    );
}

#[tokio::test]
async fn logout_clears_every_collection_before_succeeding() {
    let fake = Fake::default();
    fake.me.push(ok(me()));
    fake.fetch_todolists
        .push(ok(vec![list("a", "A"), list("b", "B")]));
    fake.fetch_tasks.push(ok(vec![task("a", "t1")]));
    fake.logout.push(ok(Empty {}));
    let kernel = kernel(&fake);
    kernel.initialize_app().await.unwrap();
    kernel.fetch_todolists().await.unwrap();
    kernel.fetch_tasks("a").await.unwrap();
    let mut rx = kernel.store.subscribe();

    kernel.logout().await.unwrap();

    let state = kernel.state();
    assert!(state.todolists.is_empty());
    assert!(state.tasks.is_empty());
    assert!(!state.auth.is_logged_in);

    let events = drain(&mut rx);
    let cleared = events
        .iter()
        .position(|e| *e == DomainEvent::EntitiesCleared)
        .expect("clear broadcast");
    let succeeded = events
        .iter()
        .position(|e| *e == DomainEvent::AppStatusChanged(RequestStatus::Succeeded))
        .expect("succeeded");
    assert!(cleared < succeeded);
    assert_eq!(
        events
            .iter()
            .filter(|e| **e == DomainEvent::EntitiesCleared)
            .count(),
        1
    );
}

#[tokio::test]
async fn failed_logout_keeps_the_session_and_data() {
    let fake = Fake::default();
    fake.login.push(ok(LoginData { user_id: 7 }));
    fake.fetch_todolists.push(ok(vec![list("a", "A")]));
    fake.logout.push(timeout());
    let kernel = kernel(&fake);
    kernel.login(login_params()).await.unwrap();
    kernel.fetch_todolists().await.unwrap();

    assert_eq!(kernel.logout().await, Err(Rejected::Network));

    let state = kernel.state();
    assert!(state.auth.is_logged_in);
    assert_eq!(state.todolists.len(), 1);
    assert_eq!(state.app.error.as_deref(), Some("timeout"));
}

#[tokio::test]
async fn session_restore_flags_initialized_as_its_last_step() {
    let fake = Fake::default();
    fake.me.push(ok(me()));
    let kernel = kernel(&fake);
    let mut rx = kernel.store.subscribe();

    let who = kernel.initialize_app().await.unwrap();

    assert_eq!(who.login, "free");
    let state = kernel.state();
    assert!(state.app.is_initialized);
    assert!(state.auth.is_logged_in);
    let events = drain(&mut rx);
    assert_eq!(events.last(), Some(&DomainEvent::AppInitialized));
    assert_eq!(
        events
            .iter()
            .filter(|e| **e == DomainEvent::AppInitialized)
            .count(),
        1
    );
}

#[tokio::test]
async fn anonymous_visit_is_not_a_banner_error() {
    let fake = Fake::default();
    fake.me.push(failed(&["You are not authorized"]));
    let kernel = kernel(&fake);

    let res = kernel.initialize_app().await;

    assert!(matches!(res, Err(Rejected::Server(_))));
    let state = kernel.state();
    assert!(state.app.is_initialized);
    assert!(!state.auth.is_logged_in);
    assert_eq!(state.app.error, None);
}

#[tokio::test]
async fn session_restore_network_failure_still_initializes() {
    let fake = Fake::default();
    fake.me.push(timeout());
    let kernel = kernel(&fake);

    assert_eq!(kernel.initialize_app().await, Err(Rejected::Network));

    let state = kernel.state();
    assert!(state.app.is_initialized);
    assert_eq!(state.app.error.as_deref(), Some("timeout"));
}

#[tokio::test]
async fn dismissing_the_banner_clears_it() {
    let fake = Fake::default();
    fake.create_todolist.push(failed(&["Title required"]));
    let kernel = kernel(&fake);
    let _ = kernel.add_todolist("").await;

    kernel
        .dispatch(taskdeck_app_core::AppCommand::DismissError)
        .await
        .unwrap();

    assert_eq!(kernel.state().app.error, None);
}

#[tokio::test]
async fn reading_the_identity_does_not_reinitialize() {
    let fake = Fake::default();
    fake.me.push(ok(me()));
    fake.me.push(ok(me()));
    let kernel = kernel(&fake);
    kernel.initialize_app().await.unwrap();
    let mut rx = kernel.store.subscribe();

    let who = kernel.fetch_me().await.unwrap();

    assert_eq!(who.login, "free");
    let events = drain(&mut rx);
    assert!(!events.contains(&DomainEvent::AppInitialized));
    assert_eq!(kernel.state().app.status, RequestStatus::Idle);
}

#[tokio::test]
async fn expired_session_is_marked_logged_out_without_a_banner() {
    let fake = Fake::default();
    fake.me.push(ok(me()));
    fake.me.push(failed(&["You are not authorized"]));
    let kernel = kernel(&fake);
    kernel.initialize_app().await.unwrap();

    assert!(matches!(kernel.fetch_me().await, Err(Rejected::Server(_))));

    let state = kernel.state();
    assert!(!state.auth.is_logged_in);
    assert_eq!(state.app.error, None);
}
