use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use taskdeck_core::{LoginParams, ServerReply};
use taskdeck_infra::{ApiClient, ApiError, ApiErrorKind, ApiSettings};

async fn start_mock_server() -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let app = Router::new()
        .route(
            "/todo-lists",
            get(|| async {
                Json(json!([
                    { "id": "l1", "title": "what to learn", "addedDate": "2019-07-30T12:24:15.063", "order": 0 },
                    { "id": "l2", "title": "what to buy", "addedDate": null, "order": -1 }
                ]))
            })
            .post(|Json(body): Json<Value>| async move {
                if body["title"].as_str().unwrap_or_default().is_empty() {
                    Json(json!({
                        "resultCode": 1,
                        "messages": ["Title required"],
                        "fieldsError": [],
                        "data": {}
                    }))
                } else {
                    Json(json!({
                        "resultCode": 0,
                        "messages": [],
                        "fieldsError": [],
                        "data": { "item": { "id": "new", "title": body["title"], "order": -2 } }
                    }))
                }
            }),
        )
        .route(
            "/todo-lists/:id",
            delete(|| async { Json(json!({ "resultCode": 0, "messages": [], "data": {} })) }),
        )
        .route(
            "/todo-lists/:id/tasks",
            get(|| async {
                Json(json!({ "items": [], "totalCount": 0, "error": "list not found" }))
            }),
        )
        .route(
            "/auth/me",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "boom" })),
                )
            }),
        )
        .route(
            "/auth/login",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let key_ok = headers
                    .get("API-KEY")
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|v| v == "secret");
                if key_ok && body["rememberMe"] == json!(true) {
                    Json(json!({ "resultCode": 0, "messages": [], "data": { "userId": 7 } }))
                } else {
                    Json(json!({
                        "resultCode": 1,
                        "messages": ["Incorrect Email or Password"],
                        "fieldsError": [{ "field": "email", "error": "Invalid email" }],
                        "data": {}
                    }))
                }
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, handle)
}

fn client_for(addr: SocketAddr, api_key: Option<&str>) -> ApiClient {
    let settings = ApiSettings::default()
        .with_base_url(format!("http://{addr}"))
        .with_api_key(api_key.map(str::to_string));
    ApiClient::new(&settings).unwrap()
}

#[tokio::test]
async fn bare_list_is_lifted_into_a_successful_reply() {
    let (addr, server) = start_mock_server().await;
    let client = client_for(addr, None);

    match client.fetch_todolists().await.unwrap() {
        ServerReply::Success(lists) => {
            assert_eq!(lists.len(), 2);
            assert_eq!(lists[0].id, "l1");
        }
        other => panic!("expected success, got {other:?}"),
    }
    server.abort();
}

#[tokio::test]
async fn create_reports_success_and_failure_envelopes() {
    let (addr, server) = start_mock_server().await;
    let client = client_for(addr, None);

    match client.create_todolist("Groceries").await.unwrap() {
        ServerReply::Success(created) => assert_eq!(created.item.title, "Groceries"),
        other => panic!("expected success, got {other:?}"),
    }

    match client.create_todolist("").await.unwrap() {
        ServerReply::Failure(f) => assert_eq!(f.first_message(), Some("Title required")),
        other => panic!("expected failure, got {other:?}"),
    }

    assert!(client.delete_todolist("l1").await.unwrap().is_success());
    server.abort();
}

#[tokio::test]
async fn task_listing_error_field_becomes_a_failure() {
    let (addr, server) = start_mock_server().await;
    let client = client_for(addr, None);

    match client.fetch_tasks("l1").await.unwrap() {
        ServerReply::Failure(f) => assert_eq!(f.messages, vec!["list not found".to_string()]),
        other => panic!("expected failure, got {other:?}"),
    }
    server.abort();
}

#[tokio::test]
async fn error_status_keeps_the_response_body() {
    let (addr, server) = start_mock_server().await;
    let client = client_for(addr, None);

    let err = client.me().await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Response);
    assert_eq!(err.status(), Some(500));
    assert_eq!(
        err.response_body().and_then(|b| b["message"].as_str()),
        Some("boom")
    );
    server.abort();
}

#[tokio::test]
async fn api_key_header_is_sent_with_every_request() {
    let (addr, server) = start_mock_server().await;
    let params = LoginParams {
        email: "free@samuraijs.com".into(),
        password: "free".into(),
        remember_me: true,
        captcha: None,
    };

    let with_key = client_for(addr, Some("secret"));
    assert!(with_key.login(&params).await.unwrap().is_success());

    let without_key = client_for(addr, None);
    match without_key.login(&params).await.unwrap() {
        ServerReply::Failure(f) => {
            assert!(f.has_field_errors());
            assert_eq!(f.fields_error[0].field, "email");
        }
        other => panic!("expected failure, got {other:?}"),
    }
    server.abort();
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr, None);
    let err = client.fetch_todolists().await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Network);
    assert!(matches!(err, ApiError::Connect(_) | ApiError::Http(_)));
}
