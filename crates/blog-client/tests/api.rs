//! Full CRUD lifecycle against a live API server.
//!
//! Starts the server on a random port backed by the in-memory store, then
//! drives every client operation over real HTTP.

use std::net::TcpListener;

use api_server::state::AppState;
use blog_client::{BlogClient, ClientError, CreateBlogRequest, UpdateBlogRequest};

fn spawn_app() -> BlogClient {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let addr = listener.local_addr().unwrap();

    let server = api_server::run(listener, AppState::in_memory()).expect("Failed to start server");
    tokio::spawn(server);

    BlogClient::new(&format!("http://{addr}"))
}

fn create(title: &str, content: &str) -> CreateBlogRequest {
    CreateBlogRequest {
        title: title.to_string(),
        content: content.to_string(),
    }
}

#[tokio::test]
async fn crud_lifecycle() {
    let client = spawn_app();

    let list = client.list().await.unwrap();
    assert_eq!(list.count, 0);
    assert!(list.updated_at.is_none());

    let created = client.create(&create("A", "B")).await.unwrap();
    assert_eq!(created.status_code, 201);
    assert!(created.data.id > 0);
    assert_eq!(created.data.title, "A");
    let id = created.data.id;

    let fetched = client.get(id).await.unwrap();
    assert_eq!(fetched.data.title, "A");
    assert_eq!(fetched.data.content, "B");

    let patch = UpdateBlogRequest {
        title: Some("C".to_string()),
        content: None,
    };
    let updated = client.update(id, &patch).await.unwrap();
    assert_eq!(updated.data.title, "C");
    assert_eq!(updated.data.content, "B");

    let deleted = client.delete(id).await.unwrap();
    assert_eq!(deleted.data.id, id);

    let err = client.get(id).await.unwrap_err();
    assert!(err.is_not_found(), "expected 404, got {err:?}");
}

#[tokio::test]
async fn non_success_status_carries_body() {
    let client = spawn_app();

    let err = client.create(&create("", "B")).await.unwrap_err();
    match err {
        ClientError::Http { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("title should not be empty"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn delete_all_empties_the_store() {
    let client = spawn_app();

    for i in 0..3 {
        client.create(&create(&format!("t{i}"), "c")).await.unwrap();
    }

    let list = client.list().await.unwrap();
    assert_eq!(list.count, 3);
    assert!(list.updated_at.is_some());

    let removed = client.delete_all().await.unwrap();
    assert_eq!(removed.count, 3);
    assert_eq!(client.list().await.unwrap().count, 0);
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = BlogClient::new(&format!("http://127.0.0.1:{port}"));

    assert!(matches!(
        client.list().await,
        Err(ClientError::Transport(_))
    ));
}
