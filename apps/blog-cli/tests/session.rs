//! Scripted management sessions against a live API server.

use std::io::Cursor;
use std::net::TcpListener;

use api_server::state::AppState;
use blog_cli::manage::{Action, Session};
use blog_client::{BlogClient, CreateBlogRequest};

fn spawn_app() -> BlogClient {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let addr = listener.local_addr().unwrap();

    let server = api_server::run(listener, AppState::in_memory()).expect("Failed to start server");
    tokio::spawn(server);

    BlogClient::new(&format!("http://{addr}"))
}

#[tokio::test]
async fn create_edit_and_delete_update_the_local_board() {
    let client = spawn_app();
    let script = "new\nFirst\nHello\nnew\nSecond\nWorld\nedit 1\n\nChanged\ndelete 2\ny\nquit\n";

    let mut session = Session::start(client.clone(), Cursor::new(script.to_string()), Vec::new())
        .await
        .unwrap();
    session.run().await.unwrap();

    let posts = session.board().posts().to_vec();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 1);
    assert_eq!(posts[0].title, "First");
    assert_eq!(posts[0].content, "Changed");

    let output = String::from_utf8(session.into_output()).unwrap();
    assert!(output.contains("Blog added successfully! (id 1)"));
    assert!(output.contains("Blog updated successfully!"));
    assert!(output.contains("Deleted blog 2."));

    let server_side = client.list().await.unwrap();
    assert_eq!(server_side.count, 1);
}

#[tokio::test]
async fn declined_clear_keeps_everything() {
    let client = spawn_app();
    for title in ["a", "b"] {
        client
            .create(&CreateBlogRequest {
                title: title.to_string(),
                content: "x".to_string(),
            })
            .await
            .unwrap();
    }

    let mut session = Session::start(client.clone(), Cursor::new("clear\nn\n".to_string()), Vec::new())
        .await
        .unwrap();
    session.run().await.unwrap();

    assert_eq!(session.board().len(), 2);
    assert_eq!(client.list().await.unwrap().count, 2);
    assert!(String::from_utf8(session.into_output()).unwrap().contains("Cancelled."));
}

#[tokio::test]
async fn board_drifts_until_refresh() {
    let client = spawn_app();

    let mut session = Session::start(client.clone(), Cursor::new(String::new()), Vec::new())
        .await
        .unwrap();
    assert!(session.board().is_empty());

    // Another client writes behind the session's back.
    client
        .create(&CreateBlogRequest {
            title: "elsewhere".to_string(),
            content: "x".to_string(),
        })
        .await
        .unwrap();

    session.execute(Action::List).await.unwrap();
    assert!(session.board().is_empty());

    session.execute(Action::Refresh).await.unwrap();
    assert_eq!(session.board().len(), 1);
    assert_eq!(session.board().posts()[0].title, "elsewhere");
}
