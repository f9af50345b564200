use std::sync::Arc;

use blog_core::domain::{Blog, BlogPatch, NewBlog};
use blog_core::ports::{BaseRepository, BlogRepository};
use blog_core::{BlogStore, DomainError};
use chrono::{Duration, Utc};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use crate::database::entity::blog;
use crate::database::postgres_repo::PostgresBlogRepository;

fn row(id: i32, title: &str, content: &str) -> blog::Model {
    let now = Utc::now();
    blog::Model {
        id,
        title: title.to_owned(),
        content: content.to_owned(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_blog_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row(7, "Test Blog", "Content")]])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);

    let result: Option<Blog> = repo.find_by_id(7).await.unwrap();

    let blog = result.expect("blog should be found");
    assert_eq!(blog.title, "Test Blog");
    assert_eq!(blog.id, 7);
}

#[tokio::test]
async fn test_find_all_maps_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row(1, "A", "B"), row(2, "C", "D")]])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    let blogs = repo.find_all().await.unwrap();

    assert_eq!(blogs.len(), 2);
    assert_eq!(blogs[1].title, "C");
}

#[tokio::test]
async fn test_delete_all_reports_rows_affected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 3,
        }])
        .into_connection();

    let repo = PostgresBlogRepository::new(db);
    assert_eq!(repo.delete_all().await.unwrap(), 3);
}

#[tokio::test]
async fn test_store_update_merges_patch() {
    let original = row(4, "A", "B");
    let mut updated = original.clone();
    updated.title = "C".to_owned();
    updated.updated_at = (Utc::now() + Duration::seconds(1)).into();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![original], vec![updated]])
        .into_connection();

    let store = BlogStore::new(Arc::new(PostgresBlogRepository::new(db)));
    let patch = BlogPatch::new(Some("C".to_owned()), None).unwrap();
    let blog = store.update(4, patch).await.unwrap();

    assert_eq!(blog.title, "C");
    assert_eq!(blog.content, "B");
}

#[tokio::test]
async fn test_store_get_missing_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<blog::Model>::new()])
        .into_connection();

    let store = BlogStore::new(Arc::new(PostgresBlogRepository::new(db)));

    assert!(matches!(
        store.get_by_id(99).await,
        Err(DomainError::NotFound { id: 99, .. })
    ));
}

#[tokio::test]
async fn test_store_insert_returns_assigned_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row(12, "A", "B")]])
        .into_connection();

    let store = BlogStore::new(Arc::new(PostgresBlogRepository::new(db)));
    let blog = store
        .insert(NewBlog::new("A".to_owned(), "B".to_owned()).unwrap())
        .await
        .unwrap();

    assert_eq!(blog.id, 12);
    assert_eq!(blog.created_at, blog.updated_at);
}

#[test]
fn test_db_errors_are_classified() {
    use blog_core::RepoError;
    use sea_orm::{ConnAcquireErr, DbErr, RuntimeErr};

    use crate::database::postgres_base::map_db_err;

    assert!(matches!(
        map_db_err(DbErr::Conn(RuntimeErr::Internal("connection refused".into()))),
        RepoError::Connection(msg) if msg.contains("connection refused")
    ));
    assert!(matches!(
        map_db_err(DbErr::ConnectionAcquire(ConnAcquireErr::Timeout)),
        RepoError::Connection(_)
    ));
    assert!(matches!(map_db_err(DbErr::RecordNotUpdated), RepoError::NotFound));
    assert!(matches!(
        map_db_err(DbErr::Custom("duplicate key value".into())),
        RepoError::Constraint(_)
    ));
    assert!(matches!(
        map_db_err(DbErr::Custom("syntax error".into())),
        RepoError::Query(_)
    ));
}
