//! Blog lifecycle rules exercised through `BlogStore` over the in-memory repository.

use std::sync::Arc;

use blog_core::domain::{BlogPatch, NewBlog};
use blog_core::{BlogStore, DomainError};
use blog_infra::InMemoryBlogRepository;

fn store() -> BlogStore {
    BlogStore::new(Arc::new(InMemoryBlogRepository::new()))
}

fn new_blog(title: &str, content: &str) -> NewBlog {
    NewBlog::new(title.to_string(), content.to_string()).unwrap()
}

#[tokio::test]
async fn create_then_get_returns_same_record() {
    let store = store();
    let created = store.insert(new_blog("A", "B")).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = store.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn partial_update_changes_only_supplied_fields() {
    let store = store();
    let created = store.insert(new_blog("A", "B")).await.unwrap();

    let patch = BlogPatch::new(None, Some("D".to_string())).unwrap();
    let updated = store.update(created.id, patch).await.unwrap();

    assert_eq!(updated.title, "A");
    assert_eq!(updated.content, "D");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    let again = store.update(created.id, BlogPatch::default()).await.unwrap();
    assert!(again.updated_at > updated.updated_at);
}

#[tokio::test]
async fn missing_ids_fail_with_not_found() {
    let store = store();

    assert!(matches!(
        store.get_by_id(42).await,
        Err(DomainError::NotFound { id: 42, .. })
    ));
    assert!(matches!(
        store.update(42, BlogPatch::default()).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        store.delete_by_id(42).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn delete_by_id_removes_permanently() {
    let store = store();
    let created = store.insert(new_blog("A", "B")).await.unwrap();

    store.delete_by_id(created.id).await.unwrap();

    assert!(store.list().await.unwrap().is_empty());
    assert!(matches!(
        store.delete_by_id(created.id).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn delete_all_returns_prior_count() {
    let store = store();
    assert_eq!(store.delete_all().await.unwrap(), 0);

    for i in 0..3 {
        store.insert(new_blog(&format!("t{i}"), "c")).await.unwrap();
    }

    assert_eq!(store.delete_all().await.unwrap(), 3);
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_returns_records_in_insertion_order() {
    let store = store();
    assert!(store.list().await.unwrap().is_empty());

    store.insert(new_blog("first", "x")).await.unwrap();
    store.insert(new_blog("second", "y")).await.unwrap();

    let titles: Vec<_> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.title)
        .collect();
    assert_eq!(titles, ["first", "second"]);
}
