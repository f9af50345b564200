//! The management view's local copy of the blog list.
//!
//! Fetched once, then patched after each successful mutation instead of
//! refetching. Nothing keeps it in sync with other clients; call
//! [`Board::replace`] to resynchronize.

use blog_client::BlogResponse;

#[derive(Debug, Default, Clone)]
pub struct Board {
    posts: Vec<BlogResponse>,
}

impl Board {
    pub fn new(posts: Vec<BlogResponse>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[BlogResponse] {
        &self.posts
    }

    pub fn get(&self, id: i32) -> Option<&BlogResponse> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Discard the local copy in favour of a fresh server listing.
    pub fn replace(&mut self, posts: Vec<BlogResponse>) {
        self.posts = posts;
    }

    /// Newest first, the way the list shows a fresh post.
    pub fn apply_created(&mut self, blog: BlogResponse) {
        self.posts.insert(0, blog);
    }

    /// Replace in place. A post missing from the local copy is left out.
    pub fn apply_updated(&mut self, blog: BlogResponse) {
        if let Some(slot) = self.posts.iter_mut().find(|p| p.id == blog.id) {
            *slot = blog;
        }
    }

    pub fn apply_deleted(&mut self, id: i32) {
        self.posts.retain(|p| p.id != id);
    }

    pub fn apply_cleared(&mut self) {
        self.posts.clear();
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn post(id: i32, title: &str) -> BlogResponse {
        let now = Utc::now();
        BlogResponse {
            id,
            title: title.to_string(),
            content: "body".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn created_posts_are_prepended() {
        let mut board = Board::new(vec![post(1, "old")]);
        board.apply_created(post(2, "new"));

        let ids: Vec<_> = board.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, [2, 1]);
    }

    #[test]
    fn updates_replace_in_place() {
        let mut board = Board::new(vec![post(1, "a"), post(2, "b")]);
        board.apply_updated(post(2, "B"));
        board.apply_updated(post(9, "ghost"));

        assert_eq!(board.len(), 2);
        assert_eq!(board.get(2).unwrap().title, "B");
        assert!(board.get(9).is_none());
    }

    #[test]
    fn deletes_remove_locally() {
        let mut board = Board::new(vec![post(1, "a"), post(2, "b")]);
        board.apply_deleted(1);
        assert!(board.get(1).is_none());

        board.apply_cleared();
        assert!(board.is_empty());
    }
}
