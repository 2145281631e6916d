//! In-memory blog repository - used when no database is configured.
//!
//! Keeps posts in insertion order so pagination behaves like the
//! Postgres implementation. Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{BlogPost, Page};
use quill_core::error::RepoError;
use quill_core::ports::BlogRepository;

pub struct InMemoryBlogRepository {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_page(&self, page: u64, size: u64) -> Result<Page<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        let items = posts
            .iter()
            .skip((page.saturating_mul(size)) as usize)
            .take(size as usize)
            .cloned()
            .collect();

        Ok(Page::new(items, posts.len() as u64, page, size))
    }

    async fn save(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;
        match posts.iter_mut().find(|p| p.id == post.id) {
            Some(existing) => *existing = post.clone(),
            None => posts.push(post.clone()),
        }
        Ok(post)
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().any(|p| p.id == id))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);

        if posts.len() == before {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str) -> BlogPost {
        BlogPost::new(title.to_string(), "content".to_string(), "author".to_string())
    }

    #[tokio::test]
    async fn save_then_find() {
        let repo = InMemoryBlogRepository::new();
        let saved = repo.save(post("hello")).await.unwrap();

        let found = repo.find_by_id(saved.id).await.unwrap();
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn save_with_existing_id_replaces() {
        let repo = InMemoryBlogRepository::new();
        let mut saved = repo.save(post("hello")).await.unwrap();

        saved.title = "hello again".to_string();
        repo.save(saved.clone()).await.unwrap();

        let found = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(found.title, "hello again");

        let page = repo.find_page(0, 10).await.unwrap();
        assert_eq!(page.total, 1, "update must not duplicate the record");
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let repo = InMemoryBlogRepository::new();
        let result = repo.delete_by_id(Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn pages_preserve_insertion_order() {
        let repo = InMemoryBlogRepository::new();
        for i in 0..25 {
            repo.save(post(&format!("post {i}"))).await.unwrap();
        }

        let first = repo.find_page(0, 10).await.unwrap();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.items[0].title, "post 0");
        assert_eq!(first.total, 25);

        let last = repo.find_page(2, 10).await.unwrap();
        assert_eq!(last.items.len(), 5);
        assert_eq!(last.items[0].title, "post 20");
    }
}
