use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, Page};
use crate::error::RepoError;

/// Blog post persistence. Implementations own identity assignment order
/// (insertion order for listings) but no business logic.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError>;

    /// Fetch one page of posts in insertion order, with the total count.
    async fn find_page(&self, page: u64, size: u64) -> Result<Page<BlogPost>, RepoError>;

    /// Save a post (insert or update on ID).
    async fn save(&self, post: BlogPost) -> Result<BlogPost, RepoError>;

    /// Check whether a post with this ID exists.
    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepoError>;

    /// Delete a post by its ID.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError>;
}
