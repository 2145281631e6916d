//! Blog post orchestration: CRUD against the repository with an explicit
//! read cache, plus AI summaries.
//!
//! Cache policy, in one place so it can be tested:
//! - `get_by_id` is cache-aside: populate on miss, with a fixed TTL.
//! - `update` is write-through: the fresh record overwrites the cache entry
//!   immediately after persisting.
//! - `delete` evicts. `create` never pre-warms.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{BlogDraft, BlogPatch, BlogPost, Page};
use crate::error::{DomainError, RepoError};
use crate::ports::{BlogRepository, Cache, CacheError, Summarizer};

/// Construction-time options for [`BlogService`].
#[derive(Debug, Clone)]
pub struct BlogServiceConfig {
    /// How long cached post snapshots stay valid.
    pub cache_ttl: Duration,
}

impl Default for BlogServiceConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(600),
        }
    }
}

/// The blog service. Exclusively owns all repository and cache access;
/// safe to share across request workers via `Arc`.
pub struct BlogService {
    repo: Arc<dyn BlogRepository>,
    cache: Arc<dyn Cache>,
    summarizer: Arc<dyn Summarizer>,
    config: BlogServiceConfig,
}

impl BlogService {
    pub fn new(
        repo: Arc<dyn BlogRepository>,
        cache: Arc<dyn Cache>,
        summarizer: Arc<dyn Summarizer>,
        config: BlogServiceConfig,
    ) -> Self {
        Self {
            repo,
            cache,
            summarizer,
            config,
        }
    }

    fn cache_key(id: Uuid) -> String {
        format!("blog:{id}")
    }

    fn snapshot(post: &BlogPost) -> Result<String, CacheError> {
        serde_json::to_string(post).map_err(|e| CacheError::Serialization(e.to_string()))
    }

    /// Create a new post. Timestamps are assigned here; the cache is not
    /// pre-warmed for fresh posts.
    pub async fn create(&self, draft: BlogDraft) -> Result<BlogPost, DomainError> {
        let post = self.repo.save(BlogPost::from(draft)).await?;
        tracing::info!(id = %post.id, "Blog created");
        Ok(post)
    }

    /// Fetch a post by ID, cache-aside. A cache hit never contacts the
    /// repository; a miss populates the cache before returning.
    pub async fn get_by_id(&self, id: Uuid) -> Result<BlogPost, DomainError> {
        let key = Self::cache_key(id);

        if let Some(raw) = self.cache.get(&key).await {
            match serde_json::from_str::<BlogPost>(&raw) {
                Ok(post) => {
                    tracing::debug!(id = %id, "Cache hit");
                    return Ok(post);
                }
                Err(e) => {
                    // Unreadable entry; fall through and let the repository
                    // result overwrite it.
                    tracing::warn!(id = %id, error = %e, "Discarding undecodable cache entry");
                }
            }
        }

        let post = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })?;

        self.cache
            .set(&key, &Self::snapshot(&post)?, Some(self.config.cache_ttl))
            .await?;

        Ok(post)
    }

    /// Fetch one page of posts in insertion order. Listings are never cached.
    pub async fn get_page(&self, page: u64, size: u64) -> Result<Page<BlogPost>, DomainError> {
        Ok(self.repo.find_page(page, size).await?)
    }

    /// Merge a partial update into an existing post.
    ///
    /// Fields that are omitted, or equal to the current value, are left
    /// untouched. Only if something actually changed do we refresh
    /// `updated_at`, persist, and write the result through to the cache.
    pub async fn update(&self, id: Uuid, patch: BlogPatch) -> Result<BlogPost, DomainError> {
        let mut post = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })?;

        if !Self::apply_patch(&mut post, patch) {
            tracing::debug!(id = %id, "Update changed nothing; skipping persist");
            return Ok(post);
        }

        post.updated_at = Utc::now();
        let post = self.repo.save(post).await?;

        self.cache
            .set(
                &Self::cache_key(id),
                &Self::snapshot(&post)?,
                Some(self.config.cache_ttl),
            )
            .await?;

        tracing::info!(id = %id, "Blog updated");
        Ok(post)
    }

    /// Delete a post and evict its cache entry. Returns `true` on success;
    /// a missing ID is `NotFound`, same as the read path.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(DomainError::NotFound { id });
        }

        // A concurrent delete can win between the existence check and the
        // removal; that is still a not-found, not an infrastructure error.
        self.repo.delete_by_id(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::NotFound { id },
            other => DomainError::Repo(other),
        })?;
        self.cache.delete(&Self::cache_key(id)).await?;

        tracing::info!(id = %id, "Blog deleted");
        Ok(true)
    }

    /// Summarize a post's content via the external provider. The lookup
    /// shares `get_by_id`'s cache path, and a missing post fails before the
    /// provider is ever called.
    pub async fn summarize(&self, id: Uuid) -> Result<String, DomainError> {
        let post = self.get_by_id(id).await?;
        let summary = self.summarizer.summarize(&post.content).await?;
        Ok(summary)
    }

    /// Returns whether any field changed.
    fn apply_patch(post: &mut BlogPost, patch: BlogPatch) -> bool {
        let mut changed = false;

        if let Some(title) = patch.title {
            if title != post.title {
                post.title = title;
                changed = true;
            }
        }
        if let Some(content) = patch.content {
            if content != post.content {
                post.content = content;
                changed = true;
            }
        }
        if let Some(author) = patch.author {
            if author != post.author {
                post.author = author;
                changed = true;
            }
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::error::RepoError;
    use crate::ports::SummaryError;

    /// In-memory repository that counts calls, so tests can prove whether
    /// the cache or the repository served a read.
    #[derive(Default)]
    struct CountingRepo {
        posts: Mutex<Vec<BlogPost>>,
        find_calls: AtomicUsize,
        save_calls: AtomicUsize,
    }

    impl CountingRepo {
        fn find_count(&self) -> usize {
            self.find_calls.load(Ordering::SeqCst)
        }

        fn save_count(&self) -> usize {
            self.save_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl BlogRepository for CountingRepo {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
            self.find_calls.fetch_add(1, Ordering::SeqCst);
            let posts = self.posts.lock().unwrap();
            Ok(posts.iter().find(|p| p.id == id).cloned())
        }

        async fn find_page(&self, page: u64, size: u64) -> Result<Page<BlogPost>, RepoError> {
            let posts = self.posts.lock().unwrap();
            let items = posts
                .iter()
                .skip((page * size) as usize)
                .take(size as usize)
                .cloned()
                .collect();
            Ok(Page::new(items, posts.len() as u64, page, size))
        }

        async fn save(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
            self.save_calls.fetch_add(1, Ordering::SeqCst);
            let mut posts = self.posts.lock().unwrap();
            match posts.iter_mut().find(|p| p.id == post.id) {
                Some(existing) => *existing = post.clone(),
                None => posts.push(post.clone()),
            }
            Ok(post)
        }

        async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepoError> {
            let posts = self.posts.lock().unwrap();
            Ok(posts.iter().any(|p| p.id == id))
        }

        async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
            let mut posts = self.posts.lock().unwrap();
            let before = posts.len();
            posts.retain(|p| p.id != id);
            if posts.len() == before {
                return Err(RepoError::NotFound);
            }
            Ok(())
        }
    }

    /// Map-backed cache. TTL is recorded but never enforced; these tests
    /// exercise policy, not expiry.
    #[derive(Default)]
    struct MapCache {
        entries: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl Cache for MapCache {
        async fn get(&self, key: &str) -> Option<String> {
            self.entries.lock().unwrap().get(key).cloned()
        }

        async fn set(
            &self,
            key: &str,
            value: &str,
            _ttl: Option<Duration>,
        ) -> Result<(), CacheError> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<(), CacheError> {
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }

        async fn exists(&self, key: &str) -> bool {
            self.entries.lock().unwrap().contains_key(key)
        }
    }

    #[derive(Default)]
    struct StubSummarizer {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl Summarizer for StubSummarizer {
        async fn summarize(&self, text: &str) -> Result<String, SummaryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SummaryError::Upstream("boom".to_string()));
            }
            Ok(format!("summary of {} chars", text.len()))
        }
    }

    struct Fixture {
        repo: Arc<CountingRepo>,
        summarizer: Arc<StubSummarizer>,
        service: BlogService,
    }

    fn fixture() -> Fixture {
        fixture_with(StubSummarizer::default())
    }

    fn fixture_with(summarizer: StubSummarizer) -> Fixture {
        let repo = Arc::new(CountingRepo::default());
        let summarizer = Arc::new(summarizer);
        let service = BlogService::new(
            repo.clone(),
            Arc::new(MapCache::default()),
            summarizer.clone(),
            BlogServiceConfig::default(),
        );
        Fixture {
            repo,
            summarizer,
            service,
        }
    }

    fn draft(title: &str, content: &str, author: &str) -> BlogDraft {
        BlogDraft {
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_equal_record() {
        let f = fixture();

        let created = f.service.create(draft("A", "B", "C")).await.unwrap();
        assert_eq!(created.created_at, created.updated_at);

        let fetched = f.service.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_missing_id_is_not_found_even_with_warm_cache() {
        let f = fixture();

        // Warm the cache for a different post.
        let other = f.service.create(draft("A", "B", "C")).await.unwrap();
        f.service.get_by_id(other.id).await.unwrap();

        let missing = Uuid::new_v4();
        match f.service.get_by_id(missing).await {
            Err(DomainError::NotFound { id }) => assert_eq!(id, missing),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn second_read_is_served_from_cache() {
        let f = fixture();
        let post = f.service.create(draft("A", "B", "C")).await.unwrap();

        f.service.get_by_id(post.id).await.unwrap();
        assert_eq!(f.repo.find_count(), 1);

        f.service.get_by_id(post.id).await.unwrap();
        assert_eq!(f.repo.find_count(), 1, "cache hit must not touch the repo");
    }

    #[tokio::test]
    async fn undecodable_cache_entry_falls_through_to_repo() {
        let f = fixture();
        let post = f.service.create(draft("A", "B", "C")).await.unwrap();

        // Plant garbage under the post's cache key.
        let cache = MapCache::default();
        cache
            .set(&BlogService::cache_key(post.id), "not json", None)
            .await
            .unwrap();
        let service = BlogService::new(
            f.repo.clone(),
            Arc::new(cache),
            Arc::new(StubSummarizer::default()),
            BlogServiceConfig::default(),
        );

        let fetched = service.get_by_id(post.id).await.unwrap();
        assert_eq!(fetched, post);
        assert_eq!(f.repo.find_count(), 1);

        // The garbage was overwritten; the next read is a hit.
        service.get_by_id(post.id).await.unwrap();
        assert_eq!(f.repo.find_count(), 1);
    }

    #[tokio::test]
    async fn update_merges_changed_fields_and_writes_through() {
        let f = fixture();
        let created = f.service.create(draft("A", "B", "C")).await.unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;
        let updated = f
            .service
            .update(
                created.id,
                BlogPatch {
                    title: Some("A2".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "A2");
        assert_eq!(updated.content, "B");
        assert_eq!(updated.author, "C");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);

        // Write-through: the read after an update is a cache hit.
        let finds_after_update = f.repo.find_count();
        let fetched = f.service.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, updated);
        assert_eq!(f.repo.find_count(), finds_after_update);
    }

    #[tokio::test]
    async fn update_with_equal_values_is_a_no_op() {
        let f = fixture();
        let created = f.service.create(draft("A", "B", "C")).await.unwrap();
        assert_eq!(f.repo.save_count(), 1);

        tokio::time::sleep(Duration::from_millis(5)).await;
        let result = f
            .service
            .update(
                created.id,
                BlogPatch {
                    title: Some("A".to_string()),
                    content: Some("B".to_string()),
                    author: Some("C".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(result.updated_at, created.updated_at);
        assert_eq!(f.repo.save_count(), 1, "no-op update must not persist");
    }

    #[tokio::test]
    async fn update_with_empty_patch_is_a_no_op() {
        let f = fixture();
        let created = f.service.create(draft("A", "B", "C")).await.unwrap();

        let result = f
            .service
            .update(created.id, BlogPatch::default())
            .await
            .unwrap();

        assert_eq!(result, created);
        assert_eq!(f.repo.save_count(), 1);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let f = fixture();
        let missing = Uuid::new_v4();

        let result = f
            .service
            .update(
                missing,
                BlogPatch {
                    title: Some("X".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { id }) if id == missing));
    }

    #[tokio::test]
    async fn delete_evicts_cache_and_repeats_as_not_found() {
        let f = fixture();
        let post = f.service.create(draft("A", "B", "C")).await.unwrap();

        // Warm the cache so eviction is actually observable.
        f.service.get_by_id(post.id).await.unwrap();

        assert!(f.service.delete(post.id).await.unwrap());

        let read = f.service.get_by_id(post.id).await;
        assert!(
            matches!(read, Err(DomainError::NotFound { .. })),
            "stale cache entry served after delete"
        );

        let again = f.service.delete(post.id).await;
        assert!(matches!(again, Err(DomainError::NotFound { .. })));
    }

    /// Repository where every row vanishes between the existence check and
    /// the delete, as if another worker always deletes first.
    struct RacedDeleteRepo;

    #[async_trait]
    impl BlogRepository for RacedDeleteRepo {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<BlogPost>, RepoError> {
            Ok(None)
        }

        async fn find_page(&self, page: u64, size: u64) -> Result<Page<BlogPost>, RepoError> {
            Ok(Page::new(vec![], 0, page, size))
        }

        async fn save(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
            Ok(post)
        }

        async fn exists_by_id(&self, _id: Uuid) -> Result<bool, RepoError> {
            Ok(true)
        }

        async fn delete_by_id(&self, _id: Uuid) -> Result<(), RepoError> {
            Err(RepoError::NotFound)
        }
    }

    #[tokio::test]
    async fn delete_losing_the_race_is_still_not_found() {
        let service = BlogService::new(
            Arc::new(RacedDeleteRepo),
            Arc::new(MapCache::default()),
            Arc::new(StubSummarizer::default()),
            BlogServiceConfig::default(),
        );

        let id = Uuid::new_v4();
        let result = service.delete(id).await;
        assert!(matches!(result, Err(DomainError::NotFound { id: got }) if got == id));
    }

    #[tokio::test]
    async fn pagination_returns_partial_last_page() {
        let f = fixture();
        for i in 0..25 {
            f.service
                .create(draft(&format!("post {i}"), "body", "author"))
                .await
                .unwrap();
        }

        let first = f.service.get_page(0, 10).await.unwrap();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total, 25);
        assert_eq!(first.total_pages(), 3);

        let last = f.service.get_page(2, 10).await.unwrap();
        assert_eq!(last.items.len(), 5);
        assert_eq!(last.total, 25);
    }

    #[tokio::test]
    async fn summarize_delegates_post_content() {
        let f = fixture();
        let post = f.service.create(draft("A", "hello world", "C")).await.unwrap();

        let summary = f.service.summarize(post.id).await.unwrap();
        assert_eq!(summary, "summary of 11 chars");
        assert_eq!(f.summarizer.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn summarize_missing_post_never_calls_provider() {
        let f = fixture();

        let result = f.service.summarize(Uuid::new_v4()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
        assert_eq!(f.summarizer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn summarize_failure_surfaces_as_summary_unavailable() {
        let f = fixture_with(StubSummarizer {
            fail: true,
            ..Default::default()
        });
        let post = f.service.create(draft("A", "B", "C")).await.unwrap();

        let result = f.service.summarize(post.id).await;
        assert!(matches!(result, Err(DomainError::SummaryUnavailable(_))));
    }
}
