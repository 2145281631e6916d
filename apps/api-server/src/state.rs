//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{BlogRepository, Cache, Summarizer, SummaryError};
use quill_core::{BlogService, BlogServiceConfig};
use quill_infra::cache::InMemoryCache;
use quill_infra::database::InMemoryBlogRepository;
use quill_infra::{GeminiSummarizer, PostgresBlogRepository, RedisCache, connect};

use crate::config::AppConfig;

/// Which backend each port was wired with at startup. Reported by the
/// health endpoint so operators can tell an in-memory dev instance from
/// a fully configured one.
#[derive(Clone, Copy, serde::Serialize)]
pub struct Backends {
    pub storage: &'static str,
    pub cache: &'static str,
    pub summarizer: &'static str,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<BlogService>,
    pub backends: Backends,
}

/// Placeholder summarizer for when no API key is configured.
struct UnconfiguredSummarizer;

#[async_trait::async_trait]
impl Summarizer for UnconfiguredSummarizer {
    async fn summarize(&self, _text: &str) -> Result<String, SummaryError> {
        Err(SummaryError::Upstream(
            "summarizer is not configured".to_string(),
        ))
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (cache, cache_backend): (Arc<dyn Cache>, &'static str) = match &config.redis {
            Some(redis_config) => match RedisCache::new(redis_config.clone()).await {
                Ok(redis) => (Arc::new(redis), "redis"),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to Redis: {}. Using in-memory cache.",
                        e
                    );
                    (Arc::new(InMemoryCache::new()), "memory")
                }
            },
            None => {
                tracing::info!("REDIS_URL not set. Using in-memory cache.");
                (Arc::new(InMemoryCache::new()), "memory")
            }
        };

        let (repo, storage_backend): (Arc<dyn BlogRepository>, &'static str) =
            match &config.database {
                Some(db_config) => match connect(db_config).await {
                    Ok(conn) => (Arc::new(PostgresBlogRepository::new(conn)), "postgres"),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (Arc::new(InMemoryBlogRepository::new()), "memory")
                    }
                },
                None => {
                    tracing::warn!(
                        "DATABASE_URL not set. Running without database (in-memory mode)."
                    );
                    (Arc::new(InMemoryBlogRepository::new()), "memory")
                }
            };

        let (summarizer, summarizer_backend): (Arc<dyn Summarizer>, &'static str) =
            match config.gemini.clone() {
                Some(gemini_config) => (Arc::new(GeminiSummarizer::new(gemini_config)), "gemini"),
                None => {
                    tracing::warn!("GEMINI_API_KEY not set. Blog summaries will be unavailable.");
                    (Arc::new(UnconfiguredSummarizer), "unconfigured")
                }
            };

        let blogs = Arc::new(BlogService::new(
            repo,
            cache,
            summarizer,
            BlogServiceConfig {
                cache_ttl: config.cache_ttl,
            },
        ));

        tracing::info!(
            storage = storage_backend,
            cache = cache_backend,
            summarizer = summarizer_backend,
            "Application state initialized"
        );

        Self {
            blogs,
            backends: Backends {
                storage: storage_backend,
                cache: cache_backend,
                summarizer: summarizer_backend,
            },
        }
    }
}
