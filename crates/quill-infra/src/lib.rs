//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains database, cache, and external service integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL persistence via SeaORM
//! - `redis` - Redis-backed cache
//! - `summarizer` - Gemini AI summarizer client

pub mod cache;
pub mod database;

#[cfg(feature = "summarizer")]
pub mod summarizer;

// Re-exports - In-Memory
pub use cache::InMemoryCache;
pub use database::InMemoryBlogRepository;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresBlogRepository, connect};

#[cfg(feature = "redis")]
pub use cache::{RedisCache, RedisConfig};

#[cfg(feature = "summarizer")]
pub use summarizer::{GeminiConfig, GeminiSummarizer};
