//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod cache;
mod repository;
mod summarizer;

pub use cache::{Cache, CacheError};
pub use repository::BlogRepository;
pub use summarizer::{Summarizer, SummaryError};
