//! Application services - orchestration over the ports.

mod blog;

pub use blog::{BlogService, BlogServiceConfig};
