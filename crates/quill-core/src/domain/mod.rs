//! Domain entities - the core business objects.

mod blog;

mod page;

pub use blog::{BlogDraft, BlogPatch, BlogPost};
pub use page::Page;
