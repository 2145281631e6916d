use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// BlogPost entity - one persisted blog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post with generated ID and timestamps.
    pub fn new(title: String, content: String, author: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            author,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Field values for a post that does not exist yet.
#[derive(Debug, Clone)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl From<BlogDraft> for BlogPost {
    fn from(draft: BlogDraft) -> Self {
        BlogPost::new(draft.title, draft.content, draft.author)
    }
}

/// Partial update for an existing post. `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl BlogPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }
}
