use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest accepted category name, in characters.
pub const CATEGORY_NAME_MAX_LEN: usize = 100;

/// Category entity - groups blog posts by topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl Category {
    pub fn new(name: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
        }
    }
}

/// Untrusted input for category creation.
#[derive(Debug, Clone, Default)]
pub struct NewCategory {
    pub name: Option<String>,
    pub description: String,
}

/// A category together with the number of blogs filed under it.
#[derive(Debug, Clone)]
pub struct CategoryWithCount {
    pub category: Category,
    pub num_blogs: u64,
}
