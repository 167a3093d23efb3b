//! Aggregate rows produced by the trailing-window queries.

use std::cmp::Ordering;

use serde::Serialize;
use uuid::Uuid;

/// Number of posts an author published inside a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorPostCount {
    pub username: String,
    pub num_posts: u64,
}

impl AuthorPostCount {
    /// Leaderboard order: most posts first, then username ascending.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .num_posts
            .cmp(&self.num_posts)
            .then_with(|| self.username.cmp(&other.username))
    }
}

/// Number of posts filed under a category inside a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBlogCount {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub num_blogs: u64,
}

impl CategoryBlogCount {
    /// Popularity order: most posts first, then name ascending, then id.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .num_blogs
            .cmp(&self.num_blogs)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.id.cmp(&other.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(name: &str, n: u64) -> AuthorPostCount {
        AuthorPostCount {
            username: name.to_string(),
            num_posts: n,
        }
    }

    #[test]
    fn test_author_rank_breaks_ties_by_username() {
        let mut rows = vec![author("carol", 2), author("bob", 5), author("alice", 2)];
        rows.sort_by(AuthorPostCount::rank_cmp);

        let names: Vec<_> = rows.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(names, ["bob", "alice", "carol"]);
    }

    #[test]
    fn test_category_rank_prefers_count_then_name() {
        let a = CategoryBlogCount {
            id: Uuid::new_v4(),
            name: "Rust".into(),
            description: String::new(),
            num_blogs: 3,
        };
        let b = CategoryBlogCount {
            id: Uuid::new_v4(),
            name: "Go".into(),
            description: String::new(),
            num_blogs: 3,
        };

        assert_eq!(a.rank_cmp(&b), Ordering::Greater);
        assert_eq!(b.rank_cmp(&a), Ordering::Less);
    }
}
