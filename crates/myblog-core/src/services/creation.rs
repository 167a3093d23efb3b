//! Entity validation and creation.

use std::sync::Arc;

use crate::domain::{
    Author, AuthorWithCount, Blog, BlogWithAuthor, CATEGORY_NAME_MAX_LEN, Category,
    CategoryWithCount, CreatedBlog, NewAuthor, NewBlog, NewCategory, PublishStatus, TITLE_MAX_LEN,
    USERNAME_MAX_LEN,
};
use crate::error::{DomainError, RepoError, ValidationErrors};
use crate::ports::{AuthorRepository, BlogRepository, CategoryRepository, PasswordService};

const DUPLICATE_USERNAME: &str = "An author with that username already exists.";

fn missing_object(id: uuid::Uuid) -> String {
    format!("Invalid pk \"{}\" - object does not exist.", id)
}

/// Turns untrusted input into validated, persisted records.
#[derive(Clone)]
pub struct CreationService {
    authors: Arc<dyn AuthorRepository>,
    categories: Arc<dyn CategoryRepository>,
    blogs: Arc<dyn BlogRepository>,
    passwords: Arc<dyn PasswordService>,
}

impl CreationService {
    pub fn new(
        authors: Arc<dyn AuthorRepository>,
        categories: Arc<dyn CategoryRepository>,
        blogs: Arc<dyn BlogRepository>,
        passwords: Arc<dyn PasswordService>,
    ) -> Self {
        Self {
            authors,
            categories,
            blogs,
            passwords,
        }
    }

    /// Validate and persist a blog post.
    ///
    /// The author and category references must resolve to existing records.
    pub async fn create_blog(&self, input: NewBlog) -> Result<CreatedBlog, DomainError> {
        let mut errors = ValidationErrors::new();

        let title = errors.require_text("title", input.title, Some(TITLE_MAX_LEN));
        let content = errors.require_text("content", input.content, None);

        let author = match errors.require_ref("author", input.author_id) {
            Some(id) => {
                let found = self.authors.find_by_id(id).await?;
                if found.is_none() {
                    errors.add("author", missing_object(id));
                }
                found
            }
            None => None,
        };

        let category = match errors.require_ref("category", input.category_id) {
            Some(id) => {
                let found = self.categories.find_by_id(id).await?;
                if found.is_none() {
                    errors.add("category", missing_object(id));
                }
                found
            }
            None => None,
        };

        let (Some(title), Some(content), Some(author), Some(category)) =
            (title, content, author, category)
        else {
            return Err(errors.into());
        };

        let status = PublishStatus::from_flag(input.is_published);
        let blog = Blog::new(title, content, author.id, category.id, status);
        let saved = self.blogs.insert(blog).await?;

        Ok(CreatedBlog {
            message: saved.status().creation_message(),
            post: BlogWithAuthor {
                blog: saved,
                author_username: author.username,
            },
        })
    }

    /// Validate and persist an author, hashing the password first.
    pub async fn create_author(&self, input: NewAuthor) -> Result<AuthorWithCount, DomainError> {
        let mut errors = ValidationErrors::new();

        let username = errors.require_text("username", input.username, Some(USERNAME_MAX_LEN));
        let password = errors.require_secret("password", input.password);

        if let Some(name) = &username {
            if self.authors.find_by_username(name).await?.is_some() {
                errors.add("username", DUPLICATE_USERNAME);
            }
        }

        let (username, password) = match (username, password) {
            (Some(username), Some(password)) if errors.is_empty() => (username, password),
            _ => return Err(errors.into()),
        };

        let password_hash = self
            .passwords
            .hash(&password)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let author = Author::new(
            username,
            password_hash,
            input.bio.trim().to_string(),
            input.contact_info.trim().to_string(),
        );

        // Uniqueness is ultimately the store's call; a concurrent insert can
        // still win the race after the lookup above.
        let saved = match self.authors.insert(author).await {
            Ok(saved) => saved,
            Err(RepoError::Constraint(_)) => {
                let mut errors = ValidationErrors::new();
                errors.add("username", DUPLICATE_USERNAME);
                return Err(errors.into());
            }
            Err(e) => return Err(e.into()),
        };

        let num_blogs = self.authors.count_blogs(saved.id).await?;

        Ok(AuthorWithCount {
            author: saved,
            num_blogs,
        })
    }

    /// Validate and persist a category.
    pub async fn create_category(
        &self,
        input: NewCategory,
    ) -> Result<CategoryWithCount, DomainError> {
        let mut errors = ValidationErrors::new();

        let Some(name) = errors.require_text("name", input.name, Some(CATEGORY_NAME_MAX_LEN)) else {
            return Err(errors.into());
        };

        let category = Category::new(name, input.description.trim().to_string());
        let saved = self.categories.insert(category).await?;
        let num_blogs = self.categories.count_blogs(saved.id).await?;

        Ok(CategoryWithCount {
            category: saved,
            num_blogs,
        })
    }
}
