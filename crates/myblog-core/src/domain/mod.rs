//! Domain entities - the core business objects.

mod author;
mod blog;
mod category;
mod stats;
mod window;

pub use author::{Author, AuthorWithCount, NewAuthor, USERNAME_MAX_LEN};
pub use blog::{Blog, BlogWithAuthor, CreatedBlog, NewBlog, PublishStatus, TITLE_MAX_LEN};
pub use category::{CATEGORY_NAME_MAX_LEN, Category, CategoryWithCount, NewCategory};
pub use stats::{AuthorPostCount, CategoryBlogCount};
pub use window::{TRAILING_WINDOW_DAYS, TrailingWindow};
