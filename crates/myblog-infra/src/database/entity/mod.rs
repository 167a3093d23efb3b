//! SeaORM entities for the blog tables.

pub mod author;
pub mod blog;
pub mod category;
