//! Application services - the operations exposed by the HTTP layer.

mod creation;
mod query;

pub use creation::CreationService;
pub use query::{QueryService, TOP_AUTHORS_LIMIT};
