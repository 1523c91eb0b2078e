//! Process-lifetime in-memory store standing in for the remote backend.
//!
//! The collections are private to this module; the two repositories are the
//! only way in.
mod articles;
mod categories;
mod fixtures;
mod store;
mod table;

pub use articles::InMemoryArticleRepository;
pub use categories::InMemoryCategoryRepository;
pub use fixtures::{seed_articles, seed_categories};
pub use store::MemoryStore;
