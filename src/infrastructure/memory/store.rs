use super::{
    fixtures::{seed_articles, seed_categories},
    table::{Keyed, MemoryTable, Seed},
};
use crate::domain::{article::Article, category::Category};

impl Keyed for Article {
    fn key(&self) -> i64 {
        self.id.into()
    }
}

impl Keyed for Category {
    fn key(&self) -> i64 {
        self.id.into()
    }
}

/// Explicitly constructed store: build one at startup and hand it to the
/// repositories by `Arc`. Each instance is isolated, so tests can create
/// their own.
pub struct MemoryStore {
    pub(super) articles: MemoryTable<Article>,
    pub(super) categories: MemoryTable<Category>,
}

impl MemoryStore {
    /// Seeded from the bundled fixtures (12 articles, 5 categories).
    pub fn seeded() -> Self {
        Self {
            articles: MemoryTable::new("articles", Seed::Loader(seed_articles)),
            categories: MemoryTable::new("categories", Seed::Loader(seed_categories)),
        }
    }

    pub fn with_rows(articles: Vec<Article>, categories: Vec<Category>) -> Self {
        Self {
            articles: MemoryTable::new("articles", Seed::Rows(articles)),
            categories: MemoryTable::new("categories", Seed::Rows(categories)),
        }
    }

    pub fn empty() -> Self {
        Self::with_rows(Vec::new(), Vec::new())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}
