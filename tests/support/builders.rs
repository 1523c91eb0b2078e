// tests/support/builders.rs
use folio_core::domain::article::{Article, ArticleId, ArticleStatus};
use folio_core::domain::category::{Category, CategoryId};

pub struct ArticleBuilder {
    id: i64,
    title: String,
    category: String,
    status: ArticleStatus,
    excerpt: String,
    related: Vec<i64>,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Article {id}"),
            category: "Technology".into(),
            status: ArticleStatus::Published,
            excerpt: String::new(),
            related: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn draft(mut self) -> Self {
        self.status = ArticleStatus::Draft;
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn related(mut self, ids: &[i64]) -> Self {
        self.related = ids.to_vec();
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: self.title,
            category: self.category,
            author: "Test Author".into(),
            date: "2024-01-01".into(),
            read_time: "1 min read".into(),
            status: self.status,
            excerpt: self.excerpt,
            content: "<p>Body</p>".into(),
            related_articles: self.related,
        }
    }
}

pub fn category(id: i64, name: &str, article_count: i64) -> Category {
    Category {
        id: CategoryId::new(id).unwrap(),
        name: name.into(),
        article_count,
    }
}
