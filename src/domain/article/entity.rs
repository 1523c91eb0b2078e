// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleStatus};
use chrono::NaiveDate;

pub const UNCATEGORIZED: &str = "Uncategorized";
pub const PLACEHOLDER_CONTENT: &str = "<p>No content provided</p>";
const EXCERPT_TITLE_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub category: String,
    pub author: String,
    pub date: String,
    pub read_time: String,
    pub status: ArticleStatus,
    pub excerpt: String,
    pub content: String,
    /// Ids of other articles. Not checked against the store.
    pub related_articles: Vec<i64>,
}

impl Article {
    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }

    pub fn publish(&mut self, today: NaiveDate) {
        self.status = ArticleStatus::Published;
        self.date = format_date(today);
    }

    pub fn into_fields(self) -> ArticleFields {
        ArticleFields {
            title: self.title,
            category: self.category,
            author: self.author,
            date: self.date,
            read_time: self.read_time,
            status: self.status,
            excerpt: self.excerpt,
            content: self.content,
            related_articles: self.related_articles,
        }
    }
}

/// Every article field except the id; the store owns id assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFields {
    pub title: String,
    pub category: String,
    pub author: String,
    pub date: String,
    pub read_time: String,
    pub status: ArticleStatus,
    pub excerpt: String,
    pub content: String,
    pub related_articles: Vec<i64>,
}

impl ArticleFields {
    pub fn with_id(self, id: ArticleId) -> Article {
        Article {
            id,
            title: self.title,
            category: self.category,
            author: self.author,
            date: self.date,
            read_time: self.read_time,
            status: self.status,
            excerpt: self.excerpt,
            content: self.content,
            related_articles: self.related_articles,
        }
    }
}

/// Partial article as supplied by a caller on create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub read_time: Option<String>,
    pub status: Option<ArticleStatus>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub related_articles: Option<Vec<i64>>,
}

impl ArticleDraft {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Fill the creation defaults. Empty strings count as absent.
    pub fn into_fields(self, today: NaiveDate) -> ArticleFields {
        let title = present(self.title).unwrap_or_default();
        let excerpt = present(self.excerpt).unwrap_or_else(|| default_excerpt(&title));

        ArticleFields {
            category: present(self.category).unwrap_or_else(|| UNCATEGORIZED.to_string()),
            author: self.author.unwrap_or_default(),
            date: present(self.date).unwrap_or_else(|| format_date(today)),
            read_time: self.read_time.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            excerpt,
            content: present(self.content).unwrap_or_else(|| PLACEHOLDER_CONTENT.to_string()),
            related_articles: self.related_articles.unwrap_or_default(),
            title,
        }
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn default_excerpt(title: &str) -> String {
    if title.is_empty() {
        return String::new();
    }
    let head: String = title.chars().take(EXCERPT_TITLE_CHARS).collect();
    format!("{head}...")
}
