//! Helpers for the admin authoring flow: plain text in, HTML-bearing article out.
//! The HTML produced here is not escaped and makes no Markdown promises.

use crate::domain::article::entity::{Article, ArticleDraft, UNCATEGORIZED, format_date};
use crate::domain::article::value_objects::ArticleStatus;
use chrono::NaiveDate;

pub const COMPOSER_AUTHOR: &str = "Admin User";
const CHARS_PER_MINUTE: usize = 1000;
const EMPTY_BODY_LENGTH: usize = 10;

/// Blank lines become paragraph breaks and single newlines become `<br />`.
pub fn render_plain_text(text: &str) -> String {
    let body = text.replace("\n\n", "</p><p>").replace('\n', "<br />");
    format!("<p>{body}</p>")
}

pub fn estimate_read_time(text: &str) -> String {
    let length = match text.chars().count() {
        0 => EMPTY_BODY_LENGTH,
        n => n,
    };
    format!("{} min read", length.div_ceil(CHARS_PER_MINUTE))
}

/// Form values submitted by the article editor.
#[derive(Debug, Clone, Default)]
pub struct ArticleComposition {
    pub title: String,
    pub category: Option<String>,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub draft: bool,
}

impl ArticleComposition {
    pub fn into_draft(self, today: NaiveDate) -> ArticleDraft {
        let body = self.body.filter(|b| !b.is_empty());
        let read_time = estimate_read_time(body.as_deref().unwrap_or_default());
        let content = match &body {
            Some(text) => render_plain_text(text),
            None => {
                let label = if self.draft { "Draft content" } else { "Content" };
                format!("<p>{label} for \"{}\"</p>", self.title)
            }
        };
        let excerpt = self
            .excerpt
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| format!("{}...", self.title.chars().take(50).collect::<String>()));
        let status = if self.draft {
            ArticleStatus::Draft
        } else {
            ArticleStatus::Published
        };

        ArticleDraft {
            category: Some(
                self.category
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            ),
            author: Some(COMPOSER_AUTHOR.to_string()),
            date: Some(format_date(today)),
            read_time: Some(read_time),
            status: Some(status),
            excerpt: Some(excerpt),
            content: Some(content),
            related_articles: Some(Vec::new()),
            title: Some(self.title),
        }
    }
}

/// Edits submitted for an existing article.
///
/// A full submit overlays every form field, empty or not, and keeps the
/// status. Saving a draft keeps the stored category, excerpt and content
/// wherever the form left them empty and forces `Draft`. Both stamp the
/// date; the read time is left as stored.
#[derive(Debug, Clone, Default)]
pub struct ArticleRevision {
    pub title: String,
    pub category: Option<String>,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub draft: bool,
}

impl ArticleRevision {
    pub fn apply_to(self, article: &mut Article, today: NaiveDate) {
        article.title = self.title;
        article.date = format_date(today);

        if self.draft {
            if let Some(category) = self.category.filter(|c| !c.is_empty()) {
                article.category = category;
            }
            if let Some(excerpt) = self.excerpt.filter(|e| !e.is_empty()) {
                article.excerpt = excerpt;
            }
            if let Some(body) = self.body.filter(|b| !b.is_empty()) {
                article.content = render_plain_text(&body);
            }
            article.status = ArticleStatus::Draft;
        } else {
            article.category = self.category.unwrap_or_default();
            article.excerpt = self.excerpt.unwrap_or_default();
            article.content = render_plain_text(self.body.as_deref().unwrap_or_default());
        }
    }
}
