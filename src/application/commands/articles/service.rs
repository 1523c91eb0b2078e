// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::application::{ports::time::Clock, services::ArticleService};

/// Editorial workflows layered over the article façade.
pub struct ArticleCommandService {
    pub(super) articles: Arc<ArticleService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(articles: Arc<ArticleService>, clock: Arc<dyn Clock>) -> Self {
        Self { articles, clock }
    }
}
