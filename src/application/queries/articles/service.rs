use std::sync::Arc;

use crate::application::services::ArticleService;

/// Read models built in memory from the façade's full listing.
pub struct ArticleQueryService {
    pub(super) articles: Arc<ArticleService>,
}

impl ArticleQueryService {
    pub fn new(articles: Arc<ArticleService>) -> Self {
        Self { articles }
    }
}
