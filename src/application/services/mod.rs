// src/application/services/mod.rs
mod articles;
mod categories;
mod remote_first;

pub use articles::ArticleService;
pub use categories::CategoryService;
pub use remote_first::RemoteFirst;

use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{
            reachability::ReachabilityProbe,
            remote::{RemoteArticleApi, RemoteCategoryApi},
            time::Clock,
        },
        queries::{articles::ArticleQueryService, categories::CategoryQueryService},
    },
    domain::{article::ArticleRepository, category::CategoryRepository},
};

pub struct ApplicationServices {
    pub articles: Arc<ArticleService>,
    pub categories: Arc<CategoryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub category_queries: Arc<CategoryQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        remote_articles: Arc<dyn RemoteArticleApi>,
        remote_categories: Arc<dyn RemoteCategoryApi>,
        probe: Arc<dyn ReachabilityProbe>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let articles = Arc::new(ArticleService::new(
            Arc::clone(&article_repo),
            Arc::clone(&remote_articles),
            Arc::clone(&probe),
            Arc::clone(&clock),
        ));

        let categories = Arc::new(CategoryService::new(
            Arc::clone(&category_repo),
            Arc::clone(&remote_categories),
            Arc::clone(&probe),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&articles),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&articles)));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&categories)));

        Self {
            articles,
            categories,
            article_commands,
            article_queries,
            category_queries,
        }
    }
}
