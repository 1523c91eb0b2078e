mod browse;
mod related;
mod service;

pub use browse::BrowseArticlesQuery;
pub use related::RelatedArticlesQuery;
pub use service::ArticleQueryService;
