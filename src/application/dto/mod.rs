pub mod articles;
pub mod browse;
pub mod categories;
pub mod pagination;
pub mod provenance;

pub use articles::{
    AckId, ArticleDraftDto, ArticleDto, ComposeArticleDto, DeleteAckDto, ReviseArticleDto,
};
pub use browse::{StatusFilter, ViewerRole};
pub use categories::{CategoryDraftDto, CategoryDto};
pub use pagination::Page;
pub use provenance::{DataSource, Sourced};
