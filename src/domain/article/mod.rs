pub mod authoring;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use authoring::{ArticleComposition, ArticleRevision, estimate_read_time, render_plain_text};
pub use entity::{Article, ArticleDraft, ArticleFields, PLACEHOLDER_CONTENT, UNCATEGORIZED};
pub use repository::ArticleRepository;
pub use value_objects::{ArticleId, ArticleStatus, ArticleTitle};
