// src/application/commands/articles/mod.rs
mod compose;
mod publish;
mod revise;
mod service;

pub use compose::ComposeArticleCommand;
pub use publish::PublishArticleCommand;
pub use revise::ReviseArticleCommand;
pub use service::ArticleCommandService;
