// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, Sourced},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct PublishArticleCommand {
    pub id: ArticleId,
}

impl ArticleCommandService {
    /// Marks the article published and stamps today's date, then writes the
    /// whole record back through the façade.
    pub async fn publish_article(
        &self,
        command: PublishArticleCommand,
    ) -> ApplicationResult<Sourced<ArticleDto>> {
        let fetched = self.articles.get_article(command.id).await?;
        let source = fetched.source;
        let dto = fetched
            .data
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let mut article = dto.into_article()?;
        article.publish(self.clock.today());

        let updated = self
            .articles
            .update_article(command.id, article.into())
            .await?;

        Ok(Sourced { source, data: () }
            .zip(updated)
            .map(|((), article)| article))
    }
}
