// src/application/commands/articles/revise.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, ReviseArticleDto, Sourced},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleRevision, ArticleTitle},
};

pub struct ReviseArticleCommand {
    pub id: ArticleId,
    pub form: ReviseArticleDto,
}

impl ArticleCommandService {
    /// Applies editor changes to the stored article and writes the whole
    /// record back through the façade.
    pub async fn revise_article(
        &self,
        command: ReviseArticleCommand,
    ) -> ApplicationResult<Sourced<ArticleDto>> {
        let revision = ArticleRevision::from(command.form);
        ArticleTitle::new(revision.title.clone())?;

        let fetched = self.articles.get_article(command.id).await?;
        let source = fetched.source;
        let dto = fetched
            .data
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let mut article = dto.into_article()?;
        let saving_draft = revision.draft;
        revision.apply_to(&mut article, self.clock.today());

        let updated = self
            .articles
            .update_article(command.id, article.into())
            .await?;
        tracing::info!(
            id = %command.id,
            draft = saving_draft,
            source = updated.source.as_str(),
            "article revised"
        );

        Ok(Sourced { source, data: () }
            .zip(updated)
            .map(|((), article)| article))
    }
}
