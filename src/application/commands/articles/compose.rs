// src/application/commands/articles/compose.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDraftDto, ArticleDto, ComposeArticleDto, Sourced},
        error::ApplicationResult,
    },
    domain::article::{ArticleComposition, ArticleTitle},
};

pub struct ComposeArticleCommand {
    pub form: ComposeArticleDto,
}

impl ArticleCommandService {
    /// Builds a complete article from editor form values and creates it.
    pub async fn compose_article(
        &self,
        command: ComposeArticleCommand,
    ) -> ApplicationResult<Sourced<ArticleDto>> {
        let composition = ArticleComposition::from(command.form);
        ArticleTitle::new(composition.title.clone())?;

        let draft = composition.into_draft(self.clock.today());
        self.articles
            .create_article(ArticleDraftDto::from(draft))
            .await
    }
}
