use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, Sourced},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct RelatedArticlesQuery {
    pub id: ArticleId,
}

impl ArticleQueryService {
    /// Resolves `relatedArticles` against the current listing. Ids with no
    /// matching article are skipped.
    pub async fn related_articles(
        &self,
        query: RelatedArticlesQuery,
    ) -> ApplicationResult<Sourced<Vec<ArticleDto>>> {
        let fetched = self.articles.get_article(query.id).await?;
        let source = fetched.source;
        let article = fetched
            .data
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if article.related_articles.is_empty() {
            return Ok(Sourced {
                source,
                data: Vec::new(),
            });
        }

        let listing = self.articles.list_articles().await?;
        Ok(Sourced { source, data: article }
            .zip(listing)
            .map(|(article, all)| {
                all.into_iter()
                    .filter(|candidate| article.related_articles.contains(&candidate.id))
                    .collect()
            }))
    }
}
