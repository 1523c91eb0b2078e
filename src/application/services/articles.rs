// src/application/services/articles.rs
use super::remote_first::RemoteFirst;
use crate::{
    application::{
        dto::{ArticleDraftDto, ArticleDto, DeleteAckDto, Sourced},
        error::ApplicationResult,
        ports::{reachability::ReachabilityProbe, remote::RemoteArticleApi, time::Clock},
    },
    domain::article::{ArticleId, ArticleRepository, ArticleTitle},
};
use std::sync::Arc;

/// CRUD façade for articles. Every call succeeds from the caller's point of
/// view unless the input itself is invalid; the provenance tag tells whether
/// the live backend answered.
pub struct ArticleService {
    repo: Arc<dyn ArticleRepository>,
    remote: Arc<dyn RemoteArticleApi>,
    policy: RemoteFirst,
    clock: Arc<dyn Clock>,
}

impl ArticleService {
    pub fn new(
        repo: Arc<dyn ArticleRepository>,
        remote: Arc<dyn RemoteArticleApi>,
        probe: Arc<dyn ReachabilityProbe>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            remote,
            policy: RemoteFirst::new(probe),
            clock,
        }
    }

    pub async fn list_articles(&self) -> ApplicationResult<Sourced<Vec<ArticleDto>>> {
        let listing = self
            .policy
            .serve(
                "list articles",
                || self.remote.list_articles(),
                || self.repo.list(),
            )
            .await?;

        Ok(listing.map(|articles| articles.into_iter().map(ArticleDto::from).collect()))
    }

    /// A missing article is `None`, never an error.
    pub async fn get_article(
        &self,
        id: ArticleId,
    ) -> ApplicationResult<Sourced<Option<ArticleDto>>> {
        let found = self
            .policy
            .serve(
                "get article",
                || async move { self.remote.get_article(id).await.map(Some) },
                || self.repo.find_by_id(id),
            )
            .await?;

        Ok(found.map(|article| article.map(ArticleDto::from)))
    }

    /// Requires a non-blank title. Missing fields get the creation defaults
    /// on the local path.
    pub async fn create_article(
        &self,
        draft: ArticleDraftDto,
    ) -> ApplicationResult<Sourced<ArticleDto>> {
        let draft = draft.into_draft()?;
        ArticleTitle::new(draft.title.clone().unwrap_or_default())?;
        let today = self.clock.today();

        let created = self
            .policy
            .serve(
                "create article",
                || self.remote.create_article(&draft),
                || self.repo.insert(draft.clone().into_fields(today)),
            )
            .await?;

        tracing::info!(
            id = %created.data.id,
            source = created.source.as_str(),
            "article created"
        );
        Ok(created.map(ArticleDto::from))
    }

    /// Full replace. For an unknown id the input is echoed back with that id
    /// and nothing is stored.
    pub async fn update_article(
        &self,
        id: ArticleId,
        article: ArticleDto,
    ) -> ApplicationResult<Sourced<ArticleDto>> {
        let fields = article.into_fields()?;

        let updated = self
            .policy
            .serve(
                "update article",
                || self.remote.update_article(id, &fields),
                || self.repo.replace(id, fields.clone()),
            )
            .await?;

        Ok(updated.map(ArticleDto::from))
    }

    /// Idempotent: deleting an absent id is acknowledged like any other.
    pub async fn delete_article(
        &self,
        id: ArticleId,
    ) -> ApplicationResult<Sourced<DeleteAckDto>> {
        let removed = self
            .policy
            .serve(
                "delete article",
                || self.remote.delete_article(id),
                || self.repo.remove(id),
            )
            .await?;

        Ok(removed.map(|()| DeleteAckDto::for_id(id)))
    }

    /// Delete by the key as supplied. A key that cannot name a stored row
    /// matches nothing and is acknowledged locally, echoing the raw text.
    pub async fn delete_article_by_key(
        &self,
        key: &str,
    ) -> ApplicationResult<Sourced<DeleteAckDto>> {
        match ArticleId::coerce(key) {
            Some(id) => self.delete_article(id).await,
            None => {
                tracing::debug!(key, "delete article with unusable id; nothing to remove");
                Ok(Sourced::fallback(DeleteAckDto::unmatched(key)))
            }
        }
    }
}
