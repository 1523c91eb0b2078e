// src/application/services/categories.rs
use super::remote_first::RemoteFirst;
use crate::{
    application::{
        dto::{CategoryDraftDto, CategoryDto, DeleteAckDto, Sourced},
        error::ApplicationResult,
        ports::{reachability::ReachabilityProbe, remote::RemoteCategoryApi},
    },
    domain::category::{CategoryDraft, CategoryId, CategoryRepository},
};
use std::sync::Arc;

/// CRUD façade for categories, same shape as
/// [`ArticleService`](super::articles::ArticleService).
///
/// `articleCount` is not maintained here: article writes never adjust it and
/// delete does not consult it.
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
    remote: Arc<dyn RemoteCategoryApi>,
    policy: RemoteFirst,
}

impl CategoryService {
    pub fn new(
        repo: Arc<dyn CategoryRepository>,
        remote: Arc<dyn RemoteCategoryApi>,
        probe: Arc<dyn ReachabilityProbe>,
    ) -> Self {
        Self {
            repo,
            remote,
            policy: RemoteFirst::new(probe),
        }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Sourced<Vec<CategoryDto>>> {
        let listing = self
            .policy
            .serve(
                "list categories",
                || self.remote.list_categories(),
                || self.repo.list(),
            )
            .await?;

        Ok(listing.map(|categories| categories.into_iter().map(CategoryDto::from).collect()))
    }

    pub async fn get_category(
        &self,
        id: CategoryId,
    ) -> ApplicationResult<Sourced<Option<CategoryDto>>> {
        let found = self
            .policy
            .serve(
                "get category",
                || async move { self.remote.get_category(id).await.map(Some) },
                || self.repo.find_by_id(id),
            )
            .await?;

        Ok(found.map(|category| category.map(CategoryDto::from)))
    }

    /// The stored category always starts with `articleCount = 0`.
    pub async fn create_category(
        &self,
        draft: CategoryDraftDto,
    ) -> ApplicationResult<Sourced<CategoryDto>> {
        let draft = CategoryDraft::from(draft);

        let created = self
            .policy
            .serve(
                "create category",
                || self.remote.create_category(&draft),
                || self.repo.insert(draft.clone().into_fields()),
            )
            .await?;

        tracing::info!(
            id = %created.data.id,
            source = created.source.as_str(),
            "category created"
        );
        Ok(created.map(CategoryDto::from))
    }

    pub async fn update_category(
        &self,
        id: CategoryId,
        category: CategoryDto,
    ) -> ApplicationResult<Sourced<CategoryDto>> {
        let fields = category.into_fields();

        let updated = self
            .policy
            .serve(
                "update category",
                || self.remote.update_category(id, &fields),
                || self.repo.replace(id, fields.clone()),
            )
            .await?;

        Ok(updated.map(CategoryDto::from))
    }

    pub async fn delete_category(
        &self,
        id: CategoryId,
    ) -> ApplicationResult<Sourced<DeleteAckDto>> {
        let removed = self
            .policy
            .serve(
                "delete category",
                || self.remote.delete_category(id),
                || self.repo.remove(id),
            )
            .await?;

        Ok(removed.map(|()| DeleteAckDto::for_id(id)))
    }

    /// Delete by the key as supplied. A key that cannot name a stored row
    /// matches nothing and is acknowledged locally, echoing the raw text.
    pub async fn delete_category_by_key(
        &self,
        key: &str,
    ) -> ApplicationResult<Sourced<DeleteAckDto>> {
        match CategoryId::coerce(key) {
            Some(id) => self.delete_category(id).await,
            None => {
                tracing::debug!(key, "delete category with unusable id; nothing to remove");
                Ok(Sourced::fallback(DeleteAckDto::unmatched(key)))
            }
        }
    }
}
