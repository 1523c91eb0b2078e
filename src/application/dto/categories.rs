use crate::domain::{
    category::{Category, CategoryDraft, CategoryFields, CategoryId},
    errors::DomainResult,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    /// Ignored on update; the path id wins.
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub article_count: i64,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name,
            article_count: category.article_count,
        }
    }
}

impl CategoryDto {
    pub fn into_fields(self) -> CategoryFields {
        CategoryFields {
            name: self.name,
            article_count: self.article_count,
        }
    }

    pub fn into_category(self) -> DomainResult<Category> {
        let id = CategoryId::new(self.id)?;
        Ok(self.into_fields().with_id(id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraftDto {
    #[serde(default)]
    pub name: String,
    /// Accepted for compatibility and discarded: new categories start at 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_count: Option<i64>,
}

impl CategoryDraftDto {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            article_count: None,
        }
    }
}

impl From<CategoryDraftDto> for CategoryDraft {
    fn from(dto: CategoryDraftDto) -> Self {
        Self { name: dto.name }
    }
}

impl From<CategoryDraft> for CategoryDraftDto {
    fn from(draft: CategoryDraft) -> Self {
        Self::named(draft.name)
    }
}
