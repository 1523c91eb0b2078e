use crate::{
    application::dto::{ArticleDto, CategoryDto},
    domain::{
        article::Article,
        category::Category,
        errors::{DomainError, DomainResult},
    },
};

const ARTICLES_JSON: &str = include_str!("../../../fixtures/articles.json");
const CATEGORIES_JSON: &str = include_str!("../../../fixtures/categories.json");

pub fn seed_articles() -> DomainResult<Vec<Article>> {
    let records: Vec<ArticleDto> = serde_json::from_str(ARTICLES_JSON)
        .map_err(|err| DomainError::Persistence(format!("article fixtures: {err}")))?;
    records.into_iter().map(ArticleDto::into_article).collect()
}

pub fn seed_categories() -> DomainResult<Vec<Category>> {
    let records: Vec<CategoryDto> = serde_json::from_str(CATEGORIES_JSON)
        .map_err(|err| DomainError::Persistence(format!("category fixtures: {err}")))?;
    records.into_iter().map(CategoryDto::into_category).collect()
}
