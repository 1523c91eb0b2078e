use std::sync::Arc;

use crate::application::{
    dto::{CategoryDto, Page, Sourced},
    error::ApplicationResult,
    services::CategoryService,
};

#[derive(Debug, Clone, Default)]
pub struct SearchCategoriesQuery {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

pub struct CategoryQueryService {
    categories: Arc<CategoryService>,
}

impl CategoryQueryService {
    pub fn new(categories: Arc<CategoryService>) -> Self {
        Self { categories }
    }

    /// Case-insensitive substring match on the category name.
    pub async fn search_categories(
        &self,
        query: SearchCategoriesQuery,
    ) -> ApplicationResult<Sourced<Page<CategoryDto>>> {
        let listing = self.categories.list_categories().await?;
        let needle = query
            .search
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_lowercase();

        Ok(listing.map(|categories| {
            let matching = categories
                .into_iter()
                .filter(|category| category.name.to_lowercase().contains(&needle))
                .collect();
            Page::paginate(matching, query.page, query.per_page)
        }))
    }
}
