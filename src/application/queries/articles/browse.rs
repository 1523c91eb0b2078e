use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, Page, Sourced, StatusFilter, ViewerRole},
        error::ApplicationResult,
    },
    domain::article::ArticleStatus,
};

#[derive(Debug, Clone, Default)]
pub struct BrowseArticlesQuery {
    pub role: ViewerRole,
    pub search: Option<String>,
    pub category: Option<String>,
    /// Only honoured for admins; readers see every status.
    pub status: StatusFilter,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ArticleQueryService {
    pub async fn browse_articles(
        &self,
        query: BrowseArticlesQuery,
    ) -> ApplicationResult<Sourced<Page<ArticleDto>>> {
        let listing = self.articles.list_articles().await?;
        let needle = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        Ok(listing.map(|articles| {
            let matching = articles
                .into_iter()
                .filter(|article| {
                    is_visible(article, &query)
                        && matches_search(article, query.role, needle.as_deref())
                        && matches_category(article, query.category.as_deref())
                })
                .collect();
            Page::paginate(matching, query.page, query.per_page)
        }))
    }
}

fn is_visible(article: &ArticleDto, query: &BrowseArticlesQuery) -> bool {
    match query.role {
        ViewerRole::Reader => true,
        ViewerRole::Admin => article
            .status
            .parse::<ArticleStatus>()
            .is_ok_and(|status| query.status.admits(status)),
    }
}

// Readers search title and excerpt; admins search title and category.
fn matches_search(article: &ArticleDto, role: ViewerRole, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    let secondary = match role {
        ViewerRole::Reader => &article.excerpt,
        ViewerRole::Admin => &article.category,
    };
    article.title.to_lowercase().contains(needle) || secondary.to_lowercase().contains(needle)
}

fn matches_category(article: &ArticleDto, category: Option<&str>) -> bool {
    match category.filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all")) {
        Some(category) => article.category == category,
        None => true,
    }
}
