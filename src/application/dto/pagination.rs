use serde::{Deserialize, Serialize};

pub const DEFAULT_PER_PAGE: u32 = 5;
pub const MAX_PER_PAGE: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total_items: usize,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Slice `items` into 1-based pages. A page past the end comes back empty
    /// with the totals still filled in.
    pub fn paginate(items: Vec<T>, page: Option<u32>, per_page: Option<u32>) -> Self {
        let per_page = match per_page {
            None | Some(0) => DEFAULT_PER_PAGE,
            Some(value) => value.min(MAX_PER_PAGE),
        };
        let page = page.unwrap_or(1).max(1);
        let total_items = items.len();
        let page_len = usize::try_from(per_page).unwrap_or(usize::MAX);
        let total_pages = u32::try_from(total_items.div_ceil(page_len)).unwrap_or(u32::MAX);

        let start = usize::try_from(page - 1)
            .unwrap_or(usize::MAX)
            .saturating_mul(page_len);
        let items = items.into_iter().skip(start).take(page_len).collect();

        Self {
            items,
            page,
            per_page,
            total_items,
            total_pages,
        }
    }
}
