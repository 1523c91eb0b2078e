mod search;

pub use search::{CategoryQueryService, SearchCategoriesQuery};
