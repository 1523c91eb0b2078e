use crate::domain::category::value_objects::CategoryId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Denormalized. Creating, deleting or re-categorizing articles does not
    /// touch this value; callers keep it consistent.
    pub article_count: i64,
}

impl Category {
    pub fn into_fields(self) -> CategoryFields {
        CategoryFields {
            name: self.name,
            article_count: self.article_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFields {
    pub name: String,
    pub article_count: i64,
}

impl CategoryFields {
    pub fn with_id(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name,
            article_count: self.article_count,
        }
    }
}

/// Partial category as supplied on create. Any count the caller sends is
/// discarded; new categories always start at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
}

impl CategoryDraft {
    pub fn into_fields(self) -> CategoryFields {
        CategoryFields {
            name: self.name,
            article_count: 0,
        }
    }
}
