use crate::domain::{
    article::{
        Article, ArticleComposition, ArticleDraft, ArticleFields, ArticleId, ArticleRevision,
        ArticleStatus,
    },
    errors::DomainResult,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire shape of an article, shared by the HTTP surface, the remote API
/// and the seed fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    /// Ignored on update; the path id wins.
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub read_time: String,
    #[schema(example = "Published")]
    pub status: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub related_articles: Vec<i64>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            category: article.category,
            author: article.author,
            date: article.date,
            read_time: article.read_time,
            status: article.status.as_str().to_string(),
            excerpt: article.excerpt,
            content: article.content,
            related_articles: article.related_articles,
        }
    }
}

impl ArticleDto {
    pub fn into_fields(self) -> DomainResult<ArticleFields> {
        Ok(ArticleFields {
            status: self.status.parse()?,
            title: self.title,
            category: self.category,
            author: self.author,
            date: self.date,
            read_time: self.read_time,
            excerpt: self.excerpt,
            content: self.content,
            related_articles: self.related_articles,
        })
    }

    /// Full conversion for stored records, which must carry a positive id.
    pub fn into_article(self) -> DomainResult<Article> {
        let id = ArticleId::new(self.id)?;
        Ok(self.into_fields()?.with_id(id))
    }
}

/// Partial article accepted on create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraftDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_articles: Option<Vec<i64>>,
}

impl ArticleDraftDto {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn into_draft(self) -> DomainResult<ArticleDraft> {
        let status = self
            .status
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<ArticleStatus>())
            .transpose()?;

        Ok(ArticleDraft {
            title: self.title,
            category: self.category,
            author: self.author,
            date: self.date,
            read_time: self.read_time,
            status,
            excerpt: self.excerpt,
            content: self.content,
            related_articles: self.related_articles,
        })
    }
}

impl From<ArticleDraft> for ArticleDraftDto {
    fn from(draft: ArticleDraft) -> Self {
        Self {
            title: draft.title,
            category: draft.category,
            author: draft.author,
            date: draft.date,
            read_time: draft.read_time,
            status: draft.status.map(|s| s.as_str().to_string()),
            excerpt: draft.excerpt,
            content: draft.content,
            related_articles: draft.related_articles,
        }
    }
}

/// Editor form submission: plain-text body, saved as draft or published.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ComposeArticleDto {
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub draft: bool,
}

impl From<ComposeArticleDto> for ArticleComposition {
    fn from(dto: ComposeArticleDto) -> Self {
        Self {
            title: dto.title,
            category: dto.category,
            excerpt: dto.excerpt,
            body: dto.body,
            draft: dto.draft,
        }
    }
}

/// Editor submission for an existing article. `draft` selects "save draft",
/// which keeps stored values for empty fields.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ReviseArticleDto {
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub draft: bool,
}

impl From<ReviseArticleDto> for ArticleRevision {
    fn from(dto: ReviseArticleDto) -> Self {
        Self {
            title: dto.title,
            category: dto.category,
            excerpt: dto.excerpt,
            body: dto.body,
            draft: dto.draft,
        }
    }
}

/// Id echoed by a delete acknowledgement. An id that never coerced to a
/// number is echoed as the text that was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AckId {
    Numeric(i64),
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteAckDto {
    pub success: bool,
    pub id: AckId,
}

impl DeleteAckDto {
    pub fn for_id(id: impl Into<i64>) -> Self {
        Self {
            success: true,
            id: AckId::Numeric(id.into()),
        }
    }

    pub fn unmatched(raw: &str) -> Self {
        Self {
            success: true,
            id: AckId::Raw(raw.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_names_are_camel_case() {
        let dto: ArticleDto = serde_json::from_value(json!({
            "id": 4,
            "title": "T",
            "status": "Draft",
            "readTime": "3 min read",
            "relatedArticles": [1, 2]
        }))
        .unwrap();
        assert_eq!(dto.read_time, "3 min read");
        assert_eq!(dto.related_articles, vec![1, 2]);

        let value = serde_json::to_value(&dto).unwrap();
        assert!(value.get("readTime").is_some());
        assert!(value.get("relatedArticles").is_some());
    }

    #[test]
    fn unknown_status_is_rejected_on_conversion() {
        let dto = ArticleDto {
            id: 1,
            title: "T".into(),
            category: String::new(),
            author: String::new(),
            date: String::new(),
            read_time: String::new(),
            status: "Archived".into(),
            excerpt: String::new(),
            content: String::new(),
            related_articles: vec![],
        };
        assert!(dto.into_article().is_err());
    }

    #[test]
    fn draft_omits_absent_fields_when_serialized() {
        let value = serde_json::to_value(ArticleDraftDto::titled("X")).unwrap();
        assert_eq!(value, json!({ "title": "X" }));
    }

    #[test]
    fn ack_echoes_numeric_and_raw_ids() {
        let numeric = serde_json::to_value(DeleteAckDto::for_id(7)).unwrap();
        assert_eq!(numeric, json!({ "success": true, "id": 7 }));

        let raw = serde_json::to_value(DeleteAckDto::unmatched("abc")).unwrap();
        assert_eq!(raw, json!({ "success": true, "id": "abc" }));
    }
}
