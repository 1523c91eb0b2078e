use crate::{application::error::ApplicationError, domain::article::ArticleStatus};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// Trusted, caller-declared role. Nothing verifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ViewerRole {
    Admin,
    #[default]
    #[serde(alias = "user")]
    Reader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Published,
    Draft,
}

impl StatusFilter {
    pub fn admits(&self, status: ArticleStatus) -> bool {
        match self {
            Self::All => true,
            Self::Published => status == ArticleStatus::Published,
            Self::Draft => status == ArticleStatus::Draft,
        }
    }
}

impl FromStr for ViewerRole {
    type Err = ApplicationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "" | "reader" | "user" => Ok(Self::Reader),
            other => Err(ApplicationError::validation(format!("unknown role: {other}"))),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ApplicationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "published" => Ok(Self::Published),
            "draft" => Ok(Self::Draft),
            other => Err(ApplicationError::validation(format!(
                "unknown status filter: {other}"
            ))),
        }
    }
}
