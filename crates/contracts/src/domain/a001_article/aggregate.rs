use super::cover::CoverDto;
use crate::domain::common::{ArticleId, ChannelId};
use serde::{Deserialize, Serialize};

/// Review status of an article as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ArticleStatus {
    Draft = 0,
    PendingReview = 1,
    Approved = 2,
    Rejected = 3,
}

impl ArticleStatus {
    /// Statuses offered by the list filter
    pub fn filterable() -> [ArticleStatus; 2] {
        [ArticleStatus::PendingReview, ArticleStatus::Approved]
    }

    pub fn label(self) -> &'static str {
        match self {
            ArticleStatus::Draft => "Draft",
            ArticleStatus::PendingReview => "Pending review",
            ArticleStatus::Approved => "Approved",
            ArticleStatus::Rejected => "Rejected",
        }
    }

    /// Modifier class of the status tag
    pub fn tag_class(self) -> &'static str {
        match self {
            ArticleStatus::Draft => "tag--neutral",
            ArticleStatus::PendingReview => "tag--warning",
            ArticleStatus::Approved => "tag--success",
            ArticleStatus::Rejected => "tag--danger",
        }
    }
}

impl TryFrom<u8> for ArticleStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ArticleStatus::Draft),
            1 => Ok(ArticleStatus::PendingReview),
            2 => Ok(ArticleStatus::Approved),
            3 => Ok(ArticleStatus::Rejected),
            other => Err(format!("Unknown article status: {}", other)),
        }
    }
}

impl From<ArticleStatus> for u8 {
    fn from(status: ArticleStatus) -> Self {
        status as u8
    }
}

/// Article as returned by `GET /mp/articles/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: ArticleId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel_id: Option<ChannelId>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover: CoverDto,
    #[serde(default)]
    pub pub_date: Option<String>,
}

/// Editable text fields of an article, i.e. everything except the cover
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFields {
    pub title: String,
    pub channel_id: Option<ChannelId>,
    pub content: String,
}

impl ArticleDto {
    /// Separate cover metadata from the remaining form fields
    pub fn split_cover(self) -> (CoverDto, ArticleFields) {
        let fields = ArticleFields {
            title: self.title,
            channel_id: self.channel_id,
            content: self.content,
        };
        (self.cover, fields)
    }
}
