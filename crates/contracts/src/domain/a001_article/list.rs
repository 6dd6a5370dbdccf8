use super::aggregate::ArticleStatus;
use super::cover::CoverDto;
use crate::domain::common::{ArticleId, ChannelId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query string of `GET /mp/articles`. Absent filters are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<ChannelId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_pubdate: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_pubdate: Option<NaiveDate>,
    pub page: u32,
    pub per_page: u32,
}

impl Default for ArticleListQuery {
    fn default() -> Self {
        Self {
            status: None,
            channel_id: None,
            begin_pubdate: None,
            end_pubdate: None,
            page: 1,
            per_page: 10,
        }
    }
}

/// Row of the article list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleListItem {
    pub id: ArticleId,
    #[serde(default)]
    pub title: String,
    pub status: ArticleStatus,
    #[serde(default)]
    pub pubdate: String,
    #[serde(default)]
    pub cover: CoverDto,
    #[serde(default)]
    pub read_count: u64,
    #[serde(default)]
    pub comment_count: u64,
    #[serde(default)]
    pub like_count: u64,
}

impl ArticleListItem {
    pub fn thumbnail(&self) -> Option<&str> {
        self.cover.images.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleListResponse {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub results: Vec<ArticleListItem>,
}
