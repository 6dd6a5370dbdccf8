use async_trait::async_trait;
use contracts::domain::a001_article::{ArticleDto, ArticleWire};
use contracts::domain::common::ArticleId;
use contracts::shared::envelope::Ack;

use crate::shared::api_utils::ApiError;

/// Remote operations the publish form depends on.
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait ArticleGateway {
    async fn fetch_article(&self, id: &ArticleId) -> Result<ArticleDto, ApiError>;

    async fn create_article(&self, article: &ArticleWire) -> Result<Ack, ApiError>;

    async fn update_article(&self, id: &ArticleId, article: &ArticleWire) -> Result<Ack, ApiError>;
}
