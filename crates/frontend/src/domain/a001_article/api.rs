//! Article resource and image upload service

use async_trait::async_trait;
use contracts::domain::a001_article::{
    ArticleDto, ArticleListQuery, ArticleListResponse, ArticleWire,
};
use contracts::domain::common::{AggregateId, ArticleId};
use contracts::shared::envelope::Ack;
use contracts::shared::upload::{UploadedImage, UPLOAD_FIELD};
use gloo_net::http::Method;

use super::ui::publish::ArticleGateway;
use crate::config::config;
use crate::shared::api_utils::{self, ApiError};
use crate::system::auth::Session;

/// Collection path, e.g. `/mp/articles`
pub fn collection_path() -> String {
    config().api.articles_path.clone()
}

/// Item path, e.g. `/mp/articles/42`
pub fn item_path(id: &ArticleId) -> String {
    format!(
        "{}/{}",
        config().api.articles_path,
        urlencoding::encode(&id.as_string())
    )
}

/// List path with the filter encoded as query string
pub fn list_path(query: &ArticleListQuery) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Browser(e.to_string()))?;
    Ok(format!("{}?{}", collection_path(), qs))
}

pub async fn fetch_articles(
    query: &ArticleListQuery,
    token: Option<&str>,
) -> Result<ArticleListResponse, ApiError> {
    api_utils::get_data(&list_path(query)?, token).await
}

pub async fn fetch_article(id: &ArticleId, token: Option<&str>) -> Result<ArticleDto, ApiError> {
    api_utils::get_data(&item_path(id), token).await
}

/// Publish immediately (`draft=false`)
pub async fn create_article(article: &ArticleWire, token: Option<&str>) -> Result<Ack, ApiError> {
    let path = format!("{}?draft=false", collection_path());
    api_utils::send_for_ack(Method::POST, &path, article, token).await
}

pub async fn update_article(
    id: &ArticleId,
    article: &ArticleWire,
    token: Option<&str>,
) -> Result<Ack, ApiError> {
    api_utils::send_for_ack(Method::PUT, &item_path(id), article, token).await
}

pub async fn delete_article(id: &ArticleId, token: Option<&str>) -> Result<Ack, ApiError> {
    api_utils::delete(&item_path(id), token).await
}

/// Upload one image file and return its stored URL
pub async fn upload_image(file: web_sys::File, token: Option<&str>) -> Result<UploadedImage, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Browser(format!("{:?}", e)))?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &file, &file.name())
        .map_err(|e| ApiError::Browser(format!("{:?}", e)))?;
    api_utils::post_form("/upload", form, token).await
}

/// [`ArticleGateway`] backed by the HTTP API, authenticated by the session
#[derive(Clone, Copy)]
pub struct HttpArticleGateway {
    session: Session,
}

impl HttpArticleGateway {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

#[async_trait(?Send)]
impl ArticleGateway for HttpArticleGateway {
    async fn fetch_article(&self, id: &ArticleId) -> Result<ArticleDto, ApiError> {
        fetch_article(id, self.session.token().as_deref()).await
    }

    async fn create_article(&self, article: &ArticleWire) -> Result<Ack, ApiError> {
        create_article(article, self.session.token().as_deref()).await
    }

    async fn update_article(&self, id: &ArticleId, article: &ArticleWire) -> Result<Ack, ApiError> {
        update_article(id, article, self.session.token().as_deref()).await
    }
}
