//! Typed construction of the article body sent by create and update.
//!
//! Cover invariants are checked once, in [`DraftPayload::to_wire_format`],
//! right before serialisation.

use super::aggregate::ArticleFields;
use super::cover::{CoverDto, CoverMode};
use crate::domain::common::ChannelId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local validation failure. Nothing has been sent when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("title is required")]
    MissingTitle,
    #[error("channel is required")]
    MissingChannel,
    #[error("content is required")]
    MissingContent,
    #[error("incomplete cover set: {expected} images required, {actual} present")]
    IncompleteCoverSet { expected: usize, actual: usize },
    #[error("too many cover images: at most {capacity}, {actual} present")]
    TooManyImages { capacity: usize, actual: usize },
}

/// Serialisable article body: `{title, channel_id, content, cover: {type, images}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleWire {
    pub title: String,
    pub channel_id: ChannelId,
    pub content: String,
    pub cover: CoverDto,
}

/// Article draft assembled from the form before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftPayload {
    pub title: String,
    pub channel_id: Option<ChannelId>,
    pub content: String,
    pub cover_mode: CoverMode,
    pub images: Vec<String>,
}

impl DraftPayload {
    pub fn builder() -> DraftPayloadBuilder {
        DraftPayloadBuilder::default()
    }

    /// Validate and convert into the body accepted by the article resource
    pub fn to_wire_format(&self) -> Result<ArticleWire, DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        let channel_id = self.channel_id.ok_or(DraftError::MissingChannel)?;
        if is_blank_html(&self.content) {
            return Err(DraftError::MissingContent);
        }

        let capacity = self.cover_mode.capacity();
        let actual = self.images.len();
        if self.cover_mode == CoverMode::Triple && actual < capacity {
            return Err(DraftError::IncompleteCoverSet {
                expected: capacity,
                actual,
            });
        }
        if actual > capacity {
            return Err(DraftError::TooManyImages { capacity, actual });
        }

        Ok(ArticleWire {
            title: self.title.clone(),
            channel_id,
            content: self.content.clone(),
            cover: CoverDto {
                cover_type: self.cover_mode,
                images: self.images.clone(),
            },
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct DraftPayloadBuilder {
    fields: ArticleFields,
    cover_mode: CoverMode,
    images: Vec<String>,
}

impl DraftPayloadBuilder {
    pub fn fields(mut self, fields: &ArticleFields) -> Self {
        self.fields = fields.clone();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.fields.title = title.into();
        self
    }

    pub fn channel(mut self, channel_id: ChannelId) -> Self {
        self.fields.channel_id = Some(channel_id);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.fields.content = content.into();
        self
    }

    pub fn cover(mut self, mode: CoverMode, images: Vec<String>) -> Self {
        self.cover_mode = mode;
        self.images = images;
        self
    }

    pub fn build(self) -> DraftPayload {
        // NONE never carries images, whatever the caller collected
        let images = match self.cover_mode {
            CoverMode::None => Vec::new(),
            _ => self.images,
        };
        DraftPayload {
            title: self.fields.title,
            channel_id: self.fields.channel_id,
            content: self.fields.content,
            cover_mode: self.cover_mode,
            images,
        }
    }
}

/// An editor that was cleared leaves markup such as `<p><br></p>` behind
fn is_blank_html(html: &str) -> bool {
    let mut in_tag = false;
    let mut text = String::new();
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    let text = text.replace("&nbsp;", " ");
    text.trim().is_empty() && !html.contains("<img")
}
