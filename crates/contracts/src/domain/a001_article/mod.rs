//! Article resource: aggregate DTO, cover model, draft payload and list query

pub mod aggregate;
pub mod cover;
pub mod draft;
pub mod list;

pub use aggregate::{ArticleDto, ArticleFields, ArticleStatus};
pub use cover::{CoverDto, CoverMode};
pub use draft::{ArticleWire, DraftError, DraftPayload, DraftPayloadBuilder};
pub use list::{ArticleListItem, ArticleListQuery, ArticleListResponse};
