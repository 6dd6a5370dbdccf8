//! Identifier types shared by all resources

pub mod aggregate_id;

pub use aggregate_id::{AggregateId, ArticleId, ChannelId};
