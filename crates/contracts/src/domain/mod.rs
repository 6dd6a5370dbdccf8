pub mod a001_article;
pub mod a002_channel;
pub mod common;
