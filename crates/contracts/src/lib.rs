//! Wire contracts shared between the blog admin front-end and the remote API.

pub mod domain;
pub mod shared;
pub mod system;
