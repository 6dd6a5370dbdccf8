//! Session handling: token persistence, the session context and the route guard

pub mod api;
pub mod context;
pub mod guard;
pub mod storage;

pub use context::{bearer, use_session, Session};
