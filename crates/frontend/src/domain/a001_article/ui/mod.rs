pub mod list;
pub mod publish;
