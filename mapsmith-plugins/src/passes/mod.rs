//! The built-in transformation passes.

mod comment;
mod logical_delete;
mod lombok;
mod style;

pub use comment::CommentPlugin;
pub use logical_delete::LogicalDeletePlugin;
pub use lombok::LombokPlugin;
pub use style::CodeStylePlugin;
