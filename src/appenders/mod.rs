//! Appender implementations

pub mod async_appender;
pub mod file;

pub use async_appender::AsyncAppender;
pub use file::FileAppender;

pub use crate::core::Appender;
