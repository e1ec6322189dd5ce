pub mod app;
pub mod config;
pub mod outbound;
pub mod presence;

pub use app::{Assistant, AssistantError, Server, ServerError};
