mod assistant;
mod server;

pub use assistant::{Assistant, AssistantError};
pub use server::{routes, Server, ServerError, ACKNOWLEDGMENT};
