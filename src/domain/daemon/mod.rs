pub mod inbound;
pub mod outbound;

mod app;
mod scheduler;

pub use app::{ApplicationCore, SetupApplicationCoreError};
pub use scheduler::SuspendScheduler;
