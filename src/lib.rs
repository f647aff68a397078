/// pocket-assistant library
///
/// Command resolution and skill execution for a small personal assistant.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod skills;
pub mod state;
pub mod store;

// Re-exports for convenience
pub use crate::config::Config;
pub use crate::core::{Console, Reply, Session, Skill};
pub use crate::error::{AssistantError, Result};
pub use crate::state::UserState;
pub use crate::store::DocumentStore;
