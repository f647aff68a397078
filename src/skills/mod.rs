/// Skill handlers
///
/// One function per command keyword. Handlers return the reply text; user
/// mistakes are replies too; only real failures come back as errors.

pub mod calculate;
pub mod clock;
pub mod notes;
pub mod system;
pub mod todo;
pub mod web;
