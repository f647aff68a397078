/// In-memory user state
///
/// Notes, reminders and the todo list, plus the rules for mutating them.

pub mod models;
pub mod mutations;

pub use models::*;
pub use mutations::next_id;
