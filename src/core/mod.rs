/// Command engine
///
/// Parsing, the skill table, dispatch, and the session that ties them to
/// the user's state.

pub mod console;
pub mod dispatcher;
pub mod parser;
pub mod registry;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use console::Console;
pub use dispatcher::{dispatch, Reply};
pub use parser::{parse, ParsedCommand};
pub use registry::Skill;
pub use session::Session;
