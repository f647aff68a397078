/// Persistence for pocket-assistant
///
/// Loads and saves the user state as a single JSON document.

pub mod document;

pub use document::DocumentStore;
