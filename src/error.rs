/// Error types for pocket-assistant
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use crate::services::calculator::CalcError;
use crate::services::weather::WeatherError;
use thiserror::Error;

/// Main error type for pocket-assistant operations
#[derive(Error, Debug)]
pub enum AssistantError {
    /// I/O errors (file operations, process spawning, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The user data document could not be written
    #[error("Failed to save user data: {0}")]
    Persistence(String),

    /// Nothing was typed (or said)
    #[error("Empty input")]
    EmptyInput,

    /// Weather lookup failed
    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),

    /// Browser or application launch failed
    #[error("Launch error: {0}")]
    Launch(String),

    /// Expression evaluation failed
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalcError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for pocket-assistant operations
pub type Result<T> = std::result::Result<T, AssistantError>;

/// Convert AssistantError to a user-friendly error message
impl AssistantError {
    pub fn user_message(&self) -> String {
        match self {
            AssistantError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            AssistantError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            AssistantError::Persistence(msg) => {
                format!("Could not save your data: {}", msg)
            }
            AssistantError::EmptyInput => {
                "Please enter a command or say 'help' for available options".to_string()
            }
            AssistantError::Weather(_) => "Weather service is currently unavailable".to_string(),
            AssistantError::Launch(msg) => {
                format!("Launch failed: {}", msg)
            }
            AssistantError::Calculation(_) => "Invalid calculation".to_string(),
            AssistantError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            AssistantError::Generic(msg) => msg.clone(),
        }
    }
}
