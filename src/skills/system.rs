// help and quit

use crate::core::{Session, Skill};
use crate::error::Result;

/// Word typed at the prompt to switch to voice input
pub const VOICE_TRIGGER: &str = "listen";

pub const FAREWELL: &str = "Goodbye! Have a great day!";

/// One line per registered skill, built from the registry
pub fn help() -> String {
    let mut text = String::from("Available commands:");
    for skill in Skill::ALL {
        let usage = match skill.usage() {
            "" => skill.keyword().to_string(),
            usage => format!("{} {}", skill.keyword(), usage),
        };
        text.push_str(&format!("\n• {} - {}", usage, skill.summary()));
    }
    text.push_str(&format!(
        "\n\nVoice mode: Type '{}' to use voice input!",
        VOICE_TRIGGER
    ));
    text
}

/// Flush state and say goodbye. The session loop stops after this.
pub fn quit(session: &mut Session) -> Result<String> {
    session.shutdown()?;
    Ok(FAREWELL.to_string())
}
