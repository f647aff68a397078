// note, notes and reminder
//
// Each mutation is written to the store before the confirmation goes back.

use crate::core::Session;
use crate::error::Result;
use crate::state::UserState;
use chrono::Local;

/// How many notes `notes` shows
const RECENT_NOTES: usize = 5;

pub fn take_note(session: &mut Session, args: &[String]) -> Result<String> {
    if args.is_empty() {
        return Ok("Please provide a note to save".to_string());
    }

    let now = Local::now().naive_local();
    let content = session.state_mut().add_note(args.join(" "), now).content;
    session.persist()?;

    Ok(format!("Note saved: {}", content))
}

/// The last few notes, oldest first, with a short timestamp
pub fn show_notes(state: &UserState) -> String {
    if state.notes.is_empty() {
        return "No notes found".to_string();
    }

    let mut text = String::from("Your notes:");
    for note in state.recent_notes(RECENT_NOTES) {
        text.push_str(&format!(
            "\n• [{}] {}",
            note.created_at.format("%m/%d %H:%M"),
            note.content
        ));
    }
    text
}

pub fn set_reminder(session: &mut Session, args: &[String]) -> Result<String> {
    if args.is_empty() {
        return Ok("Please provide a reminder message".to_string());
    }

    let now = Local::now().naive_local();
    let message = session
        .state_mut()
        .add_reminder(args.join(" "), now)
        .message;
    session.persist()?;

    Ok(format!("Reminder set: {}", message))
}
