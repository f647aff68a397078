// todo: list, add, done
//
// The first argument picks the action. Positions are 1-based.

use crate::core::Session;
use crate::error::Result;
use crate::state::UserState;
use std::num::IntErrorKind;

const USAGE: &str = "Usage: todo [add <task>] | [done <number>] | [show all]";

pub fn manage(session: &mut Session, args: &[String]) -> Result<String> {
    let Some(action) = args.first() else {
        return Ok(render(session.state()));
    };

    match (action.as_str(), &args[1..]) {
        ("add", rest) if !rest.is_empty() => add(session, rest),
        ("done", [number, ..]) => done(session, number),
        _ => Ok(USAGE.to_string()),
    }
}

/// The full list with a done/pending marker on each line
pub fn render(state: &UserState) -> String {
    if state.todo_list.is_empty() {
        return "Your todo list is empty".to_string();
    }

    let mut text = String::from("Your todo list:");
    for (i, item) in state.todo_list.iter().enumerate() {
        text.push_str(&format!("\n{} {}. {}", item.marker(), i + 1, item.task));
    }
    text
}

fn add(session: &mut Session, words: &[String]) -> Result<String> {
    let task = words.join(" ");
    session.state_mut().add_todo(task.clone());
    session.persist()?;
    Ok(format!("Added to todo: {}", task))
}

fn done(session: &mut Session, number: &str) -> Result<String> {
    let position = match number.parse::<i64>() {
        Ok(position) => position,
        // An integer, just not one any list could reach
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Ok("Invalid task number".to_string());
        }
        Err(_) => return Ok("Please provide a valid task number".to_string()),
    };

    if session.state_mut().complete_todo(position).is_none() {
        return Ok("Invalid task number".to_string());
    }
    session.persist()?;

    // Echo what the user typed, not the normalized integer
    Ok(format!("Marked task {} as done", number))
}
