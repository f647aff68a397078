// Resolves a parsed command to its skill and turns the outcome into text
//
// This is the only place a skill error becomes a user-facing string.

use crate::core::parser::ParsedCommand;
use crate::core::registry::Skill;
use crate::core::Session;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use log::{debug, info, warn};

/// What the session should show, and whether it should stop afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }
}

/// Run one command against the session
pub async fn dispatch(session: &mut Session, parsed: &ParsedCommand) -> Reply {
    let Some(skill) = Skill::from_keyword(&parsed.command) else {
        info!("Unknown command: {}", parsed.command);
        return Reply::text(unknown_command(&parsed.command));
    };

    info!("Dispatching {}", skill);
    debug!("Arguments: {:?}", parsed.args);

    let text = match skill.execute(session, &parsed.args).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Skill {} failed: {}", skill, e);
            format!("Error executing command: {}", e)
        }
    };

    Reply {
        text,
        quit: skill == Skill::Quit,
    }
}

fn unknown_command(command: &str) -> String {
    match closest_keyword(command) {
        Some(keyword) => format!(
            "Unknown command: {}. Did you mean '{}'? Type 'help' for available commands.",
            command, keyword
        ),
        None => format!(
            "Unknown command: {}. Type 'help' for available commands.",
            command
        ),
    }
}

/// Best fuzzy match among registered keywords, in either direction
/// (`tme` inside `time`, or `time` inside `timee`)
fn closest_keyword(command: &str) -> Option<&'static str> {
    let matcher = SkimMatcherV2::default();

    Skill::ALL
        .iter()
        .filter_map(|skill| {
            let keyword = skill.keyword();
            let forward = matcher.fuzzy_match(keyword, command);
            let backward = matcher.fuzzy_match(command, keyword);
            forward
                .into_iter()
                .chain(backward)
                .max()
                .filter(|score| *score > 0)
                .map(|score| (score, keyword))
        })
        .max_by_key(|(score, _)| *score)
        .map(|(_, keyword)| keyword)
}
