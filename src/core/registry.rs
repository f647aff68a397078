// The skill table
//
// A closed set of twelve commands, known at compile time. Adding a skill
// means adding a variant here and nowhere else in the lookup path.

use crate::core::Session;
use crate::error::Result;
use crate::skills::{calculate, clock, notes, system, todo, web};
use chrono::Local;

/// One command keyword and the handler behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skill {
    Time,
    Date,
    Weather,
    Note,
    Notes,
    Reminder,
    Search,
    Open,
    Calculate,
    Todo,
    Help,
    Quit,
}

impl Skill {
    /// Every skill, in help order
    pub const ALL: [Skill; 12] = [
        Skill::Time,
        Skill::Date,
        Skill::Weather,
        Skill::Note,
        Skill::Notes,
        Skill::Reminder,
        Skill::Search,
        Skill::Open,
        Skill::Calculate,
        Skill::Todo,
        Skill::Help,
        Skill::Quit,
    ];

    /// Look up a lower-case keyword
    pub fn from_keyword(keyword: &str) -> Option<Skill> {
        Self::ALL.into_iter().find(|skill| skill.keyword() == keyword)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Skill::Time => "time",
            Skill::Date => "date",
            Skill::Weather => "weather",
            Skill::Note => "note",
            Skill::Notes => "notes",
            Skill::Reminder => "reminder",
            Skill::Search => "search",
            Skill::Open => "open",
            Skill::Calculate => "calculate",
            Skill::Todo => "todo",
            Skill::Help => "help",
            Skill::Quit => "quit",
        }
    }

    /// Argument shape, as shown in help
    pub fn usage(&self) -> &'static str {
        match self {
            Skill::Weather => "[city]",
            Skill::Note => "<message>",
            Skill::Reminder => "<message>",
            Skill::Search => "<query>",
            Skill::Open => "<app>",
            Skill::Calculate => "<expression>",
            Skill::Todo => "[add <task> | done <number>]",
            Skill::Time | Skill::Date | Skill::Notes | Skill::Help | Skill::Quit => "",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Skill::Time => "Get current time",
            Skill::Date => "Get current date",
            Skill::Weather => "Get weather info",
            Skill::Note => "Save a note",
            Skill::Notes => "Show recent notes",
            Skill::Reminder => "Set a reminder",
            Skill::Search => "Web search",
            Skill::Open => "Open application",
            Skill::Calculate => "Basic math",
            Skill::Todo => "Manage todo list",
            Skill::Help => "Show this help",
            Skill::Quit => "Exit assistant",
        }
    }

    /// Run the handler against the session
    pub async fn execute(self, session: &mut Session, args: &[String]) -> Result<String> {
        match self {
            Skill::Time => Ok(clock::time(Local::now().naive_local())),
            Skill::Date => Ok(clock::date(Local::now().naive_local())),
            Skill::Weather => web::weather(session, args).await,
            Skill::Note => notes::take_note(session, args),
            Skill::Notes => Ok(notes::show_notes(session.state())),
            Skill::Reminder => notes::set_reminder(session, args),
            Skill::Search => web::search(session, args),
            Skill::Open => web::open(session, args),
            Skill::Calculate => Ok(calculate::calculate(session, args)),
            Skill::Todo => todo::manage(session, args),
            Skill::Help => Ok(system::help()),
            Skill::Quit => system::quit(session),
        }
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
