/// State mutation operations
///
/// Skill handlers never touch the collections directly; they go through
/// these methods so the id and position rules live in one place.

use crate::state::models::{Note, Reminder, TodoItem, UserState};
use chrono::NaiveDateTime;

/// Id for the next record in a collection of `existing_len` records.
///
/// Ids are derived from the collection length, which is only unique while
/// records are never removed. Anything that adds deletion must switch this
/// to a persisted monotonic counter.
pub fn next_id(existing_len: usize) -> u64 {
    existing_len as u64 + 1
}

impl UserState {
    /// Append a note and return a copy of it
    pub fn add_note(&mut self, content: impl Into<String>, created_at: NaiveDateTime) -> Note {
        let note = Note {
            id: next_id(self.notes.len()),
            content: content.into(),
            created_at,
        };
        self.notes.push(note.clone());
        note
    }

    /// Append a reminder and return a copy of it
    pub fn add_reminder(
        &mut self,
        message: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Reminder {
        let reminder = Reminder {
            id: next_id(self.reminders.len()),
            message: message.into(),
            created_at,
        };
        self.reminders.push(reminder.clone());
        reminder
    }

    /// Append a pending todo item, returning its 1-based position
    pub fn add_todo(&mut self, task: impl Into<String>) -> usize {
        self.todo_list.push(TodoItem::new(task));
        self.todo_list.len()
    }

    /// Mark the item at a 1-based position as done.
    ///
    /// Returns `None` when the position is outside `[1, len]`; the list is
    /// left untouched in that case. Completing a done item is a no-op.
    pub fn complete_todo(&mut self, position: i64) -> Option<&TodoItem> {
        if position < 1 {
            return None;
        }
        let item = self.todo_list.get_mut((position - 1) as usize)?;
        item.done = true;
        Some(item)
    }

    /// The last `limit` notes, oldest first
    pub fn recent_notes(&self, limit: usize) -> &[Note] {
        let start = self.notes.len().saturating_sub(limit);
        &self.notes[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_note_ids_follow_count() {
        let mut state = UserState::default();
        assert_eq!(state.add_note("first", at(9)).id, 1);
        assert_eq!(state.add_note("second", at(10)).id, 2);
        assert_eq!(state.notes.len(), 2);
    }

    #[test]
    fn test_reminder_ids_independent_of_notes() {
        let mut state = UserState::default();
        state.add_note("a note", at(9));
        state.add_note("another", at(9));

        let reminder = state.add_reminder("dentist", at(11));
        assert_eq!(reminder.id, 1);
        assert_eq!(reminder.message, "dentist");
        assert_eq!(state.reminders.last(), Some(&reminder));
    }

    #[test]
    fn test_complete_todo_in_range() {
        let mut state = UserState::default();
        state.add_todo("one");
        state.add_todo("two");

        assert!(state.complete_todo(2).is_some());
        assert!(!state.todo_list[0].done);
        assert!(state.todo_list[1].done);
    }

    #[test]
    fn test_complete_todo_out_of_range() {
        let mut state = UserState::default();
        assert!(state.complete_todo(1).is_none());

        state.add_todo("only");
        let before = state.clone();
        assert!(state.complete_todo(0).is_none());
        assert!(state.complete_todo(-3).is_none());
        assert!(state.complete_todo(2).is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_complete_todo_is_idempotent() {
        let mut state = UserState::default();
        state.add_todo("once");
        state.complete_todo(1);
        let after_first = state.clone();
        state.complete_todo(1);
        assert_eq!(state, after_first);
    }

    #[test]
    fn test_recent_notes_window() {
        let mut state = UserState::default();
        for i in 0..7 {
            state.add_note(format!("note {}", i), at(i));
        }

        let recent = state.recent_notes(5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].content, "note 2");
        assert_eq!(recent[4].content, "note 6");

        assert_eq!(UserState::default().recent_notes(5).len(), 0);
    }
}
