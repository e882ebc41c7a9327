use super::interpreter::CommandRes;

/// One executed command and what it produced. Entries are never mutated
/// after being pushed; the log is append-only except for a full clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub command: String,
    pub output: Option<CommandRes>,
}

/// State of one interactive terminal session. Owned by the active page
/// instance; nothing survives a reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    entries: Vec<HistoryEntry>,
    /// Recall position for arrow-key history, None when not recalling.
    cursor: Option<usize>,
}

impl Session {
    /// Interpret and record one submitted line. Empty submissions are
    /// recorded as a blank entry without invoking the interpreter; the
    /// `clear` sentinel empties the log instead of being recorded.
    pub fn submit(&mut self, input: &str) {
        self.cursor = None;
        if input.trim().is_empty() {
            self.entries.push(HistoryEntry {
                command: input.to_string(),
                output: None,
            });
            return;
        }
        let output = CommandRes::from(input);
        if output == CommandRes::Clear {
            self.entries.clear();
            return;
        }
        self.entries.push(HistoryEntry {
            command: input.to_string(),
            output: Some(output),
        });
    }

    /// ArrowUp: step backward through history, most recent first. Saturates
    /// at the oldest entry.
    pub fn recall_prev(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let index = match self.cursor {
            None => self.entries.len() - 1,
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.cursor = Some(index);
        Some(&self.entries[index].command)
    }

    /// ArrowDown: step forward; stepping past the most recent entry ends
    /// recall and clears the input.
    pub fn recall_next(&mut self) -> Option<&str> {
        let index = self.cursor? + 1;
        if index >= self.entries.len() {
            self.cursor = None;
            return Some("");
        }
        self.cursor = Some(index);
        Some(&self.entries[index].command)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The commands recorded before (and including) entry `index`, for the
    /// synthesized `history` listing.
    pub fn commands_through(&self, index: usize) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .take(index + 1)
            .map(|e| e.command.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_submissions_record_interpreter_output() {
        let mut session = Session::default();
        session.submit("pwd");
        assert_eq!(session.entries().len(), 1);
        assert_eq!(session.entries()[0].command, "pwd");
        assert!(matches!(
            session.entries()[0].output,
            Some(CommandRes::Text(_))
        ));
    }

    #[test]
    fn empty_submissions_record_a_blank_entry() {
        let mut session = Session::default();
        session.submit("   ");
        assert_eq!(session.entries().len(), 1);
        assert_eq!(session.entries()[0].output, None);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut session = Session::default();
        session.submit("pwd");
        session.submit("whoami");
        session.submit("clear");
        assert!(session.entries().is_empty());
    }

    #[test]
    fn recall_steps_backward_then_saturates() {
        let mut session = Session::default();
        session.submit("a");
        session.submit("b");
        session.submit("c");
        assert_eq!(session.recall_prev(), Some("c"));
        assert_eq!(session.recall_prev(), Some("b"));
        assert_eq!(session.recall_prev(), Some("a"));
        // no further history
        assert_eq!(session.recall_prev(), Some("a"));
    }

    #[test]
    fn recall_forward_clears_past_most_recent() {
        let mut session = Session::default();
        session.submit("a");
        session.submit("b");
        assert_eq!(session.recall_prev(), Some("b"));
        assert_eq!(session.recall_prev(), Some("a"));
        assert_eq!(session.recall_next(), Some("b"));
        assert_eq!(session.recall_next(), Some(""));
        // recall ended; a further ArrowDown does nothing
        assert_eq!(session.recall_next(), None);
    }

    #[test]
    fn recall_without_history_does_nothing() {
        let mut session = Session::default();
        assert_eq!(session.recall_prev(), None);
        assert_eq!(session.recall_next(), None);
    }

    #[test]
    fn submission_resets_the_recall_cursor() {
        let mut session = Session::default();
        session.submit("a");
        session.submit("b");
        assert_eq!(session.recall_prev(), Some("b"));
        session.submit("c");
        // cursor was reset, so recall starts from the most recent again
        assert_eq!(session.recall_prev(), Some("c"));
    }

    #[test]
    fn history_listing_covers_commands_through_an_entry() {
        let mut session = Session::default();
        session.submit("a");
        session.submit("b");
        session.submit("history");
        let listed: Vec<&str> = session.commands_through(2).collect();
        assert_eq!(listed, vec!["a", "b", "history"]);
    }
}
