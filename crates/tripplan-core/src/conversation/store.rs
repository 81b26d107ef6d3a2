use crate::constants::conversation::{BASE_LEN, GREETING, SYSTEM_PERSONA, UNAVAILABLE};
use crate::llm::{Message, Role};

/// One generated itinerary in the sidebar.
///
/// `message_index` is the log position of the assistant reply, bound when
/// that reply is appended. It stays `None` if generation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub title: String,
    pub message_index: Option<usize>,
}

/// The history item currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedHistory {
    Itinerary(String),
    Unavailable,
}

impl SelectedHistory {
    pub fn content(&self) -> &str {
        match self {
            SelectedHistory::Itinerary(text) => text,
            SelectedHistory::Unavailable => UNAVAILABLE,
        }
    }
}

/// Single source of truth for the session: the message log, the history
/// entries derived from it, and the selected history view.
pub struct ConversationStore {
    messages: Vec<Message>,
    history: Vec<HistoryEntry>,
    selected: Option<SelectedHistory>,
}

impl ConversationStore {
    pub fn new() -> Self {
        let mut store = Self {
            messages: Vec::new(),
            history: Vec::new(),
            selected: None,
        };
        store.initialize();
        store
    }

    /// Puts the log back to `[persona, greeting]` and drops all history.
    pub fn initialize(&mut self) {
        self.messages.clear();
        self.messages.push(Message::system(SYSTEM_PERSONA));
        self.messages.push(Message::assistant(GREETING));
        self.history.clear();
        self.selected = None;
    }

    pub fn append_user(&mut self, content: impl Into<String>) -> usize {
        self.push(Message::user(content))
    }

    pub fn append_assistant(&mut self, content: impl Into<String>) -> usize {
        self.push(Message::assistant(content))
    }

    fn push(&mut self, message: Message) -> usize {
        tracing::debug!(role = message.role.as_str(), index = self.messages.len(), "append message");
        self.messages.push(message);
        self.messages.len() - 1
    }

    /// Adds an unresolved history entry and returns its position.
    pub fn record_history_title(&mut self, title: impl Into<String>) -> usize {
        self.history.push(HistoryEntry {
            title: title.into(),
            message_index: None,
        });
        self.history.len() - 1
    }

    /// Points history entry `position` at the assistant reply at `message_index`.
    /// Ignored if either index is out of range or the message is not an assistant turn.
    pub fn bind_history_entry(&mut self, position: usize, message_index: usize) {
        let is_reply = self
            .messages
            .get(message_index)
            .is_some_and(|m| m.role == Role::Assistant);
        match self.history.get_mut(position) {
            Some(entry) if is_reply => entry.message_index = Some(message_index),
            _ => tracing::warn!(position, message_index, "history entry not bound"),
        }
    }

    /// Truncates to the initial two messages and clears history and selection.
    pub fn reset_all(&mut self) {
        self.messages.truncate(BASE_LEN);
        self.history.clear();
        self.selected = None;
    }

    /// The most recent `n` messages, oldest first. Whole log if shorter.
    pub fn last_n(&self, n: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(n.max(1));
        &self.messages[start..]
    }

    /// Itinerary text for history entry `index`, or the unavailable sentinel.
    pub fn resolve_history(&self, index: usize) -> SelectedHistory {
        self.history
            .get(index)
            .and_then(|entry| entry.message_index)
            .and_then(|i| self.messages.get(i))
            .filter(|m| m.role == Role::Assistant)
            .map(|m| SelectedHistory::Itinerary(m.content.clone()))
            .unwrap_or(SelectedHistory::Unavailable)
    }

    pub fn select_history(&mut self, index: usize) -> &SelectedHistory {
        let view = self.resolve_history(index);
        self.selected.insert(view)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&SelectedHistory> {
        self.selected.as_ref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn history_titles(&self) -> Vec<&str> {
        self.history.iter().map(|e| e.title.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when nothing beyond the persona and greeting has been logged.
    pub fn is_empty(&self) -> bool {
        self.messages.len() <= BASE_LEN
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}
