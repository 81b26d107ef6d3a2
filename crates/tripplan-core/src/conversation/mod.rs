mod store;

pub use store::{ConversationStore, HistoryEntry, SelectedHistory};
