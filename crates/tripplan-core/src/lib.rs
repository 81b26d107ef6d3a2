pub mod error;
pub mod constants;
pub mod llm;
pub mod config;
pub mod conversation;
pub mod trip;
pub mod session;

// Re-export key types
pub use error::{PlannerError, ValidationError};
pub use llm::{Message, ModelClient, OpenAIClient, Role};
pub use conversation::{ConversationStore, HistoryEntry, SelectedHistory};
pub use trip::{Currency, TripRequest, TripType};
pub use session::{SessionController, SessionEvent, SessionOutcome, SessionState};
pub use config::Settings;
