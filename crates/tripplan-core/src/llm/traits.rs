use crate::error::PlannerError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Checks the request contract shared by every client: non-empty, ending in a user turn.
pub fn check_request(messages: &[Message]) -> Result<(), PlannerError> {
    match messages.last() {
        None => Err(PlannerError::InvalidRequest(
            "Cannot send an empty message list".into(),
        )),
        Some(last) if last.role != Role::User => Err(PlannerError::InvalidRequest(format!(
            "Message list must end with a user turn, found {}",
            last.role.as_str()
        ))),
        Some(_) => Ok(()),
    }
}

/// A chat-completion backend. One request in, one assistant text out.
///
/// Implementations never retry and never return empty text: an empty or
/// unparseable reply is an error.
#[async_trait::async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, messages: &[Message]) -> Result<String, PlannerError>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}
