use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("LLM request timed out after {0}s")]
    Timeout(u64),

    #[error("Malformed LLM response: {0}")]
    MalformedResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlannerError {
    /// Failures where resubmitting the same action may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Llm(_) | Self::Timeout(_) | Self::Http(_) | Self::MalformedResponse(_)
        )
    }

    /// Failures that end the session: no later request can succeed.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Auth(_))
    }
}

/// Rejected user input. Never mutates session state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill all the fields (missing: {0})")]
    MissingField(&'static str),

    #[error("End date {end} is before start date {start}")]
    EndBeforeStart {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("Budget {budget} is below the minimum of {minimum}")]
    BudgetTooLow { budget: u64, minimum: u64 },

    #[error("At least one traveler is required")]
    NoTravelers,

    #[error("Follow-up message is empty")]
    EmptyFollowUp,

    #[error("Unknown {field}: {value}")]
    UnknownOption { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, PlannerError>;
