use crate::config::PlannerSettings;
use crate::conversation::{ConversationStore, SelectedHistory};
use crate::error::{PlannerError, Result, ValidationError};
use crate::llm::{ModelClient, Role};
use crate::trip::{build_itinerary_prompt, history_title, TripRequest};

/// Session state, derived from the store rather than tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing generated since start or the last reset.
    Idle,
    /// The last logged turn is a user message without a reply: a request is
    /// in flight, or the previous one failed and can be resubmitted.
    AwaitingGeneration,
    DisplayingResult,
    ViewingHistory,
}

/// A user action from the presentation layer.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    SubmitTrip(TripRequest),
    FollowUp(String),
    SelectHistory(usize),
    CloseHistory,
    ClearHistory,
}

/// What the presentation layer should show after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Itinerary(String),
    Reply(String),
    History(SelectedHistory),
    HistoryClosed,
    Cleared,
}

/// Drives the conversation: one transition at a time against the store and the model.
pub struct SessionController {
    store: ConversationStore,
    llm: Box<dyn ModelClient>,
    settings: PlannerSettings,
}

impl SessionController {
    pub fn new(llm: Box<dyn ModelClient>) -> Self {
        Self::with_settings(llm, PlannerSettings::default())
    }

    pub fn with_settings(llm: Box<dyn ModelClient>, settings: PlannerSettings) -> Self {
        Self {
            store: ConversationStore::new(),
            llm,
            settings,
        }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    pub fn state(&self) -> SessionState {
        if self.store.selected().is_some() {
            return SessionState::ViewingHistory;
        }
        if self.store.is_empty() {
            return SessionState::Idle;
        }
        match self.store.last_message().map(|m| m.role) {
            Some(Role::User) => SessionState::AwaitingGeneration,
            _ => SessionState::DisplayingResult,
        }
    }

    /// Handles one event to completion.
    pub async fn dispatch(&mut self, event: SessionEvent) -> Result<SessionOutcome> {
        match event {
            SessionEvent::SubmitTrip(trip) => {
                self.submit_trip(&trip).await.map(SessionOutcome::Itinerary)
            }
            SessionEvent::FollowUp(text) => {
                self.submit_follow_up(&text).await.map(SessionOutcome::Reply)
            }
            SessionEvent::SelectHistory(index) => {
                Ok(SessionOutcome::History(self.select_history(index).clone()))
            }
            SessionEvent::CloseHistory => {
                self.close_history();
                Ok(SessionOutcome::HistoryClosed)
            }
            SessionEvent::ClearHistory => {
                self.clear_history();
                Ok(SessionOutcome::Cleared)
            }
        }
    }

    /// Validates the form, sends the full log with the itinerary prompt, and
    /// records the reply as a new history entry.
    pub async fn submit_trip(&mut self, trip: &TripRequest) -> Result<String> {
        trip.validate(self.settings.min_budget)?;

        let prompt = build_itinerary_prompt(trip);
        let title = history_title(trip);
        self.store.append_user(prompt);
        let position = self.store.record_history_title(title.as_str());

        tracing::info!(
            title = %title,
            messages = self.store.len(),
            model = self.llm.model(),
            "generating itinerary"
        );
        let content = self.generate(self.store.messages().len()).await?;

        let index = self.store.append_assistant(content.as_str());
        self.store.bind_history_entry(position, index);
        tracing::info!(history = position, index, "itinerary generated");
        Ok(content)
    }

    /// Sends a follow-up with only the trailing window of the log as context.
    pub async fn submit_follow_up(&mut self, text: &str) -> Result<String> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyFollowUp.into());
        }

        self.store.append_user(text);
        let window = self.settings.follow_up_window;
        tracing::info!(window, model = self.llm.model(), "sending follow-up");
        let content = self.generate(window).await?;

        self.store.append_assistant(content.as_str());
        Ok(content)
    }

    /// Calls the model with the last `window` messages. The store is left
    /// untouched on failure.
    async fn generate(&self, window: usize) -> Result<String> {
        let context = self.store.last_n(window);
        match self.llm.generate(context).await {
            Ok(content) if content.trim().is_empty() => Err(PlannerError::MalformedResponse(
                "Empty completion".into(),
            )),
            Ok(content) => Ok(content),
            Err(e) => {
                tracing::warn!(transient = e.is_transient(), "generation failed: {e}");
                Err(e)
            }
        }
    }

    /// Shows history entry `index` (0-based). Out of range resolves to the
    /// unavailable sentinel.
    pub fn select_history(&mut self, index: usize) -> &SelectedHistory {
        self.store.select_history(index)
    }

    pub fn close_history(&mut self) {
        self.store.clear_selection();
    }

    /// Drops every exchange and history entry. Not undoable.
    pub fn clear_history(&mut self) {
        tracing::info!(messages = self.store.len(), "clearing all history");
        self.store.reset_all();
    }
}
