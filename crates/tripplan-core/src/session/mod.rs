mod controller;

pub use controller::{SessionController, SessionEvent, SessionOutcome, SessionState};
