// Library interface for tripplan-cli, so integration tests can reach the
// command parser and form handling.

pub mod app;
pub mod commands;
pub mod form;

pub use commands::{handle_command, CommandResult};
pub use form::{FormField, TripForm};
