/// Result of processing a slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Display a message to the user.
    Message(String),
    /// Fill out the trip form and generate an itinerary.
    Plan,
    /// List history titles.
    History,
    /// Show a history entry (0-based).
    Show(usize),
    /// Close the history view.
    Close,
    /// Clear all history.
    Clear,
    /// Show session status.
    ShowStatus,
    /// Quit the application.
    Quit,
    /// Not a command - treat as a follow-up.
    NotACommand,
    /// Escaped follow-up (`//text` sends `/text`).
    FollowUp(String),
}

pub fn handle_command(input: &str) -> CommandResult {
    let input = input.trim();
    if let Some(escaped) = input.strip_prefix("//") {
        return CommandResult::FollowUp(format!("/{escaped}"));
    }
    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0];
    let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

    match cmd {
        "/help" | "/h" => show_help(),
        "/exit" | "/quit" | "/q" => CommandResult::Quit,
        "/plan" | "/new" => CommandResult::Plan,
        "/history" | "/ls" => CommandResult::History,
        "/show" => match arg.parse::<usize>() {
            Ok(n) if n >= 1 => CommandResult::Show(n - 1),
            _ => CommandResult::Message("Usage: /show <number>  (see /history)".into()),
        },
        "/close" => CommandResult::Close,
        "/clear" => CommandResult::Clear,
        "/status" => CommandResult::ShowStatus,
        "/version" => CommandResult::Message(format!("TripPlan v{}", env!("CARGO_PKG_VERSION"))),
        _ => {
            if input.starts_with('/') {
                CommandResult::Message(format!("Unknown command: {cmd}. Type /help for commands."))
            } else {
                CommandResult::NotACommand
            }
        }
    }
}

fn show_help() -> CommandResult {
    CommandResult::Message(
        "TripPlan Commands:\n\
         \n  /plan           Fill out the trip form and get a travel plan\
         \n  /history        List generated itineraries\
         \n  /show <n>       Show itinerary number n\
         \n  /close          Close the itinerary view\
         \n  /clear          Clear all history\
         \n  /status         Show session status\
         \n  /quit           Exit\
         \n\nAnything else is sent as a follow-up to modify the plan.\
         \nStart a follow-up with // to send a leading slash (//2 more days)."
            .into(),
    )
}
