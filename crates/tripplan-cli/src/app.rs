use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tripplan_core::config::Settings;
use tripplan_core::{
    ModelClient, PlannerError, SelectedHistory, SessionController, SessionEvent, SessionOutcome,
    TripRequest,
};

use crate::commands::{handle_command, CommandResult};
use crate::form::{FormField, TripForm};

const RULE: &str = "────────────────────────────────────────────────────────────";

/// Generate a single itinerary and print it.
pub async fn run_single_plan(settings: &Settings, trip: TripRequest) -> Result<()> {
    let llm = settings.build_model_client()?;
    let mut session = SessionController::with_settings(llm, settings.planner.clone());

    eprintln!("Generating your AI travel plan...");
    let itinerary = session.submit_trip(&trip).await?;
    println!("{itinerary}");
    Ok(())
}

/// Interactive session: trip form, follow-ups, and history on one line-based prompt.
pub async fn run_repl(settings: Settings, llm: Box<dyn ModelClient>) -> Result<()> {
    let mut session = SessionController::with_settings(llm, settings.planner.clone());
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("AI Travel Planner 🌍");
    if let Some(greeting) = session.store().messages().get(1) {
        println!("{}", greeting.content.replace("the form above", "the form (/plan)"));
    }
    println!("Type /help for commands.\n");

    loop {
        let Some(line) = read_line(&mut input, "> ").await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let event = match handle_command(&line) {
            CommandResult::Quit => break,
            CommandResult::Message(msg) => {
                println!("{msg}");
                continue;
            }
            CommandResult::History => {
                print_history(&session);
                continue;
            }
            CommandResult::ShowStatus => {
                print_status(&session);
                continue;
            }
            CommandResult::Plan => match fill_form(&mut input, &session).await? {
                Some(trip) => SessionEvent::SubmitTrip(trip),
                None => break,
            },
            CommandResult::Show(index) => SessionEvent::SelectHistory(index),
            CommandResult::Close => SessionEvent::CloseHistory,
            CommandResult::Clear => SessionEvent::ClearHistory,
            CommandResult::NotACommand => SessionEvent::FollowUp(line),
            CommandResult::FollowUp(text) => SessionEvent::FollowUp(text),
        };

        match &event {
            SessionEvent::SubmitTrip(_) => eprintln!("Generating your AI travel plan..."),
            SessionEvent::FollowUp(_) => eprintln!("Processing..."),
            _ => {}
        }

        match session.dispatch(event).await {
            Ok(outcome) => render_outcome(outcome),
            Err(e) if e.is_fatal() => {
                tracing::error!("stopping session: {e}");
                return Err(e.into());
            }
            Err(e) => render_error(&e),
        }
    }

    Ok(())
}

async fn read_line(input: &mut Lines<BufReader<Stdin>>, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    Ok(input.next_line().await?)
}

/// Walks the trip form. `None` means input ended mid-form.
async fn fill_form(
    input: &mut Lines<BufReader<Stdin>>,
    session: &SessionController,
) -> Result<Option<TripRequest>> {
    let today = chrono::Local::now().date_naive();
    let mut form = TripForm::new(today, session.settings());

    for field in FormField::ALL {
        loop {
            let Some(answer) = read_line(input, &form.prompt(field)).await? else {
                return Ok(None);
            };
            match form.answer(field, &answer) {
                Ok(()) => break,
                Err(msg) => println!("  {msg}"),
            }
        }
    }
    Ok(Some(form.into_request()))
}

fn render_outcome(outcome: SessionOutcome) {
    match outcome {
        SessionOutcome::Itinerary(text) => {
            println!("Itinerary generated successfully!\n{RULE}\n{text}\n{RULE}");
        }
        SessionOutcome::Reply(text) => {
            println!("Plan updated.\n{RULE}\n{text}\n{RULE}");
        }
        SessionOutcome::History(view) => {
            println!("Selected Trip Segment\n{RULE}\n{}\n{RULE}", view.content());
            if view != SelectedHistory::Unavailable {
                println!("(/close to dismiss)");
            }
        }
        SessionOutcome::HistoryClosed => println!("Closed."),
        SessionOutcome::Cleared => println!("All history cleared."),
    }
}

fn render_error(e: &PlannerError) {
    match e {
        PlannerError::Validation(v) => eprintln!("{v}"),
        e if e.is_transient() => {
            tracing::warn!("generation failed: {e}");
            eprintln!("Error: {e}\nYour message was kept; resubmit to try again.")
        }
        e => {
            tracing::warn!("request rejected: {e}");
            eprintln!("Error: {e}")
        }
    }
}

fn print_history(session: &SessionController) {
    let titles = session.store().history_titles();
    if titles.is_empty() {
        println!("No trips yet. Use /plan to create one.");
        return;
    }
    println!("Trip Segments History");
    for (i, title) in titles.iter().enumerate() {
        println!("  {}. {title}", i + 1);
    }
}

fn print_status(session: &SessionController) {
    let store = session.store();
    println!(
        "State: {:?}\nMessages: {}\nItineraries: {}",
        session.state(),
        store.len(),
        store.history().len()
    );
}
