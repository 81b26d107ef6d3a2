use chrono::NaiveDate;
use tripplan_cli::commands::{handle_command, CommandResult};
use tripplan_cli::form::{parse_date, FormField, TripForm};
use tripplan_core::config::PlannerSettings;
use tripplan_core::{Currency, TripType};

// ========================================================================
// Command Parsing Tests (commands.rs)
// ========================================================================

#[test]
fn test_help_command() {
    let result = handle_command("/help");
    if let CommandResult::Message(msg) = result {
        assert!(msg.contains("TripPlan Commands"));
        assert!(msg.contains("/plan"));
        assert!(msg.contains("/show"));
    } else {
        panic!("expected help message");
    }
}

#[test]
fn test_quit_aliases() {
    for cmd in ["/quit", "/exit", "/q"] {
        assert_eq!(handle_command(cmd), CommandResult::Quit);
    }
}

#[test]
fn test_session_commands() {
    assert_eq!(handle_command("/plan"), CommandResult::Plan);
    assert_eq!(handle_command("/history"), CommandResult::History);
    assert_eq!(handle_command("/close"), CommandResult::Close);
    assert_eq!(handle_command("/clear"), CommandResult::Clear);
    assert_eq!(handle_command("/status"), CommandResult::ShowStatus);
}

#[test]
fn test_show_is_one_based() {
    assert_eq!(handle_command("/show 1"), CommandResult::Show(0));
    assert_eq!(handle_command("/show  3 "), CommandResult::Show(2));
}

#[test]
fn test_show_rejects_bad_index() {
    for cmd in ["/show", "/show 0", "/show two", "/show -1"] {
        assert!(
            matches!(handle_command(cmd), CommandResult::Message(ref m) if m.contains("Usage")),
            "{cmd} should print usage"
        );
    }
}

#[test]
fn test_unknown_command() {
    match handle_command("/teleport") {
        CommandResult::Message(msg) => assert!(msg.contains("Unknown command: /teleport")),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_plain_text_is_follow_up() {
    assert_eq!(handle_command("Make day 2 more relaxed"), CommandResult::NotACommand);
}

// ========================================================================
// Trip Form Tests (form.rs)
// ========================================================================

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn form() -> TripForm {
    TripForm::new(today(), &PlannerSettings::default())
}

#[test]
fn test_form_defaults() {
    let form = form();
    let trip = form.request();
    assert_eq!(trip.start_date, today());
    assert_eq!(trip.end_date, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
    assert_eq!(trip.travelers, 1);
    assert_eq!(trip.budget, 500);
    assert_eq!(trip.currency, Currency::Usd);
    assert_eq!(trip.trip_type, TripType::Adventure);
}

#[test]
fn test_form_full_answers() {
    let mut form = form();
    let answers = [
        "Paris",
        "Rome, Venice",
        "2024-06-01",
        "2024-06-05",
        "2",
        "3000",
        "eur",
        "leisure",
    ];
    for (field, answer) in FormField::ALL.into_iter().zip(answers) {
        form.answer(field, answer).unwrap();
    }

    let trip = form.into_request();
    assert_eq!(trip.starting_point, "Paris");
    assert_eq!(trip.destination_list(), vec!["Rome", "Venice"]);
    assert_eq!(trip.end_date, NaiveDate::from_ymd_opt(2024, 6, 5).unwrap());
    assert_eq!(trip.travelers, 2);
    assert_eq!(trip.budget, 3000);
    assert_eq!(trip.currency, Currency::Eur);
    assert_eq!(trip.trip_type, TripType::Leisure);
    assert!(trip.validate(500).is_ok());
}

#[test]
fn test_form_start_date_moves_end_default() {
    let mut form = form();
    form.answer(FormField::StartDate, "2024-07-10").unwrap();
    assert_eq!(
        form.request().end_date,
        NaiveDate::from_ymd_opt(2024, 7, 11).unwrap()
    );
}

#[test]
fn test_form_rejects_bad_answers_without_change() {
    let mut form = form();
    assert!(form.answer(FormField::EndDate, "2024-05-01").is_err());
    assert!(form.answer(FormField::Travelers, "0").is_err());
    assert!(form.answer(FormField::Budget, "499").is_err());
    assert!(form.answer(FormField::Budget, "lots").is_err());
    assert!(form.answer(FormField::Currency, "BTC").is_err());
    assert!(form.answer(FormField::TripType, "Business").is_err());

    let trip = form.request();
    assert_eq!(trip.end_date, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
    assert_eq!(trip.travelers, 1);
    assert_eq!(trip.budget, 500);
}

#[test]
fn test_form_blank_keeps_value_and_required_fields_stay_empty() {
    let mut form = form();
    form.answer(FormField::StartingPoint, "").unwrap();
    form.answer(FormField::Travelers, "  ").unwrap();

    assert_eq!(form.request().travelers, 1);
    assert!(form.request().validate(500).is_err());
}

#[test]
fn test_form_prompts_show_defaults_and_options() {
    let form = form();
    assert!(form.prompt(FormField::StartDate).contains("[2024-06-01]"));
    assert!(form.prompt(FormField::Currency).contains("USD/INR/EUR/GBP/JPY/AUD/CAD/CNY"));
    assert!(form
        .prompt(FormField::TripType)
        .contains("Adventure/Leisure/Cultural/Romantic/Family"));
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date(" 2024-02-29 ").unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert!(parse_date("2023-02-29").is_err());
    assert!(parse_date("06/01/2024").is_err());
}

#[test]
fn test_double_slash_sends_literal_follow_up() {
    assert_eq!(
        handle_command("//2 more days in Rome"),
        CommandResult::FollowUp("/2 more days in Rome".into())
    );
    assert_eq!(handle_command("  //plan "), CommandResult::FollowUp("/plan".into()));
}

#[test]
fn test_help_mentions_slash_escape() {
    match handle_command("/help") {
        CommandResult::Message(msg) => assert!(msg.contains("//")),
        other => panic!("unexpected {other:?}"),
    }
}
