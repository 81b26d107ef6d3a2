use crate::constants::trip::ITINERARY_SECTIONS;
use crate::trip::TripRequest;
use std::fmt::Write;

/// Builds the user prompt for an itinerary request.
pub fn build_itinerary_prompt(trip: &TripRequest) -> String {
    let mut prompt = String::new();
    prompt.push_str("Create a detailed daily travel itinerary with the following information:\n\n");
    let _ = writeln!(prompt, "Starting from: {}", trip.starting_point.trim());
    let _ = writeln!(prompt, "Destinations to visit: {}", trip.destination_list().join(", "));
    let _ = writeln!(prompt, "Trip start: {}", trip.start_date);
    let _ = writeln!(prompt, "Trip end: {}", trip.end_date);
    let _ = writeln!(prompt, "Number of travelers: {}", trip.travelers);
    let _ = writeln!(prompt, "Budget: {} {}", trip.budget, trip.currency);
    let _ = writeln!(prompt, "Travel style: {}", trip.trip_type);
    prompt.push_str("\nProvide a day-by-day plan including:\n");
    for (i, section) in ITINERARY_SECTIONS.iter().enumerate() {
        let _ = writeln!(prompt, "{}. {}", i + 1, section);
    }
    prompt
}

/// Sidebar title: `"{start} → {destinations} ({start_date} → {end_date})"`.
pub fn history_title(trip: &TripRequest) -> String {
    format!(
        "{} → {} ({} → {})",
        trip.starting_point.trim(),
        trip.destination_list().join(", "),
        trip.start_date,
        trip.end_date
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::{Currency, TripType};
    use chrono::NaiveDate;

    fn trip() -> TripRequest {
        TripRequest {
            starting_point: "Paris".into(),
            destinations: "Rome,Venice ,".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
            travelers: 2,
            budget: 3000,
            currency: Currency::Eur,
            trip_type: TripType::Leisure,
        }
    }

    #[test]
    fn prompt_embeds_every_field_and_section() {
        let prompt = build_itinerary_prompt(&trip());
        assert!(prompt.contains("Starting from: Paris"));
        assert!(prompt.contains("Destinations to visit: Rome, Venice\n"));
        assert!(prompt.contains("Trip start: 2024-06-01"));
        assert!(prompt.contains("Trip end: 2024-06-05"));
        assert!(prompt.contains("Number of travelers: 2"));
        assert!(prompt.contains("Budget: 3000 EUR"));
        assert!(prompt.contains("Travel style: Leisure"));
        for (i, section) in ITINERARY_SECTIONS.iter().enumerate() {
            assert!(prompt.contains(&format!("{}. {}", i + 1, section)));
        }
    }

    #[test]
    fn title_normalizes_destinations() {
        assert_eq!(
            history_title(&trip()),
            "Paris → Rome, Venice (2024-06-01 → 2024-06-05)"
        );
    }
}
