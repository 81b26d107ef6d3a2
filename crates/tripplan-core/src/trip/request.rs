use crate::constants::trip::{MIN_BUDGET, MIN_TRAVELERS};
use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Inr,
    Eur,
    Gbp,
    Jpy,
    Aud,
    Cad,
    Cny,
}

impl Currency {
    pub const ALL: [Currency; 8] = [
        Currency::Usd,
        Currency::Inr,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Aud,
        Currency::Cad,
        Currency::Cny,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Inr => "INR",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Aud => "AUD",
            Currency::Cad => "CAD",
            Currency::Cny => "CNY",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownOption {
                field: "currency",
                value: wanted.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TripType {
    #[default]
    Adventure,
    Leisure,
    Cultural,
    Romantic,
    Family,
}

impl TripType {
    pub const ALL: [TripType; 5] = [
        TripType::Adventure,
        TripType::Leisure,
        TripType::Cultural,
        TripType::Romantic,
        TripType::Family,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TripType::Adventure => "Adventure",
            TripType::Leisure => "Leisure",
            TripType::Cultural => "Cultural",
            TripType::Romantic => "Romantic",
            TripType::Family => "Family",
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TripType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TripType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownOption {
                field: "trip type",
                value: wanted.to_string(),
            })
    }
}

/// Trip parameters captured from the form. Turned into a prompt and dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripRequest {
    pub starting_point: String,
    /// Free text, comma-separated.
    pub destinations: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travelers: u32,
    pub budget: u64,
    pub currency: Currency,
    pub trip_type: TripType,
}

impl TripRequest {
    /// A request with the form's defaults: today to tomorrow, one traveler, minimum budget.
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self {
            starting_point: String::new(),
            destinations: String::new(),
            start_date: today,
            end_date: today.succ_opt().unwrap_or(today),
            travelers: MIN_TRAVELERS,
            budget: MIN_BUDGET,
            currency: Currency::default(),
            trip_type: TripType::default(),
        }
    }

    /// Destination names, trimmed, blanks dropped.
    pub fn destination_list(&self) -> Vec<&str> {
        self.destinations
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .collect()
    }

    pub fn validate(&self, min_budget: u64) -> Result<(), ValidationError> {
        if self.starting_point.trim().is_empty() {
            return Err(ValidationError::MissingField("starting point"));
        }
        if self.destination_list().is_empty() {
            return Err(ValidationError::MissingField("destinations"));
        }
        if self.end_date < self.start_date {
            return Err(ValidationError::EndBeforeStart {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.travelers < MIN_TRAVELERS {
            return Err(ValidationError::NoTravelers);
        }
        if self.budget < min_budget {
            return Err(ValidationError::BudgetTooLow {
                budget: self.budget,
                minimum: min_budget,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn paris_trip() -> TripRequest {
        TripRequest {
            starting_point: "Paris".into(),
            destinations: "Rome, Venice".into(),
            start_date: date(2024, 6, 1),
            end_date: date(2024, 6, 5),
            travelers: 2,
            budget: 3000,
            currency: Currency::Eur,
            trip_type: TripType::Leisure,
        }
    }

    #[test]
    fn valid_request_passes() {
        assert_eq!(paris_trip().validate(MIN_BUDGET), Ok(()));
    }

    #[test]
    fn same_day_trip_is_valid() {
        let mut trip = paris_trip();
        trip.end_date = trip.start_date;
        assert!(trip.validate(MIN_BUDGET).is_ok());
    }

    #[test]
    fn blank_fields_are_missing() {
        let mut trip = paris_trip();
        trip.starting_point = "   ".into();
        assert_eq!(
            trip.validate(MIN_BUDGET),
            Err(ValidationError::MissingField("starting point"))
        );

        let mut trip = paris_trip();
        trip.destinations = " , ,".into();
        assert_eq!(
            trip.validate(MIN_BUDGET),
            Err(ValidationError::MissingField("destinations"))
        );
    }

    #[test]
    fn end_before_start_rejected() {
        let mut trip = paris_trip();
        trip.end_date = date(2024, 5, 31);
        assert!(matches!(
            trip.validate(MIN_BUDGET),
            Err(ValidationError::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn budget_and_travelers_bounds() {
        let mut trip = paris_trip();
        trip.budget = 499;
        assert_eq!(
            trip.validate(MIN_BUDGET),
            Err(ValidationError::BudgetTooLow {
                budget: 499,
                minimum: 500
            })
        );

        let mut trip = paris_trip();
        trip.travelers = 0;
        assert_eq!(trip.validate(MIN_BUDGET), Err(ValidationError::NoTravelers));
    }

    #[test]
    fn enums_parse_case_insensitively() {
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::Eur);
        assert_eq!(" Cny ".parse::<Currency>().unwrap(), Currency::Cny);
        assert_eq!("romantic".parse::<TripType>().unwrap(), TripType::Romantic);
        assert!("BTC".parse::<Currency>().is_err());
        assert!("Business".parse::<TripType>().is_err());
    }

    #[test]
    fn defaults_span_one_day() {
        let trip = TripRequest::with_defaults(date(2024, 12, 31));
        assert_eq!(trip.end_date, date(2025, 1, 1));
        assert_eq!(trip.travelers, 1);
        assert_eq!(trip.budget, 500);
        assert_eq!(trip.currency, Currency::Usd);
        assert_eq!(trip.trip_type, TripType::Adventure);
    }
}
