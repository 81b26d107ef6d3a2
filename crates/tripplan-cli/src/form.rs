use chrono::{Days, NaiveDate};
use tripplan_core::config::PlannerSettings;
use tripplan_core::{Currency, TripRequest, TripType};

/// Trip form fields, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    StartingPoint,
    Destinations,
    StartDate,
    EndDate,
    Travelers,
    Budget,
    Currency,
    TripType,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::StartingPoint,
        FormField::Destinations,
        FormField::StartDate,
        FormField::EndDate,
        FormField::Travelers,
        FormField::Budget,
        FormField::Currency,
        FormField::TripType,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::StartingPoint => "Starting Point (City or Landmark)",
            FormField::Destinations => "Destination(s), comma-separated",
            FormField::StartDate => "Starting Date (YYYY-MM-DD)",
            FormField::EndDate => "Ending Date (YYYY-MM-DD)",
            FormField::Travelers => "Number of Travelers",
            FormField::Budget => "Budget",
            FormField::Currency => "Currency",
            FormField::TripType => "Trip Type",
        }
    }
}

/// Collects answers field by field. Blank answers keep the current value.
pub struct TripForm {
    request: TripRequest,
    min_budget: u64,
}

impl TripForm {
    pub fn new(today: NaiveDate, settings: &PlannerSettings) -> Self {
        let mut request = TripRequest::with_defaults(today);
        request.budget = settings.min_budget;
        request.currency = settings.default_currency;
        request.trip_type = settings.default_trip_type;
        Self {
            request,
            min_budget: settings.min_budget,
        }
    }

    /// Prompt line for `field`, showing the value a blank answer keeps.
    pub fn prompt(&self, field: FormField) -> String {
        let r = &self.request;
        match field {
            FormField::StartingPoint => format!("{} (e.g. New York): ", field.label()),
            FormField::Destinations => format!("{} (e.g. Paris, London, Rome): ", field.label()),
            FormField::StartDate => format!("{} [{}]: ", field.label(), r.start_date),
            FormField::EndDate => format!("{} [{}]: ", field.label(), r.end_date),
            FormField::Travelers => format!("{} [{}]: ", field.label(), r.travelers),
            FormField::Budget => format!("{} (min {}) [{}]: ", field.label(), self.min_budget, r.budget),
            FormField::Currency => {
                let options: Vec<&str> = Currency::ALL.iter().map(|c| c.code()).collect();
                format!("{} ({}) [{}]: ", field.label(), options.join("/"), r.currency)
            }
            FormField::TripType => {
                let options: Vec<&str> = TripType::ALL.iter().map(|t| t.name()).collect();
                format!("{} ({}) [{}]: ", field.label(), options.join("/"), r.trip_type)
            }
        }
    }

    /// Applies one answer. On error the form is unchanged and the field should be asked again.
    pub fn answer(&mut self, field: FormField, input: &str) -> Result<(), String> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(());
        }
        let r = &mut self.request;
        match field {
            FormField::StartingPoint => r.starting_point = input.to_string(),
            FormField::Destinations => r.destinations = input.to_string(),
            FormField::StartDate => {
                let date = parse_date(input)?;
                r.start_date = date;
                r.end_date = date.checked_add_days(Days::new(1)).unwrap_or(date);
            }
            FormField::EndDate => {
                let date = parse_date(input)?;
                if date < r.start_date {
                    return Err(format!("Ending date must be on or after {}", r.start_date));
                }
                r.end_date = date;
            }
            FormField::Travelers => {
                let n: u32 = input
                    .parse()
                    .map_err(|_| format!("'{input}' is not a whole number"))?;
                if n < 1 {
                    return Err("At least one traveler is required".into());
                }
                r.travelers = n;
            }
            FormField::Budget => {
                let budget: u64 = input
                    .parse()
                    .map_err(|_| format!("'{input}' is not a whole number"))?;
                if budget < self.min_budget {
                    return Err(format!("Budget must be at least {}", self.min_budget));
                }
                r.budget = budget;
            }
            FormField::Currency => r.currency = input.parse::<Currency>().map_err(|e| format!("{e}"))?,
            FormField::TripType => r.trip_type = input.parse::<TripType>().map_err(|e| format!("{e}"))?,
        }
        Ok(())
    }

    pub fn request(&self) -> &TripRequest {
        &self.request
    }

    pub fn into_request(self) -> TripRequest {
        self.request
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| format!("'{}' is not a date like 2024-06-01", input.trim()))
}
