mod request;
mod prompt;

pub use request::{Currency, TripRequest, TripType};
pub use prompt::{build_itinerary_prompt, history_title};
