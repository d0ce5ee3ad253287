pub mod itinerary;

pub use itinerary::{Budget, DayPlan, ItineraryRequest, ItineraryResponse};
