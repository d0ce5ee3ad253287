pub mod health;
pub mod itinerary;

pub use health::{health_check, readiness_check};
pub use itinerary::generate_itinerary;
