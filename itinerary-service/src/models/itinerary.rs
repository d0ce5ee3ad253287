use serde::{Deserialize, Serialize};

/// Trip parameters supplied by the caller.
///
/// Every field is optional; a missing field is echoed back as `null`.
/// The default value (all `None`) doubles as the fallback for bodies
/// that do not decode.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ItineraryRequest {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub budget: Option<Budget>,
}

/// Budget exactly as the caller sent it.
///
/// Numbers stay JSON numbers (no float coercion) and strings stay
/// strings, so the echo in the response is byte-faithful.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Budget {
    Amount(serde_json::Number),
    Text(String),
}

/// Response payload for `POST /generate-itinerary`: the request fields
/// echoed verbatim plus the day-by-day plan.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ItineraryResponse {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub budget: Option<Budget>,
    pub plan: Vec<DayPlan>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    pub day: u32,
    pub activities: Vec<String>,
}
