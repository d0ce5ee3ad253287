use axum::{body::Bytes, extract::State, Json};
use metrics::counter;

use crate::models::{ItineraryRequest, ItineraryResponse};
use crate::startup::AppState;

/// `POST /generate-itinerary`: echo the trip parameters and attach the
/// planner's day-by-day plan.
///
/// The body is decoded permissively: anything that is not a JSON object
/// with the expected field types (including an empty or absent body) is
/// treated as the empty request, so every field echoes as `null`. The
/// endpoint never rejects input.
#[tracing::instrument(skip(state, body))]
pub async fn generate_itinerary(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<ItineraryResponse> {
    let request = serde_json::from_slice::<ItineraryRequest>(&body).unwrap_or_default();

    tracing::debug!(
        origin = ?request.origin,
        destination = ?request.destination,
        "generating itinerary"
    );

    let plan = state.planner.plan(&request).await;

    counter!("itineraries_generated_total").increment(1);

    Json(ItineraryResponse {
        origin: request.origin,
        destination: request.destination,
        budget: request.budget,
        plan,
    })
}
