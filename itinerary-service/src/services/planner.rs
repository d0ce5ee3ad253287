use crate::models::{DayPlan, ItineraryRequest};
use async_trait::async_trait;

/// Produces the day-by-day plan for a trip request.
///
/// This is the seam a real planning engine implements. `MockPlanner` is
/// the only implementation today.
#[async_trait]
pub trait Planner: Send + Sync {
    async fn plan(&self, request: &ItineraryRequest) -> Vec<DayPlan>;
}

/// Planner returning the same two-day plan for every request.
pub struct MockPlanner;

#[async_trait]
impl Planner for MockPlanner {
    async fn plan(&self, _request: &ItineraryRequest) -> Vec<DayPlan> {
        vec![
            DayPlan {
                day: 1,
                activities: vec!["Visit downtown".to_string(), "Try local food".to_string()],
            },
            DayPlan {
                day: 2,
                activities: vec!["Museum".to_string(), "Beach sunset".to_string()],
            },
        ]
    }
}
