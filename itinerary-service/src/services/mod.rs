pub mod metrics;
pub mod planner;

pub use metrics::{get_metrics, init_metrics};
pub use planner::{MockPlanner, Planner};
