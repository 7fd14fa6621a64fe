//! Trip planning engine.
//!
//! This module implements the core segmentation algorithm that answers:
//! "how should this trip be broken into legs, and by what transport?"
//!
//! Classification by direct distance decides the shape (a single local
//! leg, or an intercity journey routed through railway hubs); a decision
//! table picks the mode for each leg; cost and duration are estimated
//! from per-mode policy constants.

mod config;
mod estimate;
mod hubs;
mod segmenter;
mod transport;


pub use config::PlannerConfig;
pub use estimate::{estimate_cost, estimate_duration};
pub use hubs::{HubDirectory, HubResolver, TripType, india_termini};
pub use segmenter::{PlanError, PlanRequest, TripPlanner};
pub use transport::select_transport;
