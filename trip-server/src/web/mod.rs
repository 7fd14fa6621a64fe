//! Web layer for the trip planner.
//!
//! Provides the HTTP endpoint for planning trips. Deliberately thin:
//! request validation and preference normalization happen here, all
//! decisions happen in the planner.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
