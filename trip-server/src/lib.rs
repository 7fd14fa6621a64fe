//! Trip planning server.
//!
//! A web service that answers: "how do I get from here to there, and
//! what does each stretch of the journey cost?" It segments a door-to-door
//! trip into transport legs, routing long journeys through railway hubs.

pub mod cache;
pub mod domain;
pub mod geo;
pub mod planner;
pub mod web;
