//! Data models for the Angkor Guide application
//!
//! This module contains the core domain models organized by concern:
//! - Place: a point of interest from the curated catalog
//! - Plan: the day-trip itinerary produced by the planner

pub mod place;
pub mod plan;

// Re-export all public types for convenient access
pub use place::{Language, Mood, Place, PlaceCategory};
pub use plan::{DayPlan, PlannedStop};
