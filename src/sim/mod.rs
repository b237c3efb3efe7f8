//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick`
//! - Seeded or injected RNG only
//! - No rendering, input-device or physics-engine dependencies

pub mod flight;
pub mod planner;
pub mod reach;
pub mod rig;
pub mod state;
pub mod tick;

pub use flight::{FlightSample, Outcome, advance, arc_offset, evaluate_outcome};
pub use planner::{ShotPlan, arc_height, drift_force, flight_duration, plan};
pub use reach::{CATCH_RADIUS, ReachResult, within_reach};
pub use rig::Rig;
pub use state::{
    Ball, Flight, GameEvent, GameState, Phase, Possession, RoundState, ScoreTally, Snapshot,
};
pub use tick::{TickInput, tick};
