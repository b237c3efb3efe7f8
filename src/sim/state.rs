//! Game state and core simulation types
//!
//! One `GameState` per game. It exclusively owns the round phase, the active
//! shot plan, the score tally and the RNG; nothing outside `sim` mutates them.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::flight::{self, Outcome};
use super::planner::{self, ShotPlan};
use super::rig::Rig;
use crate::consts::*;
use crate::settings::Tunables;

/// Externally visible round state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Ball is with the player, or loose after a make and waiting to be caught
    Holding,
    /// Ball is following a shot plan
    Flying,
    /// A shot missed; everything is frozen until restart
    RoundOver,
}

/// Where the ball is while the round state is `Holding`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Possession {
    /// Pinned to the rig (dribbling, or overhead while aiming)
    InHands,
    /// Released to free physics after a make
    Loose,
}

/// A shot in the air
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flight {
    pub plan: ShotPlan,
    /// Seconds since release
    pub elapsed: f32,
}

/// Internal phase. The shot plan only exists inside `Flying`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Holding(Possession),
    Flying(Flight),
    RoundOver,
}

impl Phase {
    pub fn round_state(&self) -> RoundState {
        match self {
            Phase::Holding(_) => RoundState::Holding,
            Phase::Flying(_) => RoundState::Flying,
            Phase::RoundOver => RoundState::RoundOver,
        }
    }
}

/// Points and attempts for the current round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    pub points: u32,
    pub shots_taken: u32,
}

/// The ball as seen by the physics collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec3,
    /// True while the sim drives the ball; false hands it to free physics
    pub kinematic: bool,
}

/// Gameplay events emitted during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotReleased { plan: ShotPlan },
    ShotLanded { outcome: Outcome, distance: f32, points: u32 },
    BallCaught,
    RoundOver { final_tally: ScoreTally },
    Restarted,
}

/// What the UI and physics layers read after each tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub ball_position: Vec3,
    pub ball_kinematic: bool,
    pub ball_in_hands: bool,
    pub round_state: RoundState,
    pub tally: ScoreTally,
    /// Show the round-over panel
    pub round_ended: bool,
    pub aiming: bool,
    pub holder: Rig,
    pub events: Vec<GameEvent>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    tunables: Tunables,
    rng: R,
    /// Shooter pose
    pub rig: Rig,
    /// Hoop position
    pub target: Vec3,
    phase: Phase,
    tally: ScoreTally,
    ball: Ball,
    /// Aim button currently held
    aiming: bool,
    /// Simulation time in seconds (drives the dribble bounce)
    clock: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState<Pcg32> {
    /// Create a game with the default seeded generator
    pub fn new(tunables: Tunables, target: Vec3, seed: u64) -> Self {
        Self::with_rng(tunables, target, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Create a game with a caller-supplied generator (replays, tests)
    ///
    /// Panics if the tunables are inconsistent.
    pub fn with_rng(tunables: Tunables, target: Vec3, rng: R) -> Self {
        if let Err(e) = tunables.validate() {
            panic!("invalid tunables: {e}");
        }
        assert!(target.is_finite(), "target must be finite");

        let rig = Rig::default();
        Self {
            tunables,
            rng,
            rig,
            target,
            phase: Phase::Holding(Possession::InHands),
            tally: ScoreTally::default(),
            ball: Ball {
                position: rig.dribble_anchor(),
                kinematic: true,
            },
            aiming: false,
            clock: 0.0,
            time_ticks: 0,
        }
    }

    /// Place the shooter before play starts
    pub fn with_rig(mut self, rig: Rig) -> Self {
        self.rig = rig;
        if self.phase == Phase::Holding(Possession::InHands) {
            self.ball.position = rig.dribble_anchor();
        }
        self
    }

    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn round_state(&self) -> RoundState {
        self.phase.round_state()
    }

    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn is_aiming(&self) -> bool {
        self.aiming
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// The plan of the shot in the air, if any
    pub fn active_plan(&self) -> Option<&ShotPlan> {
        match &self.phase {
            Phase::Flying(flight) => Some(&flight.plan),
            _ => None,
        }
    }

    pub fn ball_in_hands(&self) -> bool {
        self.phase == Phase::Holding(Possession::InHands)
    }

    pub fn ball_loose(&self) -> bool {
        self.phase == Phase::Holding(Possession::Loose)
    }

    /// Report where free physics has moved a loose ball. Ignored unless the
    /// ball is loose. Returns whether the position was applied.
    pub fn set_loose_ball_position(&mut self, position: Vec3) -> bool {
        if !self.ball_loose() {
            return false;
        }
        self.ball.position = position;
        true
    }

    pub(crate) fn advance_clock(&mut self, dt: f32) {
        self.time_ticks += 1;
        self.clock += dt;
    }

    pub(crate) fn set_aiming(&mut self, aiming: bool) {
        self.aiming = aiming;
    }

    /// Pin the ball to the rig: overhead while aiming, bouncing at the
    /// dribble anchor otherwise
    pub(crate) fn pose_ball_in_hands(&mut self) {
        if self.aiming {
            self.rig.face_toward(self.target);
            self.ball.position = self.rig.overhead_anchor();
        } else {
            let bounce = (self.clock * DRIBBLE_FREQUENCY).sin().abs() * DRIBBLE_HEIGHT;
            self.ball.position = self.rig.dribble_anchor() + Vec3::Y * bounce;
        }
    }

    /// Holding(InHands) -> Flying
    pub(crate) fn release_shot(&mut self) -> ShotPlan {
        debug_assert!(self.ball_in_hands());

        self.rig.face_toward(self.target);
        let plan = planner::plan(
            self.rig.overhead_anchor(),
            self.target,
            &self.tunables,
            &mut self.rng,
        );
        self.tally.shots_taken += 1;
        self.aiming = false;
        self.ball = Ball {
            position: plan.start,
            kinematic: true,
        };
        self.phase = Phase::Flying(Flight { plan, elapsed: 0.0 });
        plan
    }

    /// Move the ball along the active flight. Returns the outcome on the tick
    /// the flight completes, after which the plan is gone.
    pub(crate) fn advance_flight(&mut self, dt: f32) -> Option<(Outcome, f32)> {
        let Phase::Flying(flight) = &mut self.phase else {
            return None;
        };
        flight.elapsed += dt;
        let sample = flight::advance(&flight.plan, flight.elapsed);
        self.ball.position = sample.position;
        if !sample.complete {
            return None;
        }

        let distance = self.ball.position.distance(self.target);
        let outcome = flight::evaluate_outcome(self.ball.position, self.target, &self.tunables);
        // Either way the sim stops driving the ball
        self.ball.kinematic = false;

        if outcome.is_score() {
            self.tally.points += outcome.points();
            self.phase = Phase::Holding(Possession::Loose);
        } else {
            // Ball stays where the flight ended
            self.phase = Phase::RoundOver;
            self.aiming = false;
        }
        Some((outcome, distance))
    }

    /// Holding(Loose) -> Holding(InHands)
    pub(crate) fn catch_ball(&mut self) {
        debug_assert!(self.ball_loose());
        self.phase = Phase::Holding(Possession::InHands);
        self.ball = Ball {
            position: self.rig.dribble_anchor(),
            kinematic: true,
        };
    }

    /// RoundOver -> Holding(InHands) with a fresh tally
    pub(crate) fn restart(&mut self) {
        self.tally = ScoreTally::default();
        self.aiming = false;
        self.phase = Phase::Holding(Possession::InHands);
        self.ball = Ball {
            position: self.rig.dribble_anchor(),
            kinematic: true,
        };
    }

    /// Read-only view for collaborators
    pub fn snapshot(&self, events: Vec<GameEvent>) -> Snapshot {
        let round_state = self.round_state();
        Snapshot {
            ball_position: self.ball.position,
            ball_kinematic: self.ball.kinematic,
            ball_in_hands: self.ball_in_hands(),
            round_state,
            tally: self.tally,
            round_ended: round_state == RoundState::RoundOver,
            aiming: self.aiming,
            holder: self.rig,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> GameState {
        GameState::new(Tunables::default(), Vec3::new(0.0, 3.0, 8.0), 12345)
    }

    #[test]
    fn test_new_state_holds_ball() {
        let state = test_state();
        assert_eq!(state.round_state(), RoundState::Holding);
        assert!(state.ball_in_hands());
        assert!(state.ball().kinematic);
        assert_eq!(state.ball().position, state.rig.dribble_anchor());
        assert_eq!(state.tally(), ScoreTally::default());
        assert!(state.active_plan().is_none());
    }

    #[test]
    fn test_release_creates_plan() {
        let mut state = test_state();
        let plan = state.release_shot();
        assert_eq!(state.round_state(), RoundState::Flying);
        assert_eq!(state.active_plan(), Some(&plan));
        assert_eq!(state.tally().shots_taken, 1);
        assert_eq!(state.ball().position, plan.start);
        assert_eq!(plan.start, state.rig.overhead_anchor());
    }

    #[test]
    fn test_flight_completion_drops_plan() {
        let mut state = test_state();
        let plan = state.release_shot();
        assert!(state.advance_flight(plan.flight_duration * 0.5).is_none());
        let (outcome, _) = state.advance_flight(plan.flight_duration).unwrap();
        // Default drift never exceeds the perfect radius
        assert_eq!(outcome, Outcome::Perfect);
        assert!(state.active_plan().is_none());
        assert!(state.ball_loose());
        assert!(!state.ball().kinematic);
        assert_eq!(state.tally().points, 2);
        assert!(state.advance_flight(1.0).is_none());
    }

    #[test]
    fn test_loose_ball_position_only_when_loose() {
        let mut state = test_state();
        assert!(!state.set_loose_ball_position(Vec3::ONE));
        let plan = state.release_shot();
        state.advance_flight(plan.flight_duration);
        assert!(state.set_loose_ball_position(Vec3::ONE));
        assert_eq!(state.ball().position, Vec3::ONE);
    }

    #[test]
    fn test_catch_snaps_to_dribble() {
        let mut state = test_state();
        let plan = state.release_shot();
        state.advance_flight(plan.flight_duration);
        state.catch_ball();
        assert!(state.ball_in_hands());
        assert!(state.ball().kinematic);
        assert_eq!(state.ball().position, state.rig.dribble_anchor());
    }

    #[test]
    #[should_panic(expected = "invalid tunables")]
    fn test_unordered_radii_panic() {
        let tunables = Tunables {
            perfect_shot_radius: 2.0,
            scoring_radius: 1.0,
            ..Default::default()
        };
        GameState::new(tunables, Vec3::ZERO, 1);
    }
}
