//! Per-frame simulation tick
//!
//! Core game loop that advances the round deterministically. At most one
//! round transition fires per tick; flight landing is evaluated after the
//! ball is moved in the same tick.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GameState, Phase, Possession, Snapshot};

/// Input events for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Raw movement axis (x = strafe, y = forward)
    pub movement: Vec2,
    /// Aim button went down
    pub aim_pressed: bool,
    /// Aim button came up (releases the shot)
    pub aim_released: bool,
    /// Physics reports the ball re-entered the player's hands
    pub ball_caught: bool,
    /// Restart button on the round-over panel
    pub restart: bool,
}

/// Advance the game by `dt` seconds and report what collaborators need
///
/// Panics if `dt` is negative or not finite.
pub fn tick<R: Rng>(state: &mut GameState<R>, input: &TickInput, dt: f32) -> Snapshot {
    assert!(dt.is_finite() && dt >= 0.0, "dt must be finite and >= 0 (got {dt})");

    let mut events = Vec::new();

    // Round over: only restart gets through
    if matches!(state.phase(), Phase::RoundOver) {
        if input.restart {
            state.restart();
            log::info!("Round restarted");
            events.push(GameEvent::Restarted);
        }
        return state.snapshot(events);
    }

    if input.restart {
        log::debug!("Restart ignored: round still in progress");
    }

    state.advance_clock(dt);

    let move_speed = state.tunables().move_speed;
    state.rig.step(input.movement, move_speed, dt);

    if input.aim_pressed {
        state.set_aiming(true);
    }
    if input.aim_released {
        state.set_aiming(false);
    }

    let phase = *state.phase();
    match phase {
        Phase::Holding(Possession::Loose) => {
            if input.ball_caught {
                state.catch_ball();
                log::debug!("Ball caught");
                events.push(GameEvent::BallCaught);
            } else if input.aim_released {
                log::debug!("Release ignored: ball not in hands");
            }
        }

        Phase::Holding(Possession::InHands) => {
            if input.aim_released {
                let plan = state.release_shot();
                log::debug!("Shot {} released", state.tally().shots_taken);
                events.push(GameEvent::ShotReleased { plan });
            } else {
                state.pose_ball_in_hands();
            }
        }

        Phase::Flying(_) => {
            if input.ball_caught {
                log::debug!("Catch ignored: ball in flight");
            }
            if let Some((outcome, distance)) = state.advance_flight(dt) {
                let tally = state.tally();
                events.push(GameEvent::ShotLanded {
                    outcome,
                    distance,
                    points: outcome.points(),
                });
                if outcome.is_score() {
                    log::info!(
                        "{} ({:.2} from hoop) score={} shots={}",
                        outcome.as_str(),
                        distance,
                        tally.points,
                        tally.shots_taken
                    );
                } else {
                    log::info!(
                        "Missed by {:.2}: round over, final score {} in {} shots",
                        distance,
                        tally.points,
                        tally.shots_taken
                    );
                    events.push(GameEvent::RoundOver { final_tally: tally });
                }
            }
        }

        Phase::RoundOver => unreachable!("handled above"),
    }

    state.snapshot(events)
}
