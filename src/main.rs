//! Hoop Shot headless driver
//!
//! Plays rounds on autopilot against the simulation core: walks to a series
//! of shooting spots, winds up, shoots, chases loose balls under a toy
//! gravity model and catches them by reach polling. Logs each outcome and
//! prints the final snapshot as JSON.
//!
//! Usage: `hoop-shot [tunables.json] [seed]`

use glam::{Vec2, Vec3};

use hoop_shot::consts::*;
use hoop_shot::hud::{HudView, final_score_text};
use hoop_shot::sim::{
    CATCH_RADIUS, GameEvent, GameState, Phase, Possession, Rig, Snapshot, TickInput, tick,
    within_reach,
};
use hoop_shot::{Tunables, flatten};

/// Hoop rim position
const HOOP: Vec3 = Vec3::new(0.0, 3.05, 0.0);
/// Ball radius for the toy physics and reach probe
const BALL_RADIUS: f32 = 0.12;
const GRAVITY: f32 = 9.81;
/// Display frame time; the sim substeps at SIM_DT underneath
const FRAME_DT: f32 = 1.0 / 50.0;
/// Frames the aim button is held before release
const WINDUP_FRAMES: u32 = 20;
/// Stop after this many shots even if the round is still alive
const MAX_SHOTS: u32 = 25;
/// Hard cap on frames per run
const MAX_FRAMES: u32 = 60 * 60 * 10;
/// Close enough to a shooting spot
const ARRIVE_EPSILON: f32 = 0.2;

/// Shooting spot for the nth shot: spirals outward from the hoop
fn shooting_spot(shot_index: u32) -> Vec3 {
    let distance = 3.0 + shot_index as f32 * 0.75;
    let angle = shot_index as f32 * 0.7;
    Vec3::new(angle.sin() * distance, 0.0, -angle.cos() * distance)
}

/// Movement axis that walks `from` toward `to` on the floor
fn walk_toward(from: Vec3, to: Vec3) -> Vec2 {
    let dir = flatten(to - from).normalize_or_zero();
    Vec2::new(dir.x, dir.z)
}

/// Scripted player plus a stand-in for the physics engine
struct Autoplayer {
    windup: u32,
    loose_velocity: Vec3,
}

impl Autoplayer {
    fn new() -> Self {
        Self {
            windup: 0,
            loose_velocity: Vec3::ZERO,
        }
    }

    /// Drop a loose ball under gravity onto the floor
    fn step_loose_ball(&mut self, state: &mut GameState, dt: f32) {
        let mut pos = state.ball().position;
        self.loose_velocity.y -= GRAVITY * dt;
        pos += self.loose_velocity * dt;
        if pos.y <= BALL_RADIUS {
            pos.y = BALL_RADIUS;
            self.loose_velocity = Vec3::ZERO;
        }
        state.set_loose_ball_position(pos);
    }

    /// Decide this frame's input from the current state
    fn input(&mut self, state: &mut GameState, dt: f32) -> TickInput {
        let mut input = TickInput::default();
        let phase = *state.phase();
        match phase {
            Phase::Holding(Possession::InHands) => {
                let spot = shooting_spot(state.tally().shots_taken);
                if flatten(spot - state.rig.position).length() > ARRIVE_EPSILON {
                    input.movement = walk_toward(state.rig.position, spot);
                } else if self.windup == 0 {
                    input.aim_pressed = true;
                    self.windup = 1;
                } else if self.windup < WINDUP_FRAMES {
                    self.windup += 1;
                } else {
                    input.aim_released = true;
                    self.windup = 0;
                }
            }
            Phase::Holding(Possession::Loose) => {
                self.step_loose_ball(state, dt);
                let ball = state.ball().position;
                if within_reach(ball, BALL_RADIUS, &state.rig, CATCH_RADIUS).hit {
                    input.ball_caught = true;
                } else {
                    input.movement = walk_toward(state.rig.position, ball);
                }
            }
            Phase::Flying(_) => {
                self.loose_velocity = Vec3::ZERO;
            }
            Phase::RoundOver => {}
        }
        input
    }
}

fn report(snapshot: &Snapshot) {
    for event in &snapshot.events {
        match event {
            GameEvent::ShotReleased { plan } => log::info!(
                "Release from {:.1} units, flight {:.2}s",
                plan.distance,
                plan.flight_duration
            ),
            GameEvent::ShotLanded { outcome, distance, points } => {
                log::info!("{} landed {:.2} from the hoop (+{})", outcome.as_str(), distance, points)
            }
            GameEvent::RoundOver { final_tally } => {
                log::info!("Round over: {}", final_score_text(final_tally))
            }
            GameEvent::BallCaught | GameEvent::Restarted => {}
        }
    }
}

fn load_tunables(path: Option<&str>) -> Tunables {
    let Some(path) = path else {
        return Tunables::default();
    };
    match Tunables::load(path) {
        Ok(tunables) => tunables,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let tunables = load_tunables(args.first().map(String::as_str));
    let seed = match args.get(1).map(|s| s.parse::<u64>()) {
        None => 0x5EED,
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("invalid seed {:?}: {e}", args[1]);
            std::process::exit(1);
        }
    };
    log::info!("Hoop Shot (headless) starting, seed={seed:#x}");
    match tunables.to_json() {
        Ok(json) => log::debug!("Tunables: {json}"),
        Err(e) => log::warn!("failed to serialize tunables: {e}"),
    }

    let mut state = GameState::new(tunables, HOOP, seed).with_rig(Rig::new(shooting_spot(0)));
    let mut player = Autoplayer::new();
    let mut snapshot = state.snapshot(Vec::new());
    let mut accumulator = 0.0;

    for _ in 0..MAX_FRAMES {
        accumulator += FRAME_DT;
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = player.input(&mut state, SIM_DT);
            snapshot = tick(&mut state, &input, SIM_DT);
            report(&snapshot);
            accumulator -= SIM_DT;
            substeps += 1;
        }

        if snapshot.round_ended || (state.tally().shots_taken >= MAX_SHOTS && state.ball_loose()) {
            break;
        }
    }

    match HudView::from_snapshot(&snapshot) {
        HudView::Playing { score } => {
            log::info!("Stopped at autopilot limit. {}", score.replace('\n', ", "))
        }
        HudView::RoundOver { summary } => log::info!("{summary}"),
    }
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("failed to serialize snapshot: {e}"),
    }
}
