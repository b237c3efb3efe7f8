//! HUD text for the score overlay and the round-over panel

use crate::sim::{RoundState, ScoreTally, Snapshot};

/// In-play score line
pub fn score_text(tally: &ScoreTally) -> String {
    format!("Score: {}\nShots: {}", tally.points, tally.shots_taken)
}

/// Round-over panel summary
pub fn final_score_text(tally: &ScoreTally) -> String {
    format!("Final Score: {}", tally.points)
}

/// What the overlay should currently show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HudView {
    /// Score overlay visible, panel hidden
    Playing { score: String },
    /// Score overlay hidden, round-over panel visible
    RoundOver { summary: String },
}

impl HudView {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        match snapshot.round_state {
            RoundState::RoundOver => HudView::RoundOver {
                summary: final_score_text(&snapshot.tally),
            },
            RoundState::Holding | RoundState::Flying => HudView::Playing {
                score: score_text(&snapshot.tally),
            },
        }
    }
}
