//! Obstacle generation
//!
//! A new obstacle enters at the right edge every `spawn_interval` ticks with
//! its gate placed at a random height inside the configured margins.

use rand::Rng;

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Returns a new obstacle when `tick_count` lands on the spawn interval
pub fn maybe_spawn<R: Rng>(tick_count: u64, tuning: &Tuning, rng: &mut R) -> Option<Obstacle> {
    if tick_count % tuning.spawn_interval.max(1) != 0 {
        return None;
    }
    Some(spawn_obstacle(tuning, rng))
}

/// Build an obstacle at the right edge with a randomly placed gate.
///
/// `tuning` must have passed [`Tuning::validate`]; a session only ever holds
/// one that has.
pub fn spawn_obstacle<R: Rng>(tuning: &Tuning, rng: &mut R) -> Obstacle {
    // Integer offsets, upper bound exclusive
    let span = tuning.placement_span().floor().max(1.0) as u32;
    let top_edge = rng.random_range(0..span) as f32 + tuning.top_margin;

    Obstacle {
        x: tuning.playfield.width,
        width: tuning.obstacle_width,
        top_edge,
        bottom_edge: top_edge + tuning.gate_gap,
        passed: false,
    }
}
