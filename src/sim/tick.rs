//! Fixed-order simulation tick
//!
//! The host calls [`tick`] once per frame and [`handle_activate`] on every
//! click/tap/key press. Both run to completion before anything else touches
//! the session, and rendering reads the session only after `tick` returns.

use super::collision::{Segment, find_collision};
use super::physics::{AvatarStep, remove_offscreen, scroll_obstacles, step_avatar};
use super::scoring::update_score;
use super::spawn::maybe_spawn;
use super::state::{GamePhase, GameSession};
use crate::persistence::ScoreStore;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    /// Fell through the bottom of the playfield
    Floor,
    /// Hit a solid segment
    Obstacle(Segment),
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A new obstacle entered on this tick
    pub spawned: bool,
    /// Obstacles passed on this tick
    pub points: u32,
    /// Set on the tick the run ended
    pub crash: Option<Crash>,
}

/// Result of an activate input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Flap,
    Restart,
}

/// Advance the session by one tick. Does nothing once the run is over.
///
/// Order: tick counter, spawn, avatar physics, obstacle scroll, off-screen
/// removal, scoring, collision.
pub fn tick(session: &mut GameSession, store: &mut dyn ScoreStore) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if session.phase == GamePhase::Over {
        return outcome;
    }

    session.tick_count += 1;

    if let Some(obstacle) = maybe_spawn(session.tick_count, &session.tuning, &mut session.rng) {
        log::debug!(
            "Tick {}: obstacle gate {}..{}",
            session.tick_count,
            obstacle.top_edge,
            obstacle.bottom_edge
        );
        session.obstacles.push(obstacle);
        outcome.spawned = true;
    }

    let playfield = session.tuning.playfield;

    // Clamped to the floor before the phase flips, so the last frame shows
    // the avatar resting on the ground
    if step_avatar(&mut session.avatar, &playfield, session.tuning.gravity) == AvatarStep::Floor {
        session.phase = GamePhase::Over;
        outcome.crash = Some(Crash::Floor);
    }

    scroll_obstacles(&mut session.obstacles, session.tuning.obstacle_speed);
    remove_offscreen(&mut session.obstacles);

    outcome.points = update_score(
        &session.avatar,
        &mut session.obstacles,
        &mut session.score,
        store,
    );

    if session.phase == GamePhase::Running {
        if let Some(hit) = find_collision(&session.avatar, &session.obstacles, &playfield) {
            session.phase = GamePhase::Over;
            outcome.crash = Some(Crash::Obstacle(hit.segment));
        }
    }

    if let Some(crash) = outcome.crash {
        log::info!(
            "Run over at tick {} ({:?}): score {}, best {}",
            session.tick_count,
            crash,
            session.score.current,
            session.score.high.best
        );
    }

    outcome
}

/// Handle a click/tap/key press: flap while running, restart when over
pub fn handle_activate(session: &mut GameSession) -> Activation {
    match session.phase {
        GamePhase::Running => {
            session.avatar.flap(session.tuning.jump_velocity);
            Activation::Flap
        }
        GamePhase::Over => {
            session.restart();
            log::info!("Restarted (best {})", session.score.high.best);
            Activation::Restart
        }
    }
}
