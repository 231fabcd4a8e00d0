//! Demo/idle mode: a simple controller that flaps to stay inside the next gate

use super::state::{GamePhase, GameSession};

/// How far above the gate's lower edge the avatar's bottom is kept
const FLOOR_CLEARANCE: f32 = 30.0;

/// Height the autopilot tries to stay above (larger y is lower)
pub fn target_y(session: &GameSession) -> f32 {
    let half_h = session.avatar.half_height();
    match session.upcoming_obstacles().next() {
        Some(obstacle) => obstacle.bottom_edge - half_h - FLOOR_CLEARANCE,
        None => session.playfield().center_y() + FLOOR_CLEARANCE,
    }
}

/// True when the avatar should flap this tick
pub fn wants_flap(session: &GameSession) -> bool {
    if session.phase != GamePhase::Running {
        return false;
    }
    let avatar = &session.avatar;
    // Where gravity alone would put the avatar after the next tick
    let predicted = avatar.pos.y + avatar.velocity + session.tuning.gravity;
    predicted > target_y(session)
}
