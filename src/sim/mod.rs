//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per frame, constants expressed per tick
//! - Seeded RNG only, owned by the session
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod physics;
pub mod scoring;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, Segment, check_collisions, find_collision};
pub use physics::{AvatarStep, remove_offscreen, scroll_obstacles, step_avatar};
pub use scoring::update_score;
pub use spawn::{maybe_spawn, spawn_obstacle};
pub use state::{Avatar, GamePhase, GameSession, Obstacle, Playfield, Score};
pub use tick::{Activation, Crash, TickOutcome, handle_activate, tick};
