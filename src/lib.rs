//! Flappy Gates - a one-button side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `renderer`: Read-only frame capture plus the Canvas 2D backend
//! - `persistence`: Key-value score stores (memory, file, LocalStorage)
//! - `tuning`: Data-driven game balance
//! - `scenery`: Decorative background clouds

pub mod highscores;
pub mod persistence;
pub mod renderer;
pub mod scenery;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScore;
pub use persistence::{MemoryStore, ScoreStore, StoreError};
pub use settings::Settings;
pub use sim::{GamePhase, GameSession, Playfield, handle_activate, tick};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Nominal frame rate the per-tick constants are tuned for
    pub const NOMINAL_TICK_RATE: u32 = 60;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Downward acceleration added to velocity every tick
    pub const GRAVITY: f32 = 0.3;
    /// Velocity set (not added) by a flap
    pub const JUMP_VELOCITY: f32 = -6.0;

    /// Avatar defaults
    pub const AVATAR_X: f32 = 80.0;
    pub const AVATAR_WIDTH: f32 = 34.0;
    pub const AVATAR_HEIGHT: f32 = 24.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const GATE_GAP: f32 = 150.0;
    pub const OBSTACLE_SPEED: f32 = 2.0;
    pub const SPAWN_INTERVAL: u64 = 100;
    /// Minimum distance between the gate and the top/bottom of the playfield
    pub const TOP_MARGIN: f32 = 50.0;
    pub const BOTTOM_MARGIN: f32 = 50.0;
}

/// Axis-aligned rectangle, origin at the top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size centered on `center`
    #[inline]
    pub fn centered(center: glam::Vec2, size: glam::Vec2) -> Self {
        Self::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}
