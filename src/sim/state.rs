//! Game session and core simulation types
//!
//! Everything the simulation mutates lives in [`GameSession`]; there is no
//! global state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::highscores::HighScore;
use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advances every tick
    #[default]
    Running,
    /// Run ended; only a restart is accepted
    Over,
}

/// Size of the render target the simulation is confined to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Vertical center, where the avatar starts each run
    pub fn center_y(&self) -> f32 {
        self.height / 2.0
    }
}

/// The player-controlled avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    /// Center position; x never changes during a session
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive is down)
    pub velocity: f32,
}

impl Avatar {
    /// Avatar at rest in the vertical center of the playfield
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.avatar_x, tuning.playfield.center_y()),
            size: tuning.avatar_size,
            velocity: 0.0,
        }
    }

    pub fn half_height(&self) -> f32 {
        self.size.y / 2.0
    }

    /// Bounding box centered on the position
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, self.size)
    }

    /// Flap: override the velocity, whatever it was
    pub fn flap(&mut self, jump_velocity: f32) {
        self.velocity = jump_velocity;
    }
}

/// A gated obstacle: two solid segments with an opening between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Bottom of the upper segment
    pub top_edge: f32,
    /// Top of the lower segment (`top_edge + gate_gap`)
    pub bottom_edge: f32,
    /// Already counted toward the score
    pub passed: bool,
}

impl Obstacle {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn gap(&self) -> f32 {
        self.bottom_edge - self.top_edge
    }

    /// Fully past the left edge of the playfield
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0.0
    }

    /// Upper solid segment, from the ceiling down to the gate
    pub fn top_segment(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.top_edge)
    }

    /// Lower solid segment, from the gate down to the floor
    pub fn bottom_segment(&self, playfield: &Playfield) -> Rect {
        Rect::new(
            self.x,
            self.bottom_edge,
            self.width,
            playfield.height - self.bottom_edge,
        )
    }
}

/// Run score and the best score seen so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub current: u32,
    pub high: HighScore,
}

/// Complete state of one play session (deterministic given the seed)
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Seed the obstacle RNG was created from
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Ticks simulated since the run started
    pub tick_count: u64,
    pub avatar: Avatar,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub score: Score,
    /// Obstacle placement source
    pub(crate) rng: Pcg32,
}

impl GameSession {
    /// Create a session whose obstacle placement is derived from `seed`.
    /// Fails if `tuning` does not describe a playable game.
    pub fn new(seed: u64, tuning: Tuning, high_score: HighScore) -> Result<Self, TuningError> {
        Self::with_rng(seed, tuning, high_score, Pcg32::seed_from_u64(seed))
    }

    /// Create a session with an explicit random source
    pub fn with_rng(
        seed: u64,
        tuning: Tuning,
        high_score: HighScore,
        rng: Pcg32,
    ) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            seed,
            avatar: Avatar::new(&tuning),
            tuning,
            phase: GamePhase::Running,
            tick_count: 0,
            obstacles: Vec::new(),
            score: Score {
                current: 0,
                high: high_score,
            },
            rng,
        })
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    pub fn playfield(&self) -> Playfield {
        self.tuning.playfield
    }

    /// Start a fresh run, keeping the high score and the RNG stream
    pub fn restart(&mut self) {
        self.avatar = Avatar::new(&self.tuning);
        self.obstacles.clear();
        self.score.current = 0;
        self.tick_count = 0;
        self.phase = GamePhase::Running;
    }

    /// Obstacles the avatar has not cleared yet, nearest first
    pub fn upcoming_obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        let avatar_left = self.avatar.bounds().x;
        self.obstacles
            .iter()
            .filter(move |o| o.right() >= avatar_left)
    }
}
