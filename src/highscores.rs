//! High score tracking
//!
//! A single best score, persisted under a fixed key as a decimal string.
//! Read failures count as "no high score yet"; write failures are logged and
//! otherwise ignored so play continues with the in-memory value.

use serde::{Deserialize, Serialize};

use crate::persistence::ScoreStore;

/// Best score seen across runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u32,
}

impl HighScore {
    /// Storage key for the persisted value
    pub const STORAGE_KEY: &'static str = "flappyHighScore";

    pub const fn new(best: u32) -> Self {
        Self { best }
    }

    /// Load the stored high score, defaulting to 0
    pub fn load(store: &dyn ScoreStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(raw)) => match parse_score(&raw) {
                Some(best) => {
                    log::info!("Loaded high score {}", best);
                    Self { best }
                }
                None => {
                    log::warn!("Ignoring unreadable high score {:?}", raw);
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read high score: {}", e);
                Self::default()
            }
        }
    }

    /// Write the current value to the store
    pub fn save(&self, store: &mut dyn ScoreStore) {
        match store.set(Self::STORAGE_KEY, &self.best.to_string()) {
            Ok(()) => log::debug!("High score {} saved", self.best),
            Err(e) => log::warn!("Could not save high score {}: {}", self.best, e),
        }
    }

    /// Raise the high score if `score` beats it, persisting immediately.
    /// Returns true when the score is a new best.
    pub fn submit(&mut self, score: u32, store: &mut dyn ScoreStore) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        log::info!("New high score: {}", score);
        self.save(store);
        true
    }
}

/// Leading decimal digits (after an optional `+`), as a browser's `parseInt`
/// would read them. Values past `u32::MAX` saturate.
fn parse_score(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return None;
    }
    // Only ASCII digits remain, so overflow is the sole failure
    Some(digits.parse().unwrap_or(u32::MAX))
}
