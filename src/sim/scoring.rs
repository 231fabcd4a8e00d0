//! Scoring: one point per obstacle the avatar gets past

use super::state::{Avatar, Obstacle, Score};
use crate::persistence::ScoreStore;

/// Award a point for each obstacle whose right edge has moved strictly left
/// of the avatar's x. Each obstacle scores once. New bests are persisted
/// immediately. Returns the number of points awarded.
pub fn update_score(
    avatar: &Avatar,
    obstacles: &mut [Obstacle],
    score: &mut Score,
    store: &mut dyn ScoreStore,
) -> u32 {
    let mut awarded = 0;
    for obstacle in obstacles.iter_mut() {
        if obstacle.passed || obstacle.right() >= avatar.pos.x {
            continue;
        }
        obstacle.passed = true;
        score.current += 1;
        awarded += 1;
        score.high.submit(score.current, store);
    }
    awarded
}
