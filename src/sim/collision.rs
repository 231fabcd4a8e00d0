//! Collision detection between the avatar and obstacle segments
//!
//! Plain AABB tests. Overlap is strict: boxes that only share an edge are
//! not touching.

use super::state::{Avatar, Obstacle, Playfield};
use crate::Rect;

/// Which part of an obstacle was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Top,
    Bottom,
}

/// First obstacle hit, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionResult {
    /// Index into the obstacle slice
    pub obstacle: usize,
    pub segment: Segment,
}

/// Test the avatar against one obstacle's two solid segments
pub fn avatar_obstacle_collision(
    avatar: &Rect,
    obstacle: &Obstacle,
    playfield: &Playfield,
) -> Option<Segment> {
    if avatar.overlaps(&obstacle.top_segment()) {
        return Some(Segment::Top);
    }
    if avatar.overlaps(&obstacle.bottom_segment(playfield)) {
        return Some(Segment::Bottom);
    }
    None
}

/// Find the first obstacle the avatar overlaps
pub fn find_collision(
    avatar: &Avatar,
    obstacles: &[Obstacle],
    playfield: &Playfield,
) -> Option<CollisionResult> {
    let bounds = avatar.bounds();
    obstacles.iter().enumerate().find_map(|(i, obstacle)| {
        avatar_obstacle_collision(&bounds, obstacle, playfield).map(|segment| CollisionResult {
            obstacle: i,
            segment,
        })
    })
}

/// True if the avatar overlaps any segment of any obstacle
pub fn check_collisions(avatar: &Avatar, obstacles: &[Obstacle], playfield: &Playfield) -> bool {
    find_collision(avatar, obstacles, playfield).is_some()
}
