//! Per-tick motion
//!
//! Semi-implicit Euler for the avatar (velocity first, then position) and a
//! constant leftward scroll for obstacles.

use super::state::{Avatar, Obstacle, Playfield};

/// What happened to the avatar during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarStep {
    /// Moved freely
    Free,
    /// Clamped against the ceiling
    Ceiling,
    /// Clamped to the floor; the run is over
    Floor,
}

/// Advance the avatar by one tick under gravity
pub fn step_avatar(avatar: &mut Avatar, playfield: &Playfield, gravity: f32) -> AvatarStep {
    avatar.velocity += gravity;
    avatar.pos.y += avatar.velocity;

    let half_h = avatar.half_height();

    if avatar.pos.y - half_h < 0.0 {
        avatar.pos.y = half_h;
        // Only cancel upward motion
        if avatar.velocity < 0.0 {
            avatar.velocity = 0.0;
        }
        return AvatarStep::Ceiling;
    }

    if avatar.pos.y + half_h > playfield.height {
        avatar.pos.y = playfield.height - half_h;
        return AvatarStep::Floor;
    }

    AvatarStep::Free
}

/// Scroll every obstacle left by `speed`
pub fn scroll_obstacles(obstacles: &mut [Obstacle], speed: f32) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= speed;
    }
}

/// Drop obstacles that have fully left the playfield
pub fn remove_offscreen(obstacles: &mut Vec<Obstacle>) -> usize {
    let before = obstacles.len();
    obstacles.retain(|o| !o.is_offscreen());
    before - obstacles.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    fn field() -> Playfield {
        Playfield::new(400.0, 600.0)
    }

    fn obstacle_at(x: f32) -> Obstacle {
        Obstacle {
            x,
            width: 60.0,
            top_edge: 100.0,
            bottom_edge: 250.0,
            passed: false,
        }
    }

    #[test]
    fn test_gravity_single_tick() {
        let mut avatar = Avatar::new(&Tuning::default());
        let center = avatar.pos.y;

        let step = step_avatar(&mut avatar, &field(), 0.3);

        assert_eq!(step, AvatarStep::Free);
        assert!((avatar.velocity - 0.3).abs() < 1e-6);
        assert!((avatar.pos.y - (center + 0.3)).abs() < 1e-4);
        assert_eq!(avatar.pos.x, 80.0);
    }

    #[test]
    fn test_velocity_applied_before_position() {
        let mut avatar = Avatar::new(&Tuning::default());
        avatar.velocity = -6.0;
        step_avatar(&mut avatar, &field(), 0.3);
        assert!((avatar.velocity + 5.7).abs() < 1e-6);
        assert!((avatar.pos.y - (300.0 - 5.7)).abs() < 1e-4);
    }

    #[test]
    fn test_ceiling_zeroes_upward_velocity() {
        let mut avatar = Avatar::new(&Tuning::default());
        avatar.pos.y = 14.0;
        avatar.velocity = -6.0;

        let step = step_avatar(&mut avatar, &field(), 0.3);

        assert_eq!(step, AvatarStep::Ceiling);
        assert_eq!(avatar.pos.y, 12.0);
        assert_eq!(avatar.velocity, 0.0);
    }

    #[test]
    fn test_ceiling_keeps_downward_velocity() {
        // Placed above the ceiling (e.g. after a resize) while already falling
        let mut avatar = Avatar::new(&Tuning::default());
        avatar.pos = Vec2::new(80.0, 2.0);
        avatar.velocity = 1.0;

        let step = step_avatar(&mut avatar, &field(), 0.3);

        assert_eq!(step, AvatarStep::Ceiling);
        assert_eq!(avatar.pos.y, 12.0);
        assert!((avatar.velocity - 1.3).abs() < 1e-6);
    }

    #[test]
    fn test_floor_breach_clamps() {
        let mut avatar = Avatar::new(&Tuning::default());
        avatar.pos.y = 586.0;
        avatar.velocity = 5.0;

        let step = step_avatar(&mut avatar, &field(), 0.3);

        assert_eq!(step, AvatarStep::Floor);
        assert_eq!(avatar.pos.y, 588.0);
    }

    #[test]
    fn test_scroll_fifty_ticks() {
        let mut obstacles = vec![obstacle_at(400.0)];
        for _ in 0..50 {
            scroll_obstacles(&mut obstacles, 2.0);
        }
        assert_eq!(obstacles[0].x, 300.0);
    }

    #[test]
    fn test_remove_offscreen_keeps_order() {
        let mut obstacles = vec![
            obstacle_at(-61.0),
            obstacle_at(-60.0),
            obstacle_at(150.0),
            obstacle_at(-100.0),
            obstacle_at(350.0),
        ];
        let removed = remove_offscreen(&mut obstacles);
        assert_eq!(removed, 2);
        let xs: Vec<f32> = obstacles.iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![-60.0, 150.0, 350.0]);
    }

    proptest! {
        #[test]
        fn prop_avatar_stays_in_bounds(
            start in 12.0f32..588.0,
            velocity in -20.0f32..20.0,
            flaps in proptest::collection::vec(any::<bool>(), 1..200),
        ) {
            let field = field();
            let mut avatar = Avatar::new(&Tuning::default());
            avatar.pos.y = start;
            avatar.velocity = velocity;

            for flap in flaps {
                if flap {
                    avatar.flap(-6.0);
                }
                let before = avatar.velocity;
                let step = step_avatar(&mut avatar, &field, 0.3);
                prop_assert!(avatar.pos.y >= avatar.half_height());
                prop_assert!(avatar.pos.y <= field.height - avatar.half_height());
                if step == AvatarStep::Ceiling {
                    // Never pushed downward by the clamp
                    prop_assert!(avatar.velocity <= (before + 0.3).max(0.0));
                }
                if step == AvatarStep::Floor {
                    break;
                }
            }
        }
    }
}
