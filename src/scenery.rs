//! Decorative background clouds
//!
//! Purely visual. Clouds have their own RNG so they never disturb obstacle
//! placement, and nothing in `sim` reads them.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::sim::Playfield;

/// Default number of clouds on screen
pub const CLOUD_COUNT: usize = 5;
/// Upper bound on the cloud layer, whatever the stored settings ask for
pub const MAX_CLOUDS: usize = 32;
/// Cloud size range (diameter-ish, pixels)
pub const CLOUD_MIN_SIZE: f32 = 40.0;
pub const CLOUD_SIZE_RANGE: f32 = 30.0;
/// Drift speed range (pixels/tick)
pub const CLOUD_MIN_SPEED: f32 = 0.3;
pub const CLOUD_SPEED_RANGE: f32 = 0.3;

/// A single drifting cloud
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
}

/// Background cloud layer
#[derive(Debug, Clone)]
pub struct Scenery {
    pub clouds: Vec<Cloud>,
    playfield: Playfield,
    rng: Pcg32,
}

impl Scenery {
    /// Scatter `count` clouds (at most [`MAX_CLOUDS`]) across the playfield
    pub fn new(playfield: Playfield, count: usize, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let clouds = (0..count.min(MAX_CLOUDS))
            .map(|_| Cloud {
                x: rng.random::<f32>() * playfield.width,
                y: random_height(&mut rng, &playfield),
                size: CLOUD_MIN_SIZE + rng.random::<f32>() * CLOUD_SIZE_RANGE,
                speed: CLOUD_MIN_SPEED + rng.random::<f32>() * CLOUD_SPEED_RANGE,
            })
            .collect();
        Self {
            clouds,
            playfield,
            rng,
        }
    }

    /// Drift every cloud left; clouds that leave wrap to the right edge
    pub fn update(&mut self) {
        for cloud in &mut self.clouds {
            cloud.x -= cloud.speed;
            if cloud.x + cloud.size < 0.0 {
                cloud.x = self.playfield.width + cloud.size;
                cloud.y = random_height(&mut self.rng, &self.playfield);
            }
        }
    }

    /// Re-scatter positions (sizes and speeds are kept), used on restart
    pub fn scatter(&mut self) {
        for cloud in &mut self.clouds {
            cloud.x = self.rng.random::<f32>() * self.playfield.width;
            cloud.y = random_height(&mut self.rng, &self.playfield);
        }
    }
}

/// Clouds stay in the top half of the sky
fn random_height(rng: &mut Pcg32, playfield: &Playfield) -> f32 {
    rng.random::<f32>() * (playfield.height / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Playfield {
        Playfield::new(400.0, 600.0)
    }

    #[test]
    fn test_clouds_start_in_upper_half() {
        let scenery = Scenery::new(field(), CLOUD_COUNT, 3);
        assert_eq!(scenery.clouds.len(), CLOUD_COUNT);
        for cloud in &scenery.clouds {
            assert!(cloud.x >= 0.0 && cloud.x <= 400.0);
            assert!(cloud.y >= 0.0 && cloud.y <= 300.0);
            assert!(cloud.size >= 40.0 && cloud.size <= 70.0);
            assert!(cloud.speed >= 0.3 && cloud.speed <= 0.6);
        }
    }

    #[test]
    fn test_cloud_count_is_capped() {
        let scenery = Scenery::new(field(), usize::MAX, 1);
        assert_eq!(scenery.clouds.len(), MAX_CLOUDS);
    }

    #[test]
    fn test_cloud_wraps_to_right_edge() {
        let mut scenery = Scenery::new(field(), 1, 3);
        scenery.clouds[0] = Cloud {
            x: -49.9,
            y: 10.0,
            size: 50.0,
            speed: 0.5,
        };

        scenery.update();

        let cloud = &scenery.clouds[0];
        assert_eq!(cloud.x, 450.0);
        assert!(cloud.y <= 300.0);
    }

    #[test]
    fn test_scatter_keeps_sizes() {
        let mut scenery = Scenery::new(field(), CLOUD_COUNT, 9);
        let sizes: Vec<f32> = scenery.clouds.iter().map(|c| c.size).collect();
        scenery.scatter();
        let after: Vec<f32> = scenery.clouds.iter().map(|c| c.size).collect();
        assert_eq!(sizes, after);
    }
}
