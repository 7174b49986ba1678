use crate::config::*;
use bevy::prelude::*;
use rand::Rng;

/// The rectangular play area, spanning `(0, 0)` to `size`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub size: Vec2,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(DEFAULT_WORLD_WIDTH, DEFAULT_WORLD_HEIGHT)
    }
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Uniform point at least `inset` away from every edge. Collapses to the
    /// center line on an axis narrower than `2 * inset`.
    pub fn sample_inset<R: Rng>(&self, inset: f32, rng: &mut R) -> Vec2 {
        Vec2::new(
            sample_axis(self.size.x, inset, rng),
            sample_axis(self.size.y, inset, rng),
        )
    }

    /// Random wander destination, kept clear of the edges
    pub fn wander_point<R: Rng>(&self, rng: &mut R) -> Vec2 {
        self.sample_inset(WANDER_MARGIN, rng)
    }

    /// Clamp `position` back inside the area on every violated axis and
    /// flip the matching velocity component. Returns whether anything bounced.
    pub fn reflect(&self, position: &mut Vec2, velocity: &mut Vec2, radius: f32) -> bool {
        let mut bounced = false;

        if position.x < radius {
            position.x = radius;
            velocity.x = -velocity.x;
            bounced = true;
        } else if position.x > self.size.x - radius {
            position.x = self.size.x - radius;
            velocity.x = -velocity.x;
            bounced = true;
        }

        if position.y < radius {
            position.y = radius;
            velocity.y = -velocity.y;
            bounced = true;
        } else if position.y > self.size.y - radius {
            position.y = self.size.y - radius;
            velocity.y = -velocity.y;
            bounced = true;
        }

        bounced
    }
}

fn sample_axis<R: Rng>(extent: f32, inset: f32, rng: &mut R) -> f32 {
    let inset = inset.min(extent / 2.0);
    rng.gen_range(inset..=extent - inset)
}
