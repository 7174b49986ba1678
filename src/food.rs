use crate::config::*;
use bevy::prelude::*;

/// A food item lying in the play area. Rots after `max_age` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub position: Vec2,
    pub eaten: bool,
    pub age: f32,
    pub max_age: f32,
}

impl Food {
    pub fn new(position: Vec2) -> Self {
        Self::with_max_age(position, FOOD_MAX_AGE)
    }

    pub fn with_max_age(position: Vec2, max_age: f32) -> Self {
        Self {
            position,
            eaten: false,
            age: 0.0,
            max_age,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.age += dt;
    }

    pub fn is_rotten(&self) -> bool {
        self.age >= self.max_age
    }

    /// 1.0 when fresh, falling to 0.0 as the item rots
    pub fn freshness(&self) -> f32 {
        (1.0 - self.age / self.max_age).clamp(0.0, 1.0)
    }
}
