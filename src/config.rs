/// Configuration constants for the agent life simulator
use bevy::prelude::*;
use thiserror::Error;

// ============================================================================
// GENETICS
// ============================================================================

/// Maximum per-component drift applied when an offspring inherits a trait or color channel
pub const MUTATION_RATE: f32 = 0.1;

/// Fraction of max lifespan an agent must exceed before it is mature
pub const MATURITY_FRACTION: f32 = 0.3;

// ============================================================================
// NEEDS
// ============================================================================

/// Upper bound of every need meter (hunger, horniness, energy, health)
pub const NEED_MAX: f32 = 100.0;

/// Hunger at or above this level is starvation, regardless of genome
pub const STARVING_THRESHOLD: f32 = 95.0;

/// Health lost per second while starving
pub const STARVATION_DAMAGE: f32 = 5.0;

/// Health regained per second while not hungry
pub const HEALTH_REGEN: f32 = 2.0;

/// Energy regained per second while resting
pub const REST_RECOVERY: f32 = 30.0;

/// Velocity damping applied each tick while resting
pub const REST_DAMPING: f32 = 0.95;

/// Speed multiplier while tired
pub const TIRED_SPEED_FACTOR: f32 = 0.6;

/// Speed multiplier while starving (stacks with the tired multiplier)
pub const STARVING_SPEED_FACTOR: f32 = 0.4;

// ============================================================================
// FEEDING & MATING
// ============================================================================

/// Distance at which a food item or mate counts as reached
pub const PROXIMITY_RADIUS: f32 = 10.0;

/// Maximum distance at which a mate candidate is considered
pub const COURTING_RADIUS: f32 = 150.0;

/// Hunger removed by eating one food item
pub const FOOD_HUNGER_RELIEF: f32 = 50.0;

/// Energy gained by eating one food item
pub const FOOD_ENERGY_GAIN: f32 = 20.0;

/// Horniness removed from both parents on mating
pub const MATING_RELIEF: f32 = 60.0;

/// Cooldown applied to both parents after mating
pub const MATING_COOLDOWN: f32 = 20.0;

/// Energy each parent pays to reproduce
pub const MATING_ENERGY_COST: f32 = 10.0;

/// Half-width of the square jitter around the parents' midpoint where offspring appear
pub const BIRTH_JITTER: f32 = 10.0;

// ============================================================================
// OFFSPRING
// ============================================================================

pub const OFFSPRING_HUNGER: f32 = 30.0;
pub const OFFSPRING_HORNINESS: f32 = 0.0;
pub const OFFSPRING_ENERGY: f32 = 80.0;
pub const OFFSPRING_HEALTH: f32 = 100.0;

/// Offspring cannot reproduce until this cooldown has elapsed
pub const OFFSPRING_COOLDOWN: f32 = 30.0;

// ============================================================================
// WANDERING
// ============================================================================

/// Distance at which a wander target counts as reached
pub const WANDER_ARRIVAL_RADIUS: f32 = 20.0;

/// Minimum seconds before a wander target is replaced
pub const WANDER_TIME: f32 = 5.0;

/// Extra random seconds added on top of `WANDER_TIME`
pub const WANDER_TIME_JITTER: f32 = 5.0;

/// Wander targets keep this distance from the play-area edges
pub const WANDER_MARGIN: f32 = 50.0;

// ============================================================================
// WORLD & SPAWN SETTINGS
// ============================================================================

/// Collision radius of an agent against the play-area edges
pub const AGENT_RADIUS: f32 = 5.0;

/// Drawn radius of a food item
pub const FOOD_RADIUS: f32 = 3.0;

/// Dead agents linger until their age passes max lifespan by this many seconds
pub const DEATH_GRACE_PERIOD: f32 = 5.0;

/// Founder speed range (units per second)
pub const FOUNDER_MIN_SPEED: f32 = 50.0;
pub const FOUNDER_MAX_SPEED: f32 = 150.0;

pub const DEFAULT_WORLD_WIDTH: f32 = 800.0;
pub const DEFAULT_WORLD_HEIGHT: f32 = 600.0;

/// Number of agents seeded at startup
pub const INITIAL_AGENT_COUNT: usize = 20;

/// Hard cap on the number of agents (live and dead) in the arena
pub const MAX_POPULATION: usize = 200;

/// Hard cap on the number of food items
pub const MAX_FOOD: usize = 100;

/// Seconds between food spawns
pub const FOOD_SPAWN_INTERVAL: f32 = 2.0;

/// Food rots after this many seconds
pub const FOOD_MAX_AGE: f32 = 30.0;

/// Number of agents added by the manual spawn button
pub const MANUAL_SPAWN_COUNT: usize = 10;

/// Maximum distance for selecting agents with the mouse
pub const SELECTION_RADIUS: f32 = 20.0;

/// Runtime configuration for the simulation
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Play-area size (width, height)
    pub bounds: Vec2,
    pub initial_agents: usize,
    pub max_population: usize,
    pub max_food: usize,
    pub food_spawn_interval: f32,
    pub food_max_age: f32,
    /// Fixed seed for reproducible runs; entropy-seeded when `None`
    pub seed: Option<u64>,
    /// Re-seed founders when every agent has died
    pub reseed_on_extinction: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            bounds: Vec2::new(DEFAULT_WORLD_WIDTH, DEFAULT_WORLD_HEIGHT),
            initial_agents: INITIAL_AGENT_COUNT,
            max_population: MAX_POPULATION,
            max_food: MAX_FOOD,
            food_spawn_interval: FOOD_SPAWN_INTERVAL,
            food_max_age: FOOD_MAX_AGE,
            seed: None,
            reseed_on_extinction: true,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("play area must be finite and at least {min} units on each side, got {width}x{height}")]
    InvalidBounds { width: f32, height: f32, min: f32 },

    #[error("population cap must be greater than zero")]
    ZeroPopulationCap,

    #[error("initial population {initial} exceeds population cap {cap}")]
    InitialExceedsCap { initial: usize, cap: usize },

    #[error("food spawn interval must be positive, got {0}")]
    InvalidFoodInterval(f32),

    #[error("food max age must be positive, got {0}")]
    InvalidFoodAge(f32),
}

impl SimConfig {
    /// Check the config for values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min = 2.0 * AGENT_RADIUS;
        let (width, height) = (self.bounds.x, self.bounds.y);
        if !width.is_finite() || !height.is_finite() || width < min || height < min {
            return Err(ConfigError::InvalidBounds { width, height, min });
        }
        if self.max_population == 0 {
            return Err(ConfigError::ZeroPopulationCap);
        }
        if self.initial_agents > self.max_population {
            return Err(ConfigError::InitialExceedsCap {
                initial: self.initial_agents,
                cap: self.max_population,
            });
        }
        if !(self.food_spawn_interval > 0.0) {
            return Err(ConfigError::InvalidFoodInterval(self.food_spawn_interval));
        }
        if !(self.food_max_age > 0.0) {
            return Err(ConfigError::InvalidFoodAge(self.food_max_age));
        }
        Ok(())
    }
}
