use crate::bounds::Bounds;
use crate::config::*;
use crate::traits::{DerivedValues, Traits, mutate_value};
use bevy::prelude::*;
use rand::Rng;
use std::fmt;

pub const DEAD_COLOR: Color = Color::srgb(0.3, 0.3, 0.3);
pub const STARVING_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const HUNGRY_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);
pub const TIRED_COLOR: Color = Color::srgb(0.5, 0.5, 1.0);
pub const HORNY_COLOR: Color = Color::srgb(1.0, 0.0, 1.0);
pub const IDLE_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);
pub const BOUNCE_COLOR: Color = Color::srgb(1.0, 0.2, 0.2);

/// Stable identity of an agent within a population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u64);

impl AgentId {
    /// Placeholder carried by offspring until the population adopts them
    pub const UNASSIGNED: AgentId = AgentId(0);
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The need currently steering an agent, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drive {
    Hungry,
    Tired,
    Horny,
    Idle,
}

impl fmt::Display for Drive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Drive::Hungry => write!(f, "hungry"),
            Drive::Tired => write!(f, "tired"),
            Drive::Horny => write!(f, "horny"),
            Drive::Idle => write!(f, "idle"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    OldAge,
    Starvation,
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeathCause::OldAge => write!(f, "old age"),
            DeathCause::Starvation => write!(f, "starvation"),
        }
    }
}

/// A single agent with decaying needs and inherited traits
#[derive(Debug, Clone)]
pub struct Agent {
    pub id: AgentId,
    pub parents: Option<(AgentId, AgentId)>,
    pub generation: u32,

    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Color,
    /// Set for the tick the agent hit a play-area edge
    pub bounced: bool,

    pub energy: f32,
    pub health: f32,
    pub hunger: f32,
    pub horniness: f32,
    pub age: f32,
    pub is_dead: bool,
    /// Counts down past zero; the agent may mate again once it is <= 0
    pub reproduction_cooldown: f32,

    pub traits: Traits,
    pub derived: DerivedValues,

    pub wander_target: Vec2,
    pub wander_timer: f32,
}

impl Agent {
    /// Agent with the given genome, full energy and health, and no needs
    pub fn new(position: Vec2, velocity: Vec2, color: Color, traits: Traits) -> Self {
        Self {
            id: AgentId::UNASSIGNED,
            parents: None,
            generation: 0,
            position,
            velocity,
            color,
            bounced: false,
            energy: NEED_MAX,
            health: NEED_MAX,
            hunger: 0.0,
            horniness: 0.0,
            age: 0.0,
            is_dead: false,
            reproduction_cooldown: 0.0,
            traits,
            derived: traits.derive(),
            wander_target: position,
            wander_timer: WANDER_TIME,
        }
    }

    /// Founder with a random genome and randomized starting needs
    pub fn founder<R: Rng>(
        position: Vec2,
        velocity: Vec2,
        color: Color,
        bounds: &Bounds,
        rng: &mut R,
    ) -> Self {
        let mut agent = Self::new(position, velocity, color, Traits::random_founder(rng));
        agent.hunger = rng.gen_range(0.0..50.0);
        agent.horniness = rng.gen_range(0.0..40.0);
        agent.energy = rng.gen_range(50.0..100.0);
        agent.set_random_wander_target(bounds, rng);
        agent
    }

    /// Founder placed uniformly inside `bounds` with a random heading, speed and color
    pub fn random_founder<R: Rng>(bounds: &Bounds, rng: &mut R) -> Self {
        let position = bounds.sample_inset(AGENT_RADIUS, rng);
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed = rng.gen_range(FOUNDER_MIN_SPEED..FOUNDER_MAX_SPEED);
        let velocity = Vec2::from_angle(angle) * speed;
        let color = Color::srgb(
            rng.gen_range(0.0..1.0),
            rng.gen_range(0.0..1.0),
            rng.gen_range(0.0..1.0),
        );
        Self::founder(position, velocity, color, bounds, rng)
    }

    /// Newborn of two parents: blended, mutated genome and color, fixed starting needs
    pub fn offspring<R: Rng>(
        position: Vec2,
        parent1: &Agent,
        parent2: &Agent,
        bounds: &Bounds,
        rng: &mut R,
    ) -> Self {
        let traits = Traits::inherit(&parent1.traits, &parent2.traits, rng);
        let derived = traits.derive();

        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let velocity = Vec2::from_angle(angle) * derived.base_speed;

        let c1 = Srgba::from(parent1.color);
        let c2 = Srgba::from(parent2.color);
        let color = Color::srgb(
            mutate_value((c1.red + c2.red) / 2.0, MUTATION_RATE, rng),
            mutate_value((c1.green + c2.green) / 2.0, MUTATION_RATE, rng),
            mutate_value((c1.blue + c2.blue) / 2.0, MUTATION_RATE, rng),
        );

        let mut agent = Self::new(position, velocity, color, traits);
        agent.parents = Some((parent1.id, parent2.id));
        agent.generation = parent1.generation.max(parent2.generation) + 1;
        agent.hunger = OFFSPRING_HUNGER;
        agent.horniness = OFFSPRING_HORNINESS;
        agent.energy = OFFSPRING_ENERGY;
        agent.health = OFFSPRING_HEALTH;
        agent.reproduction_cooldown = OFFSPRING_COOLDOWN;
        agent.set_random_wander_target(bounds, rng);
        agent
    }

    pub fn is_hungry(&self) -> bool {
        self.hunger >= self.derived.hunger_threshold
    }

    pub fn is_horny(&self) -> bool {
        self.horniness >= self.derived.horniness_threshold && self.reproduction_cooldown <= 0.0
    }

    pub fn is_tired(&self) -> bool {
        self.energy <= self.derived.tiredness_threshold
    }

    pub fn is_starving(&self) -> bool {
        self.hunger >= STARVING_THRESHOLD
    }

    pub fn maturity_age(&self) -> f32 {
        self.derived.max_age * MATURITY_FRACTION
    }

    pub fn is_mature(&self) -> bool {
        self.age > self.maturity_age()
    }

    pub fn drive(&self) -> Drive {
        if self.is_hungry() {
            Drive::Hungry
        } else if self.is_tired() {
            Drive::Tired
        } else if self.is_horny() {
            Drive::Horny
        } else {
            Drive::Idle
        }
    }

    /// Mark the agent dead. Its needs are clamped one last time and then frozen.
    pub fn die(&mut self) {
        self.is_dead = true;
        self.color = DEAD_COLOR;
        self.clamp_needs();
    }

    fn clamp_needs(&mut self) {
        self.hunger = self.hunger.clamp(0.0, NEED_MAX);
        self.horniness = self.horniness.clamp(0.0, NEED_MAX);
        self.energy = self.energy.clamp(0.0, NEED_MAX);
        self.health = self.health.clamp(0.0, NEED_MAX);
    }

    /// Advance age and needs by `dt`. Returns the cause if the agent died
    /// during this update; a dead agent is left untouched.
    pub fn update_needs<R: Rng>(
        &mut self,
        dt: f32,
        bounds: &Bounds,
        rng: &mut R,
    ) -> Option<DeathCause> {
        if self.is_dead {
            return None;
        }

        self.age += dt;
        if self.age >= self.derived.max_age {
            self.die();
            return Some(DeathCause::OldAge);
        }

        if self.reproduction_cooldown > 0.0 {
            self.reproduction_cooldown -= dt;
        }

        self.hunger += self.derived.hunger_rate * dt;
        if self.is_mature() {
            self.horniness += self.derived.horniness_rate * dt;
        }
        self.energy -= self.derived.energy_drain_rate * dt;

        // Also floors the transient negatives left by eating and mating
        self.clamp_needs();

        if self.is_starving() {
            self.health -= STARVATION_DAMAGE * dt;
            if self.health <= 0.0 {
                self.die();
                return Some(DeathCause::Starvation);
            }
        } else if self.health < NEED_MAX && !self.is_hungry() {
            self.health = (self.health + HEALTH_REGEN * dt).min(NEED_MAX);
        }

        self.wander_timer -= dt;
        if self.wander_timer <= 0.0 {
            self.set_random_wander_target(bounds, rng);
        }

        None
    }

    pub fn set_random_wander_target<R: Rng>(&mut self, bounds: &Bounds, rng: &mut R) {
        self.wander_target = bounds.wander_point(rng);
        self.wander_timer = WANDER_TIME + rng.gen_range(0.0..WANDER_TIME_JITTER);
    }

    /// Diagnostic color for the current need state. Pure.
    pub fn decide_color(&self) -> Color {
        if self.is_dead {
            DEAD_COLOR
        } else if self.is_starving() {
            STARVING_COLOR
        } else if self.is_hungry() {
            HUNGRY_COLOR
        } else if self.is_tired() {
            TIRED_COLOR
        } else if self.is_horny() && self.is_mature() {
            HORNY_COLOR
        } else {
            IDLE_COLOR
        }
    }

    /// Point the velocity straight at `target` at the current effective speed
    pub fn seek(&mut self, target: Vec2) {
        let direction = (target - self.position).normalize_or_zero();
        self.velocity = direction * self.speed();
    }

    /// Base speed reduced by fatigue and starvation
    pub fn speed(&self) -> f32 {
        let mut speed = self.derived.base_speed;
        if self.is_tired() {
            speed *= TIRED_SPEED_FACTOR;
        }
        if self.is_starving() {
            speed *= STARVING_SPEED_FACTOR;
        }
        speed
    }

    /// 0-1 growth toward maturity, used to scale the drawn radius
    pub fn growth(&self) -> f32 {
        (self.age / self.maturity_age()).clamp(0.0, 1.0)
    }

    /// Color to draw this tick; a bounce overrides the need color
    pub fn display_color(&self) -> Color {
        if self.bounced && !self.is_dead {
            BOUNCE_COLOR
        } else {
            self.color
        }
    }
}
