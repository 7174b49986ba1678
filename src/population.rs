use crate::agent::{Agent, AgentId, DeathCause};
use crate::behavior::behave;
use crate::bounds::Bounds;
use crate::config::*;
use crate::food::Food;
use bevy::prelude::*;
use rand::Rng;

/// Running counters for the whole run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopulationStats {
    pub ticks: u64,
    pub elapsed: f32,
    pub births: u64,
    /// Offspring dropped because the population was at its cap
    pub discarded_offspring: u64,
    pub deaths_old_age: u64,
    pub deaths_starvation: u64,
    pub food_spawned: u64,
    pub food_eaten: u64,
    pub food_rotted: u64,
}

/// Averages over the live agents, for the stats panel
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PopulationSummary {
    pub live: usize,
    pub dead: usize,
    pub food: usize,
    pub avg_hunger: f32,
    pub avg_horniness: f32,
    pub avg_energy: f32,
    pub avg_health: f32,
    pub avg_age: f32,
    pub max_generation: u32,
}

/// World state: the agent arena, the food pool and spawn bookkeeping
#[derive(Resource, Debug, Clone)]
pub struct Population {
    pub agents: Vec<Agent>,
    pub food: Vec<Food>,
    pub bounds: Bounds,
    pub food_spawn_timer: f32,
    pub food_spawn_interval: f32,
    pub food_max_age: f32,
    pub max_population: usize,
    pub max_food: usize,
    pub stats: PopulationStats,
    next_id: u64,
}

impl Population {
    /// Empty world with default caps
    pub fn new(bounds: Bounds) -> Self {
        Self {
            agents: Vec::new(),
            food: Vec::new(),
            bounds,
            food_spawn_timer: 0.0,
            food_spawn_interval: FOOD_SPAWN_INTERVAL,
            food_max_age: FOOD_MAX_AGE,
            max_population: MAX_POPULATION,
            max_food: MAX_FOOD,
            stats: PopulationStats::default(),
            next_id: 1,
        }
    }

    /// World seeded with `config.initial_agents` founders and the config's caps
    pub fn from_config<R: Rng>(config: &SimConfig, rng: &mut R) -> Self {
        let mut population = Self::new(Bounds {
            size: config.bounds,
        });
        population.food_spawn_interval = config.food_spawn_interval;
        population.food_max_age = config.food_max_age;
        population.max_population = config.max_population;
        population.max_food = config.max_food;
        population.spawn_founders(config.initial_agents, rng);
        population
    }

    /// Put an agent into the arena under a fresh id
    pub fn adopt(&mut self, mut agent: Agent) -> AgentId {
        let id = AgentId(self.next_id);
        self.next_id += 1;
        agent.id = id;
        self.agents.push(agent);
        id
    }

    /// Add up to `count` random founders without exceeding the population cap.
    /// Returns how many were added.
    pub fn spawn_founders<R: Rng>(&mut self, count: usize, rng: &mut R) -> usize {
        let room = self.max_population.saturating_sub(self.agents.len());
        let count = count.min(room);
        for _ in 0..count {
            let agent = Agent::random_founder(&self.bounds, rng);
            self.adopt(agent);
        }
        count
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.id == id)
    }

    pub fn live_agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(|agent| !agent.is_dead)
    }

    pub fn dead_agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(|agent| agent.is_dead)
    }

    pub fn food_items(&self) -> impl Iterator<Item = &Food> {
        self.food.iter()
    }

    pub fn live_count(&self) -> usize {
        self.live_agents().count()
    }

    pub fn summary(&self) -> PopulationSummary {
        let mut summary = PopulationSummary {
            food: self.food.len(),
            ..default()
        };
        for agent in &self.agents {
            if agent.is_dead {
                summary.dead += 1;
                continue;
            }
            summary.live += 1;
            summary.avg_hunger += agent.hunger;
            summary.avg_horniness += agent.horniness;
            summary.avg_energy += agent.energy;
            summary.avg_health += agent.health;
            summary.avg_age += agent.age;
            summary.max_generation = summary.max_generation.max(agent.generation);
        }
        if summary.live > 0 {
            let n = summary.live as f32;
            summary.avg_hunger /= n;
            summary.avg_horniness /= n;
            summary.avg_energy /= n;
            summary.avg_health /= n;
            summary.avg_age /= n;
        }
        summary
    }

    fn spawn_food<R: Rng>(&mut self, dt: f32, rng: &mut R) {
        self.food_spawn_timer += dt;
        if self.food_spawn_timer >= self.food_spawn_interval && self.food.len() < self.max_food {
            self.food_spawn_timer = 0.0;
            let position = self.bounds.sample_inset(AGENT_RADIUS, rng);
            self.food.push(Food::with_max_age(position, self.food_max_age));
            self.stats.food_spawned += 1;
        }
    }

    fn age_food(&mut self, dt: f32) {
        let stats = &mut self.stats;
        self.food.retain_mut(|item| {
            item.advance(dt);
            if item.eaten {
                stats.food_eaten += 1;
                false
            } else if item.is_rotten() {
                stats.food_rotted += 1;
                false
            } else {
                true
            }
        });
    }

    /// The main pass. Visits agents by index over the arena as it stood at
    /// the start of the pass, so offspring collected here are not visited
    /// until the next tick.
    fn run_agents<R: Rng>(&mut self, dt: f32, rng: &mut R) -> Vec<Agent> {
        let mut offspring = Vec::new();

        for index in 0..self.agents.len() {
            if self.agents[index].is_dead {
                // Corpses keep aging so the grace period eventually runs out
                self.agents[index].age += dt;
                continue;
            }

            if let Some(cause) = self.agents[index].update_needs(dt, &self.bounds, rng) {
                self.record_death(index, cause);
                continue;
            }

            let color = self.agents[index].decide_color();
            self.agents[index].color = color;

            let Some(child) = behave(&mut self.agents, index, &mut self.food, dt, &self.bounds, rng)
            else {
                continue;
            };

            if self.agents.len() + offspring.len() < self.max_population {
                debug!(
                    "birth: parents {:?} at ({:.1}, {:.1})",
                    child.parents, child.position.x, child.position.y
                );
                self.stats.births += 1;
                offspring.push(child);
            } else {
                debug!("offspring discarded, population at cap {}", self.max_population);
                self.stats.discarded_offspring += 1;
            }
        }

        offspring
    }

    fn record_death(&mut self, index: usize, cause: DeathCause) {
        let agent = &self.agents[index];
        debug!("agent {} died of {} at age {:.1}", agent.id, cause, agent.age);
        match cause {
            DeathCause::OldAge => self.stats.deaths_old_age += 1,
            DeathCause::Starvation => self.stats.deaths_starvation += 1,
        }
    }

    /// Move live agents by their velocity and bounce them off the edges
    fn integrate(&mut self, dt: f32) {
        for agent in &mut self.agents {
            agent.bounced = false;
            if agent.is_dead {
                continue;
            }
            agent.position += agent.velocity * dt;
            agent.bounced = self
                .bounds
                .reflect(&mut agent.position, &mut agent.velocity, AGENT_RADIUS);
        }
    }

    /// Drop corpses whose age has run past their lifespan plus the grace period
    fn cull_dead(&mut self) {
        self.agents.retain(|agent| {
            !(agent.is_dead && agent.age > agent.derived.max_age + DEATH_GRACE_PERIOD)
        });
    }
}

/// Seed a world of `count` founders inside `bounds`
pub fn initialize_population<R: Rng>(bounds: Bounds, count: usize, rng: &mut R) -> Population {
    let mut population = Population::new(bounds);
    population.spawn_founders(count, rng);
    population
}

/// Advance the world by one tick of `dt` seconds
pub fn step<R: Rng>(world: &mut Population, dt: f32, rng: &mut R) {
    world.spawn_food(dt, rng);
    world.age_food(dt);
    let offspring = world.run_agents(dt, rng);
    world.integrate(dt);
    for child in offspring {
        world.adopt(child);
    }
    world.cull_dead();

    world.stats.ticks += 1;
    world.stats.elapsed += dt;
}
