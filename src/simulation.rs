use crate::config::*;
use crate::population::{Population, step};
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Resource to control simulation state
#[derive(Resource, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum SimulationState {
    #[default]
    Running,
    Paused,
}

/// The one random source every simulation call draws from
#[derive(Resource)]
pub struct SimRng(pub ChaCha8Rng);

impl SimRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(ChaCha8Rng::seed_from_u64(seed)),
            None => Self(ChaCha8Rng::from_entropy()),
        }
    }
}

/// Installs the world, its random source and the tick system
#[derive(Default)]
pub struct SimulationPlugin {
    pub config: SimConfig,
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = match self.config.validate() {
            Ok(()) => self.config.clone(),
            Err(err) => {
                error!("invalid simulation config ({err}), falling back to defaults");
                SimConfig::default()
            }
        };

        let mut rng = SimRng::new(config.seed);
        let population = Population::from_config(&config, &mut rng.0);
        info!(
            "seeded {} agents in a {}x{} play area",
            population.agents.len(),
            config.bounds.x,
            config.bounds.y
        );

        app.insert_resource(population)
            .insert_resource(rng)
            .insert_resource(config)
            .init_resource::<SimulationState>()
            .add_systems(
                Update,
                (advance_population, population_failsafe)
                    .chain()
                    .run_if(|state: Res<SimulationState>| *state == SimulationState::Running),
            );
    }
}

/// System to advance the world by the frame delta
pub fn advance_population(
    time: Res<Time>,
    mut population: ResMut<Population>,
    mut rng: ResMut<SimRng>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }
    step(&mut population, dt, &mut rng.0);
}

/// System to re-seed founders when every agent has died
pub fn population_failsafe(
    config: Res<SimConfig>,
    mut population: ResMut<Population>,
    mut rng: ResMut<SimRng>,
) {
    if !config.reseed_on_extinction || population.live_count() > 0 {
        return;
    }
    let added = population.spawn_founders(config.initial_agents, &mut rng.0);
    info!("population went extinct, re-seeded {} founders", added);
}
