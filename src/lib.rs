//! Agent life simulation: decaying needs, inherited traits, foraging,
//! mating and aging over a shared food pool.

pub mod agent;
pub mod behavior;
pub mod bounds;
pub mod config;
pub mod food;
pub mod population;
pub mod simulation;
pub mod traits;

pub use agent::{Agent, AgentId, DeathCause, Drive};
pub use bounds::Bounds;
pub use config::{ConfigError, SimConfig};
pub use food::Food;
pub use population::{Population, PopulationStats, PopulationSummary, initialize_population, step};
pub use simulation::{SimRng, SimulationPlugin, SimulationState};
pub use traits::{DerivedValues, Traits};
