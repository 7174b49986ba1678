use crate::config::*;
use rand::Rng;

/// Heritable personality traits, each on a 0-1 scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Traits {
    pub hunger_resistance: f32,
    pub libido_strength: f32,
    pub energy_efficiency: f32,
    pub longevity: f32,
}

/// Thresholds and rates derived from a genome. Computed once when the
/// genome is set and cached on the agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedValues {
    pub hunger_threshold: f32,
    pub horniness_threshold: f32,
    pub tiredness_threshold: f32,
    pub hunger_rate: f32,
    pub horniness_rate: f32,
    pub energy_drain_rate: f32,
    pub max_age: f32,
    pub base_speed: f32,
}

/// Nudge a 0-1 value by up to `rate` in either direction
pub fn mutate_value<R: Rng>(value: f32, rate: f32, rng: &mut R) -> f32 {
    let mutation = rng.gen_range(-1.0..=1.0_f32) * rate;
    (value + mutation).clamp(0.0, 1.0)
}

impl Traits {
    /// Traits for a founder agent, drawn from sub-ranges that avoid
    /// hopeless genomes at the start of a run
    pub fn random_founder<R: Rng>(rng: &mut R) -> Self {
        Self {
            hunger_resistance: rng.gen_range(0.3..1.0),
            libido_strength: rng.gen_range(0.2..1.0),
            energy_efficiency: rng.gen_range(0.4..1.0),
            longevity: rng.gen_range(0.5..1.0),
        }
    }

    /// Average two parents' traits and mutate each component independently
    pub fn inherit<R: Rng>(a: &Traits, b: &Traits, rng: &mut R) -> Self {
        Self {
            hunger_resistance: mutate_value(
                (a.hunger_resistance + b.hunger_resistance) / 2.0,
                MUTATION_RATE,
                rng,
            ),
            libido_strength: mutate_value(
                (a.libido_strength + b.libido_strength) / 2.0,
                MUTATION_RATE,
                rng,
            ),
            energy_efficiency: mutate_value(
                (a.energy_efficiency + b.energy_efficiency) / 2.0,
                MUTATION_RATE,
                rng,
            ),
            longevity: mutate_value((a.longevity + b.longevity) / 2.0, MUTATION_RATE, rng),
        }
    }

    pub fn derive(&self) -> DerivedValues {
        DerivedValues {
            hunger_threshold: 50.0 + self.hunger_resistance * 40.0, // 50-90
            // Higher libido lowers the threshold
            horniness_threshold: 60.0 + (1.0 - self.libido_strength) * 30.0, // 60-90
            tiredness_threshold: 20.0 + self.energy_efficiency * 20.0, // 20-40
            hunger_rate: 5.0 + (1.0 - self.hunger_resistance) * 10.0, // 5-15
            horniness_rate: 2.0 + self.libido_strength * 8.0,          // 2-10
            energy_drain_rate: 5.0 + (1.0 - self.energy_efficiency) * 8.0, // 5-13
            max_age: 60.0 + self.longevity * 60.0,                     // 60-120 seconds
            base_speed: 70.0 + self.energy_efficiency * 80.0,
        }
    }
}
