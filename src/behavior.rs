//! Per-agent decision and action.
//!
//! `behave` runs against the live agent arena while the population pass is
//! still iterating it. Reads of other agents see whatever earlier agents in
//! the same pass already wrote, and mating writes straight into the mate's
//! slot. Later agents in the pass observe those writes immediately.

use crate::agent::{Agent, Drive};
use crate::bounds::Bounds;
use crate::config::*;
use crate::food::Food;
use bevy::prelude::*;
use rand::Rng;

/// Run one decision for `agents[index]`. Exactly one branch fires, chosen by
/// the agent's current drive. Returns the offspring if the agent mated.
pub fn behave<R: Rng>(
    agents: &mut [Agent],
    index: usize,
    food: &mut [Food],
    dt: f32,
    bounds: &Bounds,
    rng: &mut R,
) -> Option<Agent> {
    if agents[index].is_dead {
        return None;
    }

    match agents[index].drive() {
        Drive::Hungry => {
            forage(&mut agents[index], food, bounds, rng);
            None
        }
        Drive::Tired => {
            rest(&mut agents[index], dt);
            None
        }
        Drive::Horny => court(agents, index, bounds, rng),
        Drive::Idle => {
            wander(&mut agents[index], bounds, rng);
            None
        }
    }
}

/// Head for the nearest uneaten food and eat it once close enough.
/// Hunger is not floored here; the next needs update clamps it.
fn forage<R: Rng>(agent: &mut Agent, food: &mut [Food], bounds: &Bounds, rng: &mut R) {
    let Some(target) = find_nearest_food(agent.position, food) else {
        wander(agent, bounds, rng);
        return;
    };

    let item = &mut food[target];
    agent.seek(item.position);
    if agent.position.distance(item.position) < PROXIMITY_RADIUS {
        item.eaten = true;
        agent.hunger -= FOOD_HUNGER_RELIEF;
        agent.energy += FOOD_ENERGY_GAIN;
    }
}

fn rest(agent: &mut Agent, dt: f32) {
    agent.velocity *= REST_DAMPING;
    agent.energy = (agent.energy + REST_RECOVERY * dt).min(NEED_MAX);
}

/// Chase the first eligible mate and reproduce on contact
fn court<R: Rng>(
    agents: &mut [Agent],
    index: usize,
    bounds: &Bounds,
    rng: &mut R,
) -> Option<Agent> {
    let Some(mate_index) = find_mate(agents, index) else {
        wander(&mut agents[index], bounds, rng);
        return None;
    };

    let (agent, mate) = pair_mut(agents, index, mate_index);
    agent.seek(mate.position);
    if agent.position.distance(mate.position) >= PROXIMITY_RADIUS {
        return None;
    }

    agent.horniness -= MATING_RELIEF;
    mate.horniness -= MATING_RELIEF;
    agent.reproduction_cooldown = MATING_COOLDOWN;
    mate.reproduction_cooldown = MATING_COOLDOWN;

    let midpoint = (agent.position + mate.position) / 2.0;
    let jitter = Vec2::new(
        rng.gen_range(-BIRTH_JITTER..BIRTH_JITTER),
        rng.gen_range(-BIRTH_JITTER..BIRTH_JITTER),
    );
    let child = Agent::offspring(midpoint + jitter, agent, mate, bounds, rng);

    agent.energy -= MATING_ENERGY_COST;
    mate.energy -= MATING_ENERGY_COST;

    Some(child)
}

/// Steer toward the standing wander target, picking a fresh one on arrival
pub fn wander<R: Rng>(agent: &mut Agent, bounds: &Bounds, rng: &mut R) {
    if agent.position.distance(agent.wander_target) < WANDER_ARRIVAL_RADIUS {
        agent.set_random_wander_target(bounds, rng);
    } else {
        agent.seek(agent.wander_target);
    }
}

/// Index of the closest uneaten food item. Ties go to the earlier item.
pub fn find_nearest_food(position: Vec2, food: &[Food]) -> Option<usize> {
    let mut nearest = None;
    let mut closest = f32::MAX;
    for (i, item) in food.iter().enumerate() {
        if item.eaten {
            continue;
        }
        let distance = position.distance(item.position);
        if distance < closest {
            closest = distance;
            nearest = Some(i);
        }
    }
    nearest
}

/// First other agent, in arena order, that is alive, mature, horny and
/// within courting range of `agents[index]`
pub fn find_mate(agents: &[Agent], index: usize) -> Option<usize> {
    let position = agents[index].position;
    agents.iter().enumerate().position(|(i, other)| {
        i != index
            && !other.is_dead
            && other.is_horny()
            && other.is_mature()
            && position.distance(other.position) < COURTING_RADIUS
    })
}

/// Two distinct mutable slots out of the arena
fn pair_mut(agents: &mut [Agent], a: usize, b: usize) -> (&mut Agent, &mut Agent) {
    debug_assert_ne!(a, b, "an agent cannot pair with itself");
    if a < b {
        let (left, right) = agents.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = agents.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
