use crate::selection::SelectedAgent;
use bevy::math::Isometry2d;
use bevy::prelude::*;
use lifesim::config::{AGENT_RADIUS, FOOD_RADIUS};
use lifesim::Population;

/// Smallest drawn radius of a newborn, as a fraction of the adult radius
const NEWBORN_SCALE: f32 = 0.4;

pub fn draw_play_area(mut gizmos: Gizmos, population: Res<Population>) {
    let bounds = population.bounds;
    gizmos.rect_2d(
        Isometry2d::from_translation(bounds.center()),
        bounds.size,
        Color::srgb(0.4, 0.4, 0.4),
    );
}

/// Food fades from green to brown as it rots
pub fn draw_food(mut gizmos: Gizmos, population: Res<Population>) {
    for food in population.food_items() {
        let freshness = food.freshness();
        let color = Color::srgb(0.45 * (1.0 - freshness), 0.3 + 0.7 * freshness, 0.1);
        gizmos.circle_2d(Isometry2d::from_translation(food.position), FOOD_RADIUS, color);
    }
}

/// Agents grow to full size at maturity; corpses are drawn underneath the living
pub fn draw_agents(mut gizmos: Gizmos, population: Res<Population>) {
    for agent in population.dead_agents().chain(population.live_agents()) {
        let radius = AGENT_RADIUS * (NEWBORN_SCALE + (1.0 - NEWBORN_SCALE) * agent.growth());
        gizmos.circle_2d(
            Isometry2d::from_translation(agent.position),
            radius,
            agent.display_color(),
        );
    }
}

/// Ring around the selected agent and a line to whatever it is heading for
pub fn draw_selection(
    mut gizmos: Gizmos,
    population: Res<Population>,
    selected: Res<SelectedAgent>,
) {
    let Some(agent) = selected.id.and_then(|id| population.agent(id)) else {
        return;
    };

    gizmos.circle_2d(
        Isometry2d::from_translation(agent.position),
        AGENT_RADIUS * 2.4,
        Color::srgba(1.0, 1.0, 0.0, 0.6),
    );
    if !agent.is_dead {
        gizmos.line_2d(
            agent.position,
            agent.position + agent.velocity * 0.25,
            Color::srgba(1.0, 1.0, 1.0, 0.5),
        );
    }
}
