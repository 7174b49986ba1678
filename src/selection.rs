use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use lifesim::config::SELECTION_RADIUS;
use lifesim::{AgentId, Population};

/// Resource to track the currently selected agent
#[derive(Resource, Default)]
pub struct SelectedAgent {
    pub id: Option<AgentId>,
}

/// System to select the agent nearest a left click
pub fn handle_selection(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    population: Res<Population>,
    mut selected: ResMut<SelectedAgent>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok(world_pos) = camera.viewport_to_world_2d(camera_transform, cursor_pos) else {
        return;
    };

    let mut closest: Option<(AgentId, f32)> = None;
    for agent in &population.agents {
        let distance = world_pos.distance(agent.position);
        if distance > SELECTION_RADIUS {
            continue;
        }
        match closest {
            Some((_, closest_dist)) if distance >= closest_dist => {}
            _ => closest = Some((agent.id, distance)),
        }
    }

    selected.id = closest.map(|(id, _)| id);
}

/// Forget the selection once the agent has been culled
pub fn clear_stale_selection(population: Res<Population>, mut selected: ResMut<SelectedAgent>) {
    if let Some(id) = selected.id {
        if population.agent(id).is_none() {
            selected.id = None;
        }
    }
}
