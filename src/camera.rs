use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use lifesim::Population;

const MIN_ZOOM: f32 = 0.25;
const MAX_ZOOM: f32 = 8.0;
/// Magnification per wheel notch
const ZOOM_STEP: f32 = 1.1;
/// Trackpads report pixels; this many make up one notch
const PIXELS_PER_NOTCH: f32 = 100.0;

#[derive(Component)]
pub struct MainCamera;

/// Current magnification; 1.0 draws one world unit per pixel
#[derive(Resource)]
pub struct CameraState {
    pub zoom: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

/// Spawn the 2D camera looking at the middle of the play area
pub fn setup_camera(mut commands: Commands, population: Res<Population>) {
    let center = population.bounds.center();
    commands.spawn((
        Camera2d,
        MainCamera,
        Transform::from_translation(center.extend(0.0)),
    ));
}

pub fn camera_zoom(
    mut scroll_events: EventReader<MouseWheel>,
    mut camera_state: ResMut<CameraState>,
    mut query: Query<&mut OrthographicProjection, With<MainCamera>>,
) {
    let notches: f32 = scroll_events
        .read()
        .map(|event| match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / PIXELS_PER_NOTCH,
        })
        .sum();
    if notches == 0.0 {
        return;
    }

    camera_state.zoom = (camera_state.zoom * ZOOM_STEP.powf(notches)).clamp(MIN_ZOOM, MAX_ZOOM);
    if let Ok(mut projection) = query.get_single_mut() {
        projection.scale = camera_state.zoom.recip();
    }
}

/// Drag with the middle mouse button to pan. The view center never leaves
/// the play area.
pub fn camera_pan(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut motion_events: EventReader<MouseMotion>,
    camera_state: Res<CameraState>,
    population: Res<Population>,
    mut query: Query<&mut Transform, With<MainCamera>>,
) {
    let drag: Vec2 = motion_events.read().map(|event| event.delta).sum();
    if !mouse_button.pressed(MouseButton::Middle) || drag == Vec2::ZERO {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };

    // Screen y grows downward, world y upward
    let offset = Vec2::new(-drag.x, drag.y) / camera_state.zoom;
    let center = (transform.translation.truncate() + offset)
        .clamp(Vec2::ZERO, population.bounds.size);
    transform.translation = center.extend(transform.translation.z);
}
