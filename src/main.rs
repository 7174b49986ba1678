mod camera;
mod render;
mod selection;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin, egui};
use camera::{CameraState, camera_pan, camera_zoom, setup_camera};
use lifesim::config::*;
use lifesim::{Agent, Population, SimRng, SimulationPlugin, SimulationState};
use render::{draw_agents, draw_food, draw_play_area, draw_selection};
use selection::{SelectedAgent, clear_stale_selection, handle_selection};

fn main() {
    let config = SimConfig::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Agent Life Simulator".to_string(),
                resolution: (config.bounds.x + 200.0, config.bounds.y + 100.0).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .add_plugins(SimulationPlugin { config })
        .init_resource::<CameraState>()
        .init_resource::<SelectedAgent>()
        .add_systems(Startup, setup_camera)
        .add_systems(
            Update,
            (
                camera_zoom,
                camera_pan,
                handle_selection,
                clear_stale_selection,
                draw_play_area,
                draw_food,
                draw_agents,
                draw_selection,
                ui_system,
            ),
        )
        .run();
}

fn ui_system(
    mut contexts: EguiContexts,
    camera_state: Res<CameraState>,
    mut simulation_state: ResMut<SimulationState>,
    mut population: ResMut<Population>,
    mut rng: ResMut<SimRng>,
    selected: Res<SelectedAgent>,
) {
    egui::Window::new("Simulation Info")
        .default_pos(egui::pos2(10.0, 10.0))
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                let running = *simulation_state == SimulationState::Running;
                let button_text = if running { "⏸ Pause" } else { "▶ Resume" };

                if ui.button(button_text).clicked() {
                    *simulation_state = if running {
                        SimulationState::Paused
                    } else {
                        SimulationState::Running
                    };
                }

                ui.label(format!("State: {}", if running { "Running" } else { "Paused" }));
            });

            ui.horizontal(|ui| {
                if ui.button(format!("➕ Spawn {} Agents", MANUAL_SPAWN_COUNT)).clicked() {
                    population.spawn_founders(MANUAL_SPAWN_COUNT, &mut rng.0);
                }
            });

            ui.separator();
            ui.label(format!("Zoom: {:.2}x", camera_state.zoom));
            ui.label("Mouse Wheel - Zoom  •  Middle Mouse - Pan  •  Left Click - Select");

            ui.separator();
            ui.heading("Population");

            let summary = population.summary();
            let stats = &population.stats;
            ui.label(format!(
                "Alive: {}  Dead: {}  Cap: {}",
                summary.live, summary.dead, population.max_population
            ));
            ui.label(format!("Food: {} / {}", summary.food, population.max_food));
            ui.label(format!("Oldest generation: {}", summary.max_generation));
            ui.label(format!("Elapsed: {:.0}s ({} ticks)", stats.elapsed, stats.ticks));

            if summary.live > 0 {
                ui.separator();
                ui.label(format!("Avg Hunger: {:.1}", summary.avg_hunger));
                ui.label(format!("Avg Horniness: {:.1}", summary.avg_horniness));
                ui.label(format!("Avg Energy: {:.1}", summary.avg_energy));
                ui.label(format!("Avg Health: {:.1}", summary.avg_health));
                ui.label(format!("Avg Age: {:.1}s", summary.avg_age));
            }

            ui.separator();
            ui.label(format!("Births: {} (discarded {})", stats.births, stats.discarded_offspring));
            ui.label(format!(
                "Deaths: {} old age, {} starvation",
                stats.deaths_old_age, stats.deaths_starvation
            ));
            ui.label(format!(
                "Food: {} spawned, {} eaten, {} rotted",
                stats.food_spawned, stats.food_eaten, stats.food_rotted
            ));
        });

    let Some(agent) = selected.id.and_then(|id| population.agent(id)) else {
        return;
    };

    egui::Window::new("Selected Agent")
        .default_pos(egui::pos2(10.0, 420.0))
        .show(contexts.ctx_mut(), |ui| agent_inspector(ui, agent));
}

fn agent_inspector(ui: &mut egui::Ui, agent: &Agent) {
    ui.heading(format!("Agent {}", agent.id));
    if agent.is_dead {
        ui.colored_label(egui::Color32::GRAY, "Dead");
    } else {
        ui.label(format!("Drive: {}", agent.drive()));
    }
    ui.label(format!("Generation: {}", agent.generation));
    if let Some((a, b)) = agent.parents {
        ui.label(format!("Parents: {} × {}", a, b));
    }
    ui.label(format!("Position: ({:.1}, {:.1})", agent.position.x, agent.position.y));
    ui.label(format!(
        "Age: {:.1}s / {:.1}s{}",
        agent.age,
        agent.derived.max_age,
        if agent.is_mature() { "" } else { " (immature)" }
    ));
    ui.label(format!("Cooldown: {:.1}s", agent.reproduction_cooldown.max(0.0)));

    ui.separator();
    need_bar(ui, "Hunger", agent.hunger, Some(agent.derived.hunger_threshold));
    need_bar(ui, "Horniness", agent.horniness, Some(agent.derived.horniness_threshold));
    need_bar(ui, "Energy", agent.energy, Some(agent.derived.tiredness_threshold));
    need_bar(ui, "Health", agent.health, None);

    ui.separator();
    ui.label("Traits:");
    let traits = &agent.traits;
    ui.label(format!("  Hunger resistance: {:.2}", traits.hunger_resistance));
    ui.label(format!("  Libido strength: {:.2}", traits.libido_strength));
    ui.label(format!("  Energy efficiency: {:.2}", traits.energy_efficiency));
    ui.label(format!("  Longevity: {:.2}", traits.longevity));
    ui.label(format!("  Base speed: {:.0}", agent.derived.base_speed));
}

fn need_bar(ui: &mut egui::Ui, label: &str, value: f32, threshold: Option<f32>) {
    let ratio = (value / NEED_MAX).clamp(0.0, 1.0);
    let text = match threshold {
        Some(threshold) => format!("{:.0} (threshold {:.0})", value, threshold),
        None => format!("{:.0}", value),
    };
    ui.horizontal(|ui| {
        ui.label(format!("{label}:"));
        ui.add(
            egui::ProgressBar::new(ratio)
                .desired_width(140.0)
                .text(text),
        );
    });
}
