use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use analytics::config::DashboardConfig;
use analytics::AnalyticsSet;

mod native_fetch;
mod web_fetch;

#[cfg(not(target_arch = "wasm32"))]
use native_fetch as transport;
#[cfg(target_arch = "wasm32")]
use web_fetch as transport;

fn main() {
    let config = dashboard_config();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "ESG KPI Dashboard".to_string(),
                resolution: (1280.0, 800.0).into(),
                present_mode: PresentMode::AutoVsync,
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        // Reactive so a finished background fetch is picked up without input.
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
            unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(250)),
        })
        .insert_resource(ClearColor(Color::srgb(0.07, 0.08, 0.09)))
        // Before the plugin so its init_resource keeps this value.
        .insert_resource(config)
        .add_plugins((analytics::AnalyticsPlugin, ui::UiPlugin))
        .add_systems(Startup, spawn_camera)
        .add_systems(
            Update,
            transport::spawn_kpi_fetches.after(AnalyticsSet::Fetch),
        )
        .run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

#[cfg(not(target_arch = "wasm32"))]
fn dashboard_config() -> DashboardConfig {
    DashboardConfig::from_env()
}

#[cfg(target_arch = "wasm32")]
fn dashboard_config() -> DashboardConfig {
    DashboardConfig::with_api_base_url(web_fetch::query_api_base_url().as_deref())
}
