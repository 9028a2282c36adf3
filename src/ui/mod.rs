//! UI module that visualizes the city scene using Bevy
//!
//! This module is purely for visualization - all simulation logic is in the `simulation` module.
//! The UI reads state from `CityWorld` and renders it using Bevy's 3D graphics.

mod components;
mod hud;
mod input;
mod spawner;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::CityWorldResource;

use components::CameraSettings;
use hud::{handle_view_buttons, setup_hud};
use input::{handle_follow_drag, handle_input, handle_overhead_movement};
use spawner::{spawn_static_props, spawn_vehicles};
use sync::{sync_camera, sync_vehicles, tick_city, update_hud_text};
use world::setup_world;

/// Plugin to register all UI systems
pub struct CityDrivePlugin;

impl Plugin for CityDrivePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .add_systems(
                Startup,
                (
                    setup_world,
                    spawn_static_props.after(setup_world),
                    spawn_vehicles.after(setup_world),
                    setup_hud,
                ),
            )
            // Chained so input lands before the tick and the tick's camera
            // pose is applied in the same frame
            .add_systems(
                Update,
                (
                    handle_input,
                    handle_view_buttons,
                    handle_follow_drag,
                    handle_overhead_movement,
                    tick_city,
                    sync_vehicles,
                    sync_camera,
                    update_hud_text,
                )
                    .chain(),
            );
    }
}
