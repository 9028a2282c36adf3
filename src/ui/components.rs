//! UI components and resources for linking Bevy entities to simulation state

use bevy::prelude::*;

use crate::simulation::CityWorld;

/// Resource wrapper for the simulation world
#[derive(Resource)]
pub struct CityWorldResource(pub CityWorld);

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Resource to control overhead camera movement settings
#[derive(Resource)]
pub struct CameraSettings {
    pub movement_speed: f32,
    pub rotation_speed: f32,
    pub zoom_speed: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            movement_speed: 50.0,
            rotation_speed: 1.0,
            zoom_speed: 30.0,
        }
    }
}

/// Links a Bevy entity to a fleet vehicle by index
#[derive(Component)]
pub struct VehicleLink(pub usize);

/// Visual parameters for a vehicle body: base color plus how far the cuboid
/// center sits above the simulation position
#[derive(Component)]
pub struct VehicleVisual {
    pub color: (f32, f32, f32),
    pub half_height: f32,
}

/// Marker for HUD text showing the current view mode
#[derive(Component)]
pub struct ViewModeText;

/// Marker for the text child of the view-toggle button
#[derive(Component)]
pub struct ToggleButtonText;

/// Actions triggered by the HUD buttons
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewButton {
    ToggleView,
    SwitchVehicle,
}
