//! World setup systems for the camera and lighting

use bevy::prelude::*;

use super::components::{CityWorldResource, MainCamera};
use crate::simulation::FollowCamera;

/// System to setup the camera and light around the generated city
pub fn setup_world(mut commands: Commands, city: Res<CityWorldResource>) {
    let grid = city.0.layout.grid_size;

    // Camera starts at the fixed overhead pose
    let pose = FollowCamera::overhead_pose(grid);
    commands.spawn((
        MainCamera,
        Camera3d::default(),
        Transform::from_xyz(pose.position.x, pose.position.y, pose.position.z)
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(grid * 1.5, grid * 2.0, grid * 1.5).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
