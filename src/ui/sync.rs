//! Systems for syncing Bevy entities with simulation state

use bevy::prelude::*;

use super::components::{
    CityWorldResource, MainCamera, ToggleButtonText, VehicleLink, VehicleVisual, ViewModeText,
};

/// System to advance the simulation by one frame.
///
/// Runs once per rendered frame rather than on a fixed clock; the whole speed
/// law is expressed in per-frame units.
pub fn tick_city(mut city: ResMut<CityWorldResource>) {
    city.0.tick();
}

/// System to copy vehicle positions, headings, and fade alpha onto their
/// visual entities
pub fn sync_vehicles(
    city: Res<CityWorldResource>,
    mut vehicle_query: Query<(
        &VehicleLink,
        &VehicleVisual,
        &mut Transform,
        &MeshMaterial3d<StandardMaterial>,
    )>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (link, visual, mut transform, material_handle) in vehicle_query.iter_mut() {
        let Some(vehicle) = city.0.fleet.vehicles.get(link.0) else {
            continue;
        };

        transform.translation = Vec3::new(
            vehicle.position.x,
            vehicle.position.y + visual.half_height,
            vehicle.position.z,
        );
        transform.rotation = Quat::from_rotation_y(vehicle.heading);

        if let Some(material) = materials.get_mut(&material_handle.0) {
            let (r, g, b) = visual.color;
            material.base_color = Color::srgba(r, g, b, vehicle.opacity);
        }
    }
}

/// System to apply the chase pose computed by the tick.
///
/// No pose means overhead mode, where the camera transform is owned by the
/// free-movement input instead.
pub fn sync_camera(
    city: Res<CityWorldResource>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Some(pose) = city.0.last_camera_pose else {
        return;
    };
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    transform.translation = Vec3::new(pose.position.x, pose.position.y, pose.position.z);
    transform.look_at(
        Vec3::new(pose.look_at.x, pose.look_at.y, pose.look_at.z),
        Vec3::Y,
    );
}

/// System to refresh the HUD labels from the camera state
pub fn update_hud_text(
    city: Res<CityWorldResource>,
    mut mode_query: Query<&mut Text, (With<ViewModeText>, Without<ToggleButtonText>)>,
    mut toggle_query: Query<&mut Text, (With<ToggleButtonText>, Without<ViewModeText>)>,
) {
    for mut text in mode_query.iter_mut() {
        **text = city.0.camera.mode_label().to_string();
    }
    for mut text in toggle_query.iter_mut() {
        **text = city.0.camera.toggle_label().to_string();
    }
}
