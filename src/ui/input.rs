//! Input handling systems

use bevy::prelude::*;

use super::components::{CameraSettings, CityWorldResource, MainCamera};
use crate::simulation::{CameraMode, FollowCamera};

/// Handle basic keyboard input
pub fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut exit: MessageWriter<AppExit>,
    mut city: ResMut<CityWorldResource>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }

    if keyboard.just_pressed(KeyCode::KeyC) {
        let mode = city.0.toggle_view();
        if mode == CameraMode::Overhead {
            restore_overhead_pose(&city, &mut camera_query);
        }
    }

    if keyboard.just_pressed(KeyCode::KeyV) {
        city.0.switch_vehicle();
    }
}

/// Snap the camera transform back to the fixed overhead pose
pub fn restore_overhead_pose(
    city: &CityWorldResource,
    camera_query: &mut Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    let pose = FollowCamera::overhead_pose(city.0.layout.grid_size);
    transform.translation = Vec3::new(pose.position.x, pose.position.y, pose.position.z);
    transform.look_at(
        Vec3::new(pose.look_at.x, pose.look_at.y, pose.look_at.z),
        Vec3::Y,
    );
}

/// System to feed mouse drags into the follow camera's look rotation
pub fn handle_follow_drag(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut city: ResMut<CityWorldResource>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    if mouse.just_pressed(MouseButton::Left) {
        if let Some(cursor) = window.cursor_position() {
            city.0.camera.press(cursor.x, cursor.y);
        }
    } else if mouse.pressed(MouseButton::Left) {
        if let Some(cursor) = window.cursor_position() {
            city.0.camera.drag_to(cursor.x, cursor.y);
        }
    }

    if mouse.just_released(MouseButton::Left) {
        city.0.camera.release();
    }
}

/// System for free camera movement while in overhead mode
pub fn handle_overhead_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    settings: Res<CameraSettings>,
    city: Res<CityWorldResource>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if city.0.camera.mode() != CameraMode::Overhead {
        return;
    }
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    let dt = time.delta_secs();

    // Pan on the ground plane relative to where the camera faces
    let forward = transform.forward();
    let flat_forward = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
    let flat_right = Vec3::new(-flat_forward.z, 0.0, flat_forward.x);

    let mut pan = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        pan += flat_forward;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        pan -= flat_forward;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        pan -= flat_right;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        pan += flat_right;
    }
    transform.translation += pan * settings.movement_speed * dt;

    // Orbit around the scene center
    let mut yaw = 0.0;
    if keyboard.pressed(KeyCode::KeyQ) {
        yaw += settings.rotation_speed * dt;
    }
    if keyboard.pressed(KeyCode::KeyE) {
        yaw -= settings.rotation_speed * dt;
    }
    if yaw != 0.0 {
        let rotation = Quat::from_rotation_y(yaw);
        transform.translation = rotation * transform.translation;
        transform.look_at(Vec3::ZERO, Vec3::Y);
    }

    // Zoom along the view direction
    let mut zoom = 0.0;
    if keyboard.pressed(KeyCode::KeyZ) {
        zoom += settings.zoom_speed * dt;
    }
    if keyboard.pressed(KeyCode::KeyX) {
        zoom -= settings.zoom_speed * dt;
    }
    if zoom != 0.0 {
        let forward = transform.forward();
        transform.translation += forward * zoom;
    }
}
