//! Camera controller and world-level validation tests

use std::f32::consts::FRAC_PI_4;

use city_drive::simulation::{
    CameraMode, CityConfig, CityLayout, CityWorld, Direction, Fleet, FollowCamera, LaneId,
    Position, Vehicle, VehicleModel, ROAD_HEIGHT,
};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn single_vehicle_fleet(position: Position, lane: LaneId) -> Fleet {
    let layout = CityLayout::default();
    let mut fleet = Fleet::new(&layout);
    fleet
        .vehicles
        .push(Vehicle::new(VehicleModel::Sedan, position, lane));
    fleet.select_active();
    fleet
}

#[test]
fn test_toggle_state_machine() {
    let layout = CityLayout::default();
    let mut fleet = Fleet::new(&layout);
    fleet.spawn_district(&layout, 4, 0.0, 0);

    let mut camera = FollowCamera::new();
    assert_eq!(camera.mode(), CameraMode::Overhead);
    assert_eq!(camera.mode_label(), "View: Overhead");
    assert_eq!(camera.toggle_label(), "Switch to Car Cam");

    // Entering follow mode picks a vehicle when none is active
    assert_eq!(fleet.active_index(), None);
    camera.toggle(&mut fleet);
    assert_eq!(camera.mode(), CameraMode::Follow);
    assert!(fleet.active_index().is_some());
    assert_eq!(camera.mode_label(), "View: Car Cam");
    assert_eq!(camera.toggle_label(), "Switch to Overhead");

    // Leaving follow mode zeroes any accumulated drag rotation
    camera.press(100.0, 100.0);
    camera.drag_to(150.0, 120.0);
    camera.toggle(&mut fleet);
    assert_eq!(camera.mode(), CameraMode::Overhead);
    assert_eq!(camera.target_yaw, 0.0);
    assert_eq!(camera.target_pitch, 0.0);
    assert_eq!(camera.current_yaw, 0.0);
    assert_eq!(camera.current_pitch, 0.0);
}

#[test]
fn test_drag_accumulates_and_clamps_pitch() {
    let mut fleet = single_vehicle_fleet(Position::new(0.0, 0.15, 16.0), LaneId(0));
    let mut camera = FollowCamera::new();
    camera.toggle(&mut fleet);

    camera.press(0.0, 0.0);
    camera.drag_to(100.0, 0.0);
    assert!(approx(camera.target_yaw, 0.5));

    // Further movement accumulates from the new anchor
    camera.drag_to(200.0, 0.0);
    assert!(approx(camera.target_yaw, 1.0));

    // Pitch clamps at 45 degrees no matter how far the pointer travels
    camera.drag_to(200.0, 10000.0);
    assert!(approx(camera.target_pitch, FRAC_PI_4));
    camera.drag_to(200.0, -30000.0);
    assert!(approx(camera.target_pitch, -FRAC_PI_4));
}

#[test]
fn test_release_resets_targets() {
    let mut fleet = single_vehicle_fleet(Position::new(0.0, 0.15, 16.0), LaneId(0));
    let mut camera = FollowCamera::new();
    camera.toggle(&mut fleet);

    camera.press(0.0, 0.0);
    camera.drag_to(100.0, 50.0);
    assert!(camera.target_yaw != 0.0);
    assert!(camera.target_pitch != 0.0);

    camera.release();
    assert_eq!(camera.target_yaw, 0.0);
    assert_eq!(camera.target_pitch, 0.0);

    // Movement without a fresh press is ignored
    camera.drag_to(500.0, 500.0);
    assert_eq!(camera.target_yaw, 0.0);
}

#[test]
fn test_drag_ignored_in_overhead_mode() {
    let mut camera = FollowCamera::new();
    camera.press(0.0, 0.0);
    camera.drag_to(100.0, 100.0);
    assert_eq!(camera.target_yaw, 0.0);
    assert_eq!(camera.target_pitch, 0.0);
}

#[test]
fn test_update_requires_follow_mode_and_active_vehicle() {
    let layout = CityLayout::default();
    let mut empty = Fleet::new(&layout);
    let mut camera = FollowCamera::new();

    // Overhead mode never yields a pose
    assert!(camera.update(&empty).is_none());

    // Follow mode with an empty fleet has nothing to chase
    camera.toggle(&mut empty);
    assert_eq!(camera.mode(), CameraMode::Follow);
    assert_eq!(empty.active_index(), None);
    assert!(camera.update(&empty).is_none());
}

#[test]
fn test_follow_pose_behind_eastbound_vehicle() {
    let mut fleet = single_vehicle_fleet(Position::new(10.0, 0.15, 16.0), LaneId(0));
    let mut camera = FollowCamera::new();
    camera.toggle(&mut fleet);

    let pose = camera.update(&fleet).expect("pose in follow mode");

    // Camera sits 5 units behind the vehicle at a fixed height
    assert!(approx(pose.position.x, 5.0));
    assert!(approx(pose.position.y, ROAD_HEIGHT + 2.0));
    assert!(approx(pose.position.z, 16.0));

    // With no drag the look-at point sits 10 units ahead at vehicle height
    assert!(approx(pose.look_at.x, 20.0));
    assert!(approx(pose.look_at.y, 0.15));
    assert!(approx(pose.look_at.z, 16.0));
}

#[test]
fn test_follow_pose_behind_southbound_vehicle() {
    let mut fleet = single_vehicle_fleet(Position::new(14.0, 0.15, 0.0), LaneId(3));
    assert_eq!(fleet.vehicles[0].direction, Direction::South);

    let mut camera = FollowCamera::new();
    camera.toggle(&mut fleet);
    let pose = camera.update(&fleet).expect("pose in follow mode");

    assert!(approx(pose.position.x, 14.0));
    assert!(approx(pose.position.z, 5.0));
    assert!(approx(pose.look_at.z, -10.0));
}

#[test]
fn test_yaw_swings_look_at_point() {
    let mut fleet = single_vehicle_fleet(Position::new(0.0, 0.15, 16.0), LaneId(0));
    let mut camera = FollowCamera::new();
    camera.toggle(&mut fleet);

    camera.target_yaw = 0.5;
    camera.current_yaw = 0.5;
    camera.target_pitch = 0.3;
    camera.current_pitch = 0.3;

    let pose = camera.update(&fleet).expect("pose in follow mode");
    assert!(approx(pose.look_at.x, 10.0 + 0.5_f32.sin() * 5.0));
    assert!(approx(pose.look_at.y, 0.15 + 0.3_f32.sin() * 3.0));
    // The Z component only follows the travel direction
    assert!(approx(pose.look_at.z, 16.0));
}

#[test]
fn test_rotation_smoothing_approaches_target() {
    let mut fleet = single_vehicle_fleet(Position::new(0.0, 0.15, 16.0), LaneId(0));
    let mut camera = FollowCamera::new();
    camera.toggle(&mut fleet);

    camera.target_yaw = 1.0;
    let mut last = 0.0;
    for _ in 0..50 {
        camera.update(&fleet);
        assert!(camera.current_yaw > last);
        assert!(camera.current_yaw < 1.0);
        last = camera.current_yaw;
    }
    assert!(camera.current_yaw > 0.99);
}

#[test]
fn test_overhead_pose() {
    let pose = FollowCamera::overhead_pose(100.0);
    assert!(approx(pose.position.x, 80.0));
    assert!(approx(pose.position.y, 80.0));
    assert!(approx(pose.position.z, 80.0));
    assert!(approx(pose.look_at.x, 0.0));
    assert!(approx(pose.look_at.z, 0.0));
}

#[test]
fn test_create_city_populates_world() {
    let config = CityConfig {
        seed: Some(42),
        ..CityConfig::default()
    };
    let world = CityWorld::create_city(&config).expect("default config is valid");

    assert_eq!(world.fleet.len(), 12);
    assert!(!world.props.is_empty());
    assert!(world.fleet.active_index().is_some());
    assert_eq!(world.frame, 0);
    assert!(world.last_camera_pose.is_none());
}

#[test]
fn test_create_city_rejects_tiny_grid() {
    let config = CityConfig {
        grid_size: 5.0,
        ..CityConfig::default()
    };
    assert!(CityWorld::create_city(&config).is_err());
}

#[test]
fn test_seeded_worlds_are_reproducible() {
    let config = CityConfig {
        seed: Some(7),
        ..CityConfig::default()
    };
    let a = CityWorld::create_city(&config).expect("valid config");
    let b = CityWorld::create_city(&config).expect("valid config");

    assert_eq!(a.props.len(), b.props.len());
    for (pa, pb) in a.props.iter().zip(b.props.iter()) {
        assert_eq!(pa, pb);
    }
    assert_eq!(a.fleet.active_index(), b.fleet.active_index());
}

#[test]
fn test_tick_advances_frame_and_vehicles() {
    let config = CityConfig {
        seed: Some(1),
        ..CityConfig::default()
    };
    let mut world = CityWorld::create_city(&config).expect("valid config");
    let start_x = world.fleet.vehicles[0].position.x;

    world.tick();
    assert_eq!(world.frame, 1);
    assert!(world.fleet.vehicles[0].position.x > start_x);

    // Overhead mode leaves no chase pose behind
    assert!(world.last_camera_pose.is_none());
}

#[test]
fn test_toggle_view_produces_chase_pose() {
    let config = CityConfig {
        seed: Some(3),
        ..CityConfig::default()
    };
    let mut world = CityWorld::create_city(&config).expect("valid config");

    assert_eq!(world.toggle_view(), CameraMode::Follow);
    world.tick();
    assert!(world.last_camera_pose.is_some());

    assert_eq!(world.toggle_view(), CameraMode::Overhead);
    world.tick();
    assert!(world.last_camera_pose.is_none());
}

#[test]
fn test_followed_vehicle_reselected_after_wrap() {
    let config = CityConfig {
        seed: Some(9),
        ..CityConfig::default()
    };
    let mut world = CityWorld::create_city(&config).expect("valid config");
    world.toggle_view();
    assert_eq!(world.camera.mode(), CameraMode::Follow);

    let active = world.fleet.active_index().expect("active vehicle selected");
    let bounds = world.layout.wrap_bounds();

    // Park the followed vehicle just past the boundary it travels toward so
    // the next frame wraps it
    {
        let vehicle = &mut world.fleet.vehicles[active];
        match vehicle.direction {
            Direction::East => vehicle.position.x = bounds.x_max + 1.0,
            Direction::West => vehicle.position.x = bounds.x_min - 1.0,
            Direction::North => vehicle.position.z = bounds.z_max + 1.0,
            Direction::South => vehicle.position.z = bounds.z_min - 1.0,
        }
    }

    world.tick();
    let reselected = world.fleet.active_index().expect("still has a selection");
    assert_ne!(reselected, active);
}

#[test]
fn test_switch_vehicle_changes_selection() {
    let config = CityConfig {
        seed: Some(5),
        ..CityConfig::default()
    };
    let mut world = CityWorld::create_city(&config).expect("valid config");
    let mut previous = world.fleet.active_index();
    assert!(previous.is_some());

    for _ in 0..10 {
        world.switch_vehicle();
        let current = world.fleet.active_index();
        assert!(current.is_some());
        assert_ne!(current, previous);
        previous = current;
    }
}
