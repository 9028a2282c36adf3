//! Systems for spawning visual entities from the static blueprint and fleet

use bevy::prelude::*;

use super::components::{CityWorldResource, VehicleLink, VehicleVisual};
use crate::simulation::{BuildingStyle, PropKind, StaticProp, VehicleModel, PLOT_SPACING, ROAD_WIDTH};

/// System to create one mesh per static prop in the blueprint
pub fn spawn_static_props(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    city: Res<CityWorldResource>,
) {
    for prop in &city.0.props {
        spawn_prop_visual(&mut commands, &mut meshes, &mut materials, prop);
    }
}

fn spawn_prop_visual(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    prop: &StaticProp,
) {
    const SLAB_THICKNESS: f32 = 1.0;
    const TILE_THICKNESS: f32 = 0.2;
    const ROAD_THICKNESS: f32 = 0.04;

    let (mesh, color, y) = match prop.kind {
        PropKind::GroundSlab { width, depth } => (
            Cuboid::new(width, SLAB_THICKNESS, depth),
            Color::srgb(0.3, 0.55, 0.3),
            prop.position.y,
        ),
        PropKind::GroundTile => (
            Cuboid::new(PLOT_SPACING, TILE_THICKNESS, PLOT_SPACING),
            Color::srgb(0.35, 0.6, 0.3),
            prop.position.y,
        ),
        PropKind::Intersection => (
            Cuboid::new(ROAD_WIDTH, ROAD_THICKNESS, ROAD_WIDTH),
            Color::srgb(0.25, 0.25, 0.25),
            prop.position.y,
        ),
        PropKind::RoadSegment { .. } => (
            Cuboid::new(PLOT_SPACING, ROAD_THICKNESS, ROAD_WIDTH),
            Color::srgb(0.2, 0.2, 0.2),
            prop.position.y,
        ),
        PropKind::Building(style) => {
            let (width, height, depth, color) = building_dimensions(style);
            let height = height * prop.scale;
            (
                Cuboid::new(width, height, depth),
                color,
                prop.position.y + height / 2.0,
            )
        }
    };

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(color)),
        Transform::from_translation(Vec3::new(prop.position.x, y, prop.position.z))
            .with_rotation(Quat::from_rotation_y(prop.rotation_y)),
    ));
}

/// Footprint, unscaled height, and color per building style
fn building_dimensions(style: BuildingStyle) -> (f32, f32, f32, Color) {
    match style {
        BuildingStyle::Block => (8.0, 6.0, 8.0, Color::srgb(0.6, 0.6, 0.65)),
        BuildingStyle::Tower => (6.0, 12.0, 6.0, Color::srgb(0.5, 0.55, 0.6)),
        BuildingStyle::Skyscraper => (5.0, 20.0, 5.0, Color::srgb(0.4, 0.5, 0.6)),
        BuildingStyle::Cottage => (4.0, 3.0, 4.0, Color::srgb(0.75, 0.6, 0.45)),
    }
}

/// System to create the vehicle body meshes, linked back to fleet indices
pub fn spawn_vehicles(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    city: Res<CityWorldResource>,
) {
    for (index, vehicle) in city.0.fleet.vehicles.iter().enumerate() {
        let ((width, height, length), (r, g, b)) = vehicle_style(vehicle.model);
        let half_height = height / 2.0;

        // Blend mode so the edge fade can drive per-vehicle alpha
        let material = materials.add(StandardMaterial {
            base_color: Color::srgba(r, g, b, vehicle.opacity),
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        commands.spawn((
            VehicleLink(index),
            VehicleVisual {
                color: (r, g, b),
                half_height,
            },
            Mesh3d(meshes.add(Cuboid::new(width, height, length))),
            MeshMaterial3d(material),
            Transform::from_translation(Vec3::new(
                vehicle.position.x,
                vehicle.position.y + half_height,
                vehicle.position.z,
            ))
            .with_rotation(Quat::from_rotation_y(vehicle.heading)),
        ));
    }
}

/// Body dimensions and base color per vehicle model
fn vehicle_style(model: VehicleModel) -> ((f32, f32, f32), (f32, f32, f32)) {
    match model {
        VehicleModel::Sedan => ((1.0, 0.5, 2.0), (0.8, 0.2, 0.2)),
        VehicleModel::Suv => ((1.1, 0.7, 2.2), (0.2, 0.5, 0.3)),
        VehicleModel::Hatchback => ((1.0, 0.55, 1.8), (0.2, 0.4, 0.8)),
        VehicleModel::SportsSedan => ((1.0, 0.45, 2.0), (0.9, 0.45, 0.1)),
        VehicleModel::Taxi => ((1.0, 0.5, 2.0), (0.9, 0.8, 0.1)),
        VehicleModel::Van => ((1.2, 0.9, 2.4), (0.85, 0.85, 0.85)),
        VehicleModel::Truck => ((1.3, 1.0, 2.8), (0.4, 0.45, 0.55)),
        VehicleModel::Police => ((1.0, 0.5, 2.0), (0.1, 0.2, 0.6)),
    }
}
