//! Static scene blueprint
//!
//! One-shot procedural placement of ground, roads, and buildings for the two
//! districts. The output is plain data; the UI layer (or the ASCII map) turns
//! it into visuals. Nothing here runs per frame.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand::SeedableRng;

use super::layout::{CityLayout, PLOT_SPACING, ROAD_HEIGHT};
use super::types::Position;

/// Building flavors; the city mixes the first three, the suburb uses cottages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingStyle {
    Block,
    Tower,
    Skyscraper,
    Cottage,
}

const CITY_STYLES: [BuildingStyle; 3] = [
    BuildingStyle::Block,
    BuildingStyle::Tower,
    BuildingStyle::Skyscraper,
];

/// Chance that a block plot actually carries a building
const BUILDING_OCCUPANCY: f64 = 0.9;

/// What a static prop is
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropKind {
    /// The shared ground slab under both districts
    GroundSlab { width: f32, depth: f32 },
    /// Per-block ground tile (suburb district)
    GroundTile,
    /// Road crossing at a grid point
    Intersection,
    /// Straight road piece between two crossings
    RoadSegment { horizontal: bool },
    Building(BuildingStyle),
}

/// One placed prop in the scene graph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticProp {
    pub kind: PropKind,
    pub position: Position,
    pub rotation_y: f32,
    pub scale: f32,
}

/// Generate the full blueprint, optionally from a fixed seed
pub fn generate(layout: &CityLayout, seed: Option<u64>) -> Vec<StaticProp> {
    match seed {
        Some(seed) => generate_with_rng(layout, &mut StdRng::seed_from_u64(seed)),
        None => generate_with_rng(layout, &mut rand::rng()),
    }
}

fn generate_with_rng<R: Rng>(layout: &CityLayout, rng: &mut R) -> Vec<StaticProp> {
    let mut props = Vec::new();
    let suburb = layout.suburb_offset();

    // One slab spans both districts so vehicles never cross bare void
    props.push(StaticProp {
        kind: PropKind::GroundSlab {
            width: suburb + layout.grid_size,
            depth: layout.grid_size,
        },
        position: Position::new(suburb / 2.0, -0.5, 0.0),
        rotation_y: 0.0,
        scale: 1.0,
    });

    place_roads(layout, 0.0, false, &mut props);
    place_roads(layout, suburb, true, &mut props);
    place_suburb_tiles(layout, suburb, &mut props);
    place_city_buildings(layout, rng, &mut props);
    place_suburb_buildings(layout, rng, &mut props);

    props
}

/// Crossings at every grid point plus straight segments between them
fn place_roads(layout: &CityLayout, offset: f32, rotated: bool, props: &mut Vec<StaticProp>) {
    let n = layout.blocks_per_side();
    let cross_rotation = if rotated {
        std::f32::consts::FRAC_PI_2
    } else {
        0.0
    };

    for i in -n..=n {
        for j in -n..=n {
            let cross = layout.road_cross(i, j, offset);

            props.push(StaticProp {
                kind: PropKind::Intersection,
                position: cross,
                rotation_y: cross_rotation,
                scale: 1.0,
            });

            if i < n {
                props.push(StaticProp {
                    kind: PropKind::RoadSegment { horizontal: true },
                    position: Position::new(cross.x + PLOT_SPACING / 2.0, ROAD_HEIGHT, cross.z),
                    rotation_y: if rotated { std::f32::consts::PI } else { 0.0 },
                    scale: 1.0,
                });
            }

            if j < n {
                props.push(StaticProp {
                    kind: PropKind::RoadSegment { horizontal: false },
                    position: Position::new(cross.x, ROAD_HEIGHT, cross.z + PLOT_SPACING / 2.0),
                    rotation_y: std::f32::consts::FRAC_PI_2,
                    scale: 1.0,
                });
            }
        }
    }
}

fn place_suburb_tiles(layout: &CityLayout, offset: f32, props: &mut Vec<StaticProp>) {
    let n = layout.blocks_per_side();
    for i in -n..=n {
        for j in -n..=n {
            props.push(StaticProp {
                kind: PropKind::GroundTile,
                position: Position::new(
                    i as f32 * PLOT_SPACING + offset,
                    -0.1,
                    j as f32 * PLOT_SPACING,
                ),
                rotation_y: 0.0,
                scale: 1.0,
            });
        }
    }
}

/// City buildings on every block quadrant around the center
fn place_city_buildings<R: Rng>(layout: &CityLayout, rng: &mut R, props: &mut Vec<StaticProp>) {
    let n = layout.blocks_per_side();
    for i in 1..=n {
        for j in 1..=n {
            let (px, pz) = layout.plot_center(i, j);
            for (x, z) in [(px, pz), (-px, pz), (-px, -pz), (px, -pz)] {
                place_building(rng, x, z, false, props);
            }
        }
    }
}

/// Suburb buildings, mirrored around the district's center line
fn place_suburb_buildings<R: Rng>(layout: &CityLayout, rng: &mut R, props: &mut Vec<StaticProp>) {
    let n = layout.blocks_per_side();
    let offset = layout.suburb_offset();
    for i in 1..=n {
        for j in 1..=n {
            let (px, pz) = layout.plot_center(i, j);
            for (x, z) in [
                (offset + px, pz),
                (offset - px, pz),
                (offset - px, -pz),
                (offset + px, -pz),
            ] {
                place_building(rng, x, z, true, props);
            }
        }
    }
}

fn place_building<R: Rng>(rng: &mut R, x: f32, z: f32, suburban: bool, props: &mut Vec<StaticProp>) {
    if rng.random_bool(BUILDING_OCCUPANCY) {
        let style = if suburban {
            BuildingStyle::Cottage
        } else {
            // Slice is non-empty, choose cannot fail
            *CITY_STYLES.choose(rng).unwrap_or(&BuildingStyle::Block)
        };
        props.push(StaticProp {
            kind: PropKind::Building(style),
            position: Position::new(x, -0.1, z),
            rotation_y: 0.0,
            scale: rng.random_range(0.8..1.3),
        });
    }
}
