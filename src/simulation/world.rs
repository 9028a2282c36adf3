//! Main simulation world that ties everything together
//!
//! This is the entry point for running the city scene without any Bevy
//! dependencies: one `tick()` per rendered frame drives the fleet first, then
//! the follow camera, in that order.

use anyhow::{Context, Result};
use log::{debug, info};

use super::camera::{CameraMode, CameraPose, FollowCamera};
use super::fleet::Fleet;
use super::layout::{CityLayout, PLOT_SPACING};
use super::scene::{self, PropKind, StaticProp};
use super::types::Direction;

/// District lane ids 4-7 belong to the suburb
const SUBURB_LANE_OFFSET: u8 = 4;

/// World construction parameters
#[derive(Debug, Clone)]
pub struct CityConfig {
    pub grid_size: f32,
    pub city_vehicles: usize,
    pub suburb_vehicles: usize,
    /// Seed for reproducible building placement and vehicle selection
    pub seed: Option<u64>,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            grid_size: 100.0,
            city_vehicles: 8,
            suburb_vehicles: 4,
            seed: None,
        }
    }
}

/// The whole scene: static props, the fleet, and the follow camera
pub struct CityWorld {
    pub layout: CityLayout,
    pub props: Vec<StaticProp>,
    pub fleet: Fleet,
    pub camera: FollowCamera,
    /// Frames ticked so far
    pub frame: u64,
    /// Chase pose computed by the latest tick; None outside follow mode
    pub last_camera_pose: Option<CameraPose>,
}

impl CityWorld {
    /// Build the city: layout, static blueprint, and both district fleets
    pub fn create_city(config: &CityConfig) -> Result<Self> {
        let layout = CityLayout::new(config.grid_size).context("invalid city layout")?;
        let props = scene::generate(&layout, config.seed);

        let mut fleet = match config.seed {
            Some(seed) => Fleet::new_with_seed(&layout, seed),
            None => Fleet::new(&layout),
        };
        fleet.spawn_district(&layout, config.city_vehicles, 0.0, 0);
        fleet.spawn_district(
            &layout,
            config.suburb_vehicles,
            layout.suburb_offset(),
            SUBURB_LANE_OFFSET,
        );
        fleet.select_active();

        info!(
            "created city: {} static props, {} vehicles",
            props.len(),
            fleet.len()
        );

        Ok(Self {
            layout,
            props,
            fleet,
            camera: FollowCamera::new(),
            frame: 0,
            last_camera_pose: None,
        })
    }

    /// One frame: fleet update, then followed-vehicle bookkeeping, then the
    /// camera. The cached pose is what the renderer applies afterwards.
    pub fn tick(&mut self) {
        self.frame += 1;

        let wrapped = self.fleet.update();

        // A wrap teleports the vehicle across the world; keep the camera on
        // something watchable by switching to a different one. Only relevant
        // while actually following.
        if self.camera.mode() == CameraMode::Follow {
            if let Some(active) = self.fleet.active_index() {
                if wrapped.contains(&active) {
                    debug!("followed vehicle {} wrapped, reselecting", active);
                    self.fleet.select_active();
                }
            }
        }

        self.last_camera_pose = self.camera.update(&self.fleet);
    }

    /// Flip between overhead and follow view; returns the new mode
    pub fn toggle_view(&mut self) -> CameraMode {
        self.camera.toggle(&mut self.fleet);
        self.camera.mode()
    }

    /// Explicitly hand the camera to a different vehicle
    pub fn switch_vehicle(&mut self) {
        self.fleet.select_active();
    }

    /// Print a summary of the world state
    pub fn print_summary(&self) {
        println!("=== City Scene Summary ===");
        println!("Frame: {}", self.frame);
        println!("{}", self.camera.mode_label());
        println!(
            "Vehicles: {} (active: {})",
            self.fleet.len(),
            match self.fleet.active_index() {
                Some(i) => i.to_string(),
                None => "none".to_string(),
            }
        );

        for (i, vehicle) in self.fleet.vehicles.iter().enumerate() {
            println!(
                "  Vehicle {}: {:?} lane={} pos=({:.1}, {:.1}) speed={:.3} opacity={:.2}",
                i,
                vehicle.model,
                vehicle.lane.0,
                vehicle.position.x,
                vehicle.position.z,
                vehicle.current_speed,
                vehicle.opacity
            );
        }
    }

    /// Draw a visual map of the world in the terminal
    pub fn draw_map(&self) {
        let bounds = self.layout.wrap_bounds();
        let scale = 0.5; // characters per world unit

        let width = ((bounds.x_max - bounds.x_min) * scale) as usize + 1;
        let height = ((bounds.z_max - bounds.z_min) * scale) as usize + 1;

        let mut grid = vec![vec![' '; width]; height];

        let to_cell = |x: f32, z: f32| -> (usize, usize) {
            let col = ((x - bounds.x_min) * scale) as usize;
            let row = ((bounds.z_max - z) * scale) as usize;
            (row.min(height - 1), col.min(width - 1))
        };

        // Roads first, then buildings, then vehicles on top
        for prop in &self.props {
            if let PropKind::RoadSegment { horizontal } = prop.kind {
                let half = PLOT_SPACING / 2.0;
                let steps = (PLOT_SPACING * scale) as i32 + 1;
                for s in 0..steps {
                    let t = -half + s as f32 / scale;
                    let (row, col) = if horizontal {
                        to_cell(prop.position.x + t, prop.position.z)
                    } else {
                        to_cell(prop.position.x, prop.position.z + t)
                    };
                    if grid[row][col] == ' ' {
                        grid[row][col] = if horizontal { '-' } else { '|' };
                    }
                }
            }
        }

        for prop in &self.props {
            let (row, col) = to_cell(prop.position.x, prop.position.z);
            match prop.kind {
                PropKind::Intersection => grid[row][col] = '+',
                PropKind::Building(_) => grid[row][col] = '#',
                _ => {}
            }
        }

        for (i, vehicle) in self.fleet.vehicles.iter().enumerate() {
            let (row, col) = to_cell(vehicle.position.x, vehicle.position.z);
            grid[row][col] = if Some(i) == self.fleet.active_index() {
                '@'
            } else {
                match vehicle.direction {
                    Direction::East => '>',
                    Direction::West => '<',
                    Direction::North => '^',
                    Direction::South => 'v',
                }
            };
        }

        println!("\n=== City Map ===");
        println!("Legend: #=Building, +=Intersection, @=Followed vehicle, ><^v=Vehicles");
        println!();
        for row in &grid {
            let line: String = row.iter().collect();
            println!("{}", line);
        }
        println!();
    }
}
