//! Grid layout geometry
//!
//! Pure functions mapping block indices and lane slots to world coordinates.
//! Everything downstream (static scene, fleet spawns, wrap/fade bounds)
//! derives from one `CityLayout` value, so a single `--grid-size` knob scales
//! the whole scene consistently.

use anyhow::{ensure, Result};

use super::types::{Direction, FadeRect, Position, WrapBounds};

/// Spacing between road center lines
pub const PLOT_SPACING: f32 = 15.0;

/// Width of a road (two lanes)
pub const ROAD_WIDTH: f32 = 4.0;

/// Height of the road surface above the ground plane
pub const ROAD_HEIGHT: f32 = 0.1;

/// How far past the ground edge a vehicle travels before wrapping
const WRAP_MARGIN: f32 = 5.0;

/// Grid geometry for the two-district city
#[derive(Debug, Clone, Copy)]
pub struct CityLayout {
    pub grid_size: f32,
}

impl Default for CityLayout {
    fn default() -> Self {
        Self { grid_size: 100.0 }
    }
}

impl CityLayout {
    pub fn new(grid_size: f32) -> Result<Self> {
        ensure!(
            grid_size.is_finite() && grid_size >= 2.0 * PLOT_SPACING,
            "grid size {} too small: need at least {} for one road block",
            grid_size,
            2.0 * PLOT_SPACING
        );
        Ok(Self { grid_size })
    }

    /// Number of blocks on each side of a district's center road
    pub fn blocks_per_side(&self) -> i32 {
        (self.grid_size / PLOT_SPACING / 2.0).floor() as i32
    }

    /// Half-extent of one district's ground
    pub fn half_extent(&self) -> f32 {
        self.grid_size / 2.0
    }

    /// X offset of the suburb district's center from the city's
    pub fn suburb_offset(&self) -> f32 {
        self.grid_size * 0.9
    }

    /// Offset of a lane center from its road's center line
    pub fn lane_center(&self) -> f32 {
        ROAD_WIDTH / 4.0
    }

    /// Ride height of vehicles above the ground plane
    pub fn vehicle_height(&self) -> f32 {
        ROAD_HEIGHT + 0.05
    }

    /// World position of the road crossing at block indices (i, j)
    pub fn road_cross(&self, i: i32, j: i32, district_offset: f32) -> Position {
        Position::new(
            i as f32 * PLOT_SPACING + district_offset,
            ROAD_HEIGHT,
            j as f32 * PLOT_SPACING,
        )
    }

    /// Center of the building plot in the (+i, +j) quadrant block (i, j >= 1)
    pub fn plot_center(&self, i: i32, j: i32) -> (f32, f32) {
        (
            i as f32 * PLOT_SPACING - PLOT_SPACING / 2.0,
            j as f32 * PLOT_SPACING - PLOT_SPACING / 2.0,
        )
    }

    /// Deterministic start pose for a lane slot (0-3) in a district.
    ///
    /// Slots 0/1 run east/west along the Z-road one block north of center,
    /// slots 2/3 run north/south along the X-road one block east of center,
    /// each offset onto its own side of the road.
    pub fn lane_start(&self, slot: u8, district_offset: f32) -> (Position, Direction) {
        let road = PLOT_SPACING;
        let lane = self.lane_center();
        let half = self.half_extent();
        let y = self.vehicle_height();

        match slot % 4 {
            0 => (
                Position::new(district_offset - half, y, road + lane),
                Direction::East,
            ),
            1 => (
                Position::new(district_offset + half, y, road - lane),
                Direction::West,
            ),
            2 => (
                Position::new(road + lane + district_offset, y, -half),
                Direction::North,
            ),
            _ => (
                Position::new(road - lane + district_offset, y, half),
                Direction::South,
            ),
        }
    }

    /// Teleport limits for the looping traffic.
    ///
    /// The positive X side stretches across the suburb so vehicles cross
    /// between districts before wrapping.
    pub fn wrap_bounds(&self) -> WrapBounds {
        let half = self.half_extent();
        WrapBounds {
            x_min: -(half + WRAP_MARGIN),
            x_max: self.suburb_offset() + half,
            z_min: -(half + WRAP_MARGIN),
            z_max: half + WRAP_MARGIN,
        }
    }

    /// Ground edges driving the vehicle fade effect
    pub fn fade_rect(&self) -> FadeRect {
        let half = self.half_extent();
        FadeRect {
            x_min: -half,
            x_max: self.suburb_offset() + half - WRAP_MARGIN,
            z_min: -half,
            z_max: half,
        }
    }
}
