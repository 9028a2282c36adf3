//! Core types for the city simulation
//!
//! These are standalone types that don't depend on Bevy.

/// Base cruising speed in world units per rendered frame.
///
/// The whole speed law is frame-tied rather than wall-clock-tied: smoothing
/// and movement happen once per tick with no delta time.
pub const BASE_SPEED: f32 = 0.05;

/// Distance at which a vehicle starts reacting to a blocker ahead
pub const DETECTION_DISTANCE: f32 = 8.0;

/// Distance below which a vehicle brakes to a full stop
pub const STOPPING_DISTANCE: f32 = 2.5;

/// Fraction of full speed a trailing vehicle tops out at while braking
pub const FOLLOWING_SPEED_FACTOR: f32 = 0.8;

/// Per-frame exponential approach factor for speed and camera rotation
pub const SPEED_SMOOTHING: f32 = 0.1;

/// Distance from a ground edge over which vehicles fade out
pub const FADE_DISTANCE: f32 = 10.0;

/// A 3D position in the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn distance(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

/// Axis-aligned travel direction; fixed for a vehicle's whole lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// +X
    East,
    /// -X
    West,
    /// +Z
    North,
    /// -Z
    South,
}

impl Direction {
    /// Unit vector components on the ground plane
    pub fn unit(&self) -> (f32, f32) {
        match self {
            Direction::East => (1.0, 0.0),
            Direction::West => (-1.0, 0.0),
            Direction::North => (0.0, 1.0),
            Direction::South => (0.0, -1.0),
        }
    }

    /// Y-axis rotation that faces this direction
    pub fn heading(&self) -> f32 {
        let (dx, dz) = self.unit();
        dx.atan2(dz)
    }
}

/// Identifies one of the (up to 8) directed lanes vehicles travel in.
///
/// Lanes 0-3 belong to the city district, 4-7 to the suburb. A lane's travel
/// direction only depends on its class mod 4; collision relevance requires
/// exact lane equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LaneId(pub u8);

impl LaneId {
    pub fn direction(&self) -> Direction {
        match self.0 % 4 {
            0 => Direction::East,
            1 => Direction::West,
            2 => Direction::North,
            _ => Direction::South,
        }
    }
}

/// The vehicle body styles cycled through at fleet creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleModel {
    Sedan,
    Suv,
    Hatchback,
    SportsSedan,
    Taxi,
    Van,
    Truck,
    Police,
}

/// Spawn order for district fleets
pub const VEHICLE_MODELS: [VehicleModel; 8] = [
    VehicleModel::Sedan,
    VehicleModel::Suv,
    VehicleModel::Hatchback,
    VehicleModel::SportsSedan,
    VehicleModel::Taxi,
    VehicleModel::Van,
    VehicleModel::Truck,
    VehicleModel::Police,
];

/// World-space limits past which a vehicle teleports to the opposite edge.
///
/// X is asymmetric: the positive side extends across the suburb district.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapBounds {
    pub x_min: f32,
    pub x_max: f32,
    pub z_min: f32,
    pub z_max: f32,
}

/// Ground rectangle whose edges drive the fade-out/fade-in effect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeRect {
    pub x_min: f32,
    pub x_max: f32,
    pub z_min: f32,
    pub z_max: f32,
}

impl FadeRect {
    /// Smallest axis-aligned distance from `pos` to any of the four edges.
    /// Negative outside the rectangle.
    pub fn min_edge_distance(&self, pos: &Position) -> f32 {
        let dx_min = pos.x - self.x_min;
        let dx_max = self.x_max - pos.x;
        let dz_min = pos.z - self.z_min;
        let dz_max = self.z_max - pos.z;
        dx_min.min(dx_max).min(dz_min).min(dz_max)
    }
}
