//! Standalone city scene simulation
//!
//! This module contains the procedural city layout, the vehicle fleet with
//! its collision-avoidance update loop, and the follow-camera controller.
//! Everything runs independently of the Bevy game engine and can be ticked
//! headlessly for testing.

mod camera;
mod fleet;
mod layout;
mod scene;
mod types;
mod vehicle;
mod world;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use camera::{CameraMode, CameraPose, FollowCamera};
#[allow(unused_imports)]
pub use fleet::Fleet;
#[allow(unused_imports)]
pub use layout::{CityLayout, PLOT_SPACING, ROAD_HEIGHT, ROAD_WIDTH};
#[allow(unused_imports)]
pub use scene::{BuildingStyle, PropKind, StaticProp};
#[allow(unused_imports)]
pub use types::{
    Direction, FadeRect, LaneId, Position, VehicleModel, WrapBounds, BASE_SPEED,
    DETECTION_DISTANCE, FADE_DISTANCE, FOLLOWING_SPEED_FACTOR, SPEED_SMOOTHING, STOPPING_DISTANCE,
    VEHICLE_MODELS,
};
#[allow(unused_imports)]
pub use vehicle::{braking_target_speed, Vehicle};
pub use world::{CityConfig, CityWorld};
