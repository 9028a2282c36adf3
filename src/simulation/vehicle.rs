//! Vehicle state and per-frame kinematics
//!
//! Standalone implementation that doesn't depend on Bevy. The fleet drives
//! these methods once per rendered frame; none of them are fallible since all
//! inputs are internally generated.

use super::types::{
    Direction, FadeRect, LaneId, Position, VehicleModel, WrapBounds, BASE_SPEED,
    DETECTION_DISTANCE, FADE_DISTANCE, FOLLOWING_SPEED_FACTOR, SPEED_SMOOTHING, STOPPING_DISTANCE,
};

/// One moving agent in the fleet.
///
/// `direction` and `lane` are fixed at creation and never diverge: the
/// direction is derived from the lane class, so same-lane vehicles always
/// share a travel axis. Vehicles are never destroyed, only teleported when
/// they cross a wrap boundary.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub model: VehicleModel,
    pub position: Position,
    pub direction: Direction,
    pub lane: LaneId,
    pub current_speed: f32,
    /// Y-axis rotation facing the travel direction
    pub heading: f32,
    /// Fade-out/fade-in alpha near the ground edges, in [0, 1]
    pub opacity: f32,
}

impl Vehicle {
    pub fn new(model: VehicleModel, position: Position, lane: LaneId) -> Self {
        let direction = lane.direction();
        Self {
            model,
            position,
            direction,
            lane,
            current_speed: BASE_SPEED,
            heading: direction.heading(),
            opacity: 1.0,
        }
    }

    /// Whether `other` is strictly ahead of us along our travel axis.
    ///
    /// Strict comparison: a vehicle at the identical coordinate is not ahead,
    /// so overlapping spawns run free instead of deadlocking.
    pub fn is_ahead(&self, other: &Vehicle) -> bool {
        match self.direction {
            Direction::East => other.position.x > self.position.x,
            Direction::West => other.position.x < self.position.x,
            Direction::North => other.position.z > self.position.z,
            Direction::South => other.position.z < self.position.z,
        }
    }

    /// Smooth `current_speed` toward `target` and advance along the travel
    /// direction. Frame-tied on purpose: no delta time anywhere.
    pub fn integrate(&mut self, target_speed: f32) {
        self.current_speed += (target_speed - self.current_speed) * SPEED_SMOOTHING;
        let (dx, dz) = self.direction.unit();
        self.position.x += dx * self.current_speed;
        self.position.z += dz * self.current_speed;
        self.heading = self.direction.heading();
    }

    /// Recompute opacity from the distance to the nearest ground edge
    pub fn apply_edge_fade(&mut self, ground: &FadeRect) {
        let min_dist = ground.min_edge_distance(&self.position);
        self.opacity = (min_dist / FADE_DISTANCE).clamp(0.0, 1.0);
    }

    /// Teleport to the opposite boundary if we crossed the one we travel
    /// toward. Only the travel axis moves; opacity drops to zero so the
    /// fade-in plays on reappearance. Returns true if a wrap happened.
    pub fn wrap_around(&mut self, bounds: &WrapBounds) -> bool {
        let wrapped = match self.direction {
            Direction::East if self.position.x > bounds.x_max => {
                self.position.x = bounds.x_min;
                true
            }
            Direction::West if self.position.x < bounds.x_min => {
                self.position.x = bounds.x_max;
                true
            }
            Direction::North if self.position.z > bounds.z_max => {
                self.position.z = bounds.z_min;
                true
            }
            Direction::South if self.position.z < bounds.z_min => {
                self.position.z = bounds.z_max;
                true
            }
            _ => false,
        };
        if wrapped {
            self.opacity = 0.0;
        }
        wrapped
    }
}

/// Target speed given the distance to the nearest same-lane vehicle ahead.
///
/// Past the detection range the road counts as clear; inside it the speed
/// ramps linearly down to a hard stop below the stopping distance. The 0.8
/// factor keeps a trailing vehicle perceptibly slower than a clear one even
/// right at the detection boundary.
pub fn braking_target_speed(distance_ahead: Option<f32>) -> f32 {
    match distance_ahead {
        Some(d) if d < STOPPING_DISTANCE => 0.0,
        Some(d) if d < DETECTION_DISTANCE => {
            let brake_factor =
                (d - STOPPING_DISTANCE) / (DETECTION_DISTANCE - STOPPING_DISTANCE);
            BASE_SPEED * brake_factor * FOLLOWING_SPEED_FACTOR
        }
        _ => BASE_SPEED,
    }
}
