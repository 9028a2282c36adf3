//! Camera follow controller
//!
//! Owns the overhead/follow state machine and the drag-derived look offsets.
//! The renderer only ever consumes the `CameraPose` this produces; no scene
//! graph types leak in here.

use std::f32::consts::FRAC_PI_4;

use super::fleet::Fleet;
use super::layout::ROAD_HEIGHT;
use super::types::{Position, SPEED_SMOOTHING};

/// Screen-pixels-to-radians factor for drag input
const DRAG_SENSITIVITY: f32 = 0.005;

/// Vertical look rotation is clamped to +/- 45 degrees
const PITCH_LIMIT: f32 = FRAC_PI_4;

/// How far behind the followed vehicle the camera sits
const FOLLOW_BACK_DISTANCE: f32 = 5.0;

/// Camera height above the ground in follow mode
const FOLLOW_HEIGHT: f32 = ROAD_HEIGHT + 2.0;

/// How far ahead of the vehicle the base look-at point sits
const LOOK_AHEAD_DISTANCE: f32 = 10.0;

/// Horizontal swing of the look-at point at full yaw
const YAW_SWING: f32 = 5.0;

/// Vertical swing of the look-at point at full pitch
const PITCH_SWING: f32 = 3.0;

/// The two camera states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    #[default]
    Overhead,
    Follow,
}

/// Where the camera should sit and what it should look at this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Position,
    pub look_at: Position,
}

/// Accumulated drag rotation plus the overhead/follow mode flag.
///
/// Each rotation axis is split into a target (set instantly by input) and a
/// current value smoothed toward it every frame, the same exponential
/// approach the vehicle speeds use.
#[derive(Debug, Default)]
pub struct FollowCamera {
    mode: CameraMode,
    drag_anchor: Option<(f32, f32)>,
    pub target_yaw: f32,
    pub target_pitch: f32,
    pub current_yaw: f32,
    pub current_pitch: f32,
}

impl FollowCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Human-readable mode label for the HUD
    pub fn mode_label(&self) -> &'static str {
        match self.mode {
            CameraMode::Overhead => "View: Overhead",
            CameraMode::Follow => "View: Car Cam",
        }
    }

    /// Label for the view-toggle button
    pub fn toggle_label(&self) -> &'static str {
        match self.mode {
            CameraMode::Overhead => "Switch to Car Cam",
            CameraMode::Follow => "Switch to Overhead",
        }
    }

    /// Flip between overhead and follow mode.
    ///
    /// Entering follow mode selects a vehicle if none is active. Leaving it
    /// zeroes all accumulated rotation and cancels any drag in progress; the
    /// caller restores the overhead pose.
    pub fn toggle(&mut self, fleet: &mut Fleet) {
        match self.mode {
            CameraMode::Overhead => {
                self.mode = CameraMode::Follow;
                if fleet.active_index().is_none() {
                    fleet.select_active();
                }
            }
            CameraMode::Follow => {
                self.mode = CameraMode::Overhead;
                self.drag_anchor = None;
                self.target_yaw = 0.0;
                self.target_pitch = 0.0;
                self.current_yaw = 0.0;
                self.current_pitch = 0.0;
            }
        }
    }

    /// Begin a drag at the given screen coordinates (follow mode only)
    pub fn press(&mut self, x: f32, y: f32) {
        if self.mode == CameraMode::Follow {
            self.drag_anchor = Some((x, y));
        }
    }

    /// Accumulate rotation from pointer movement while pressed
    pub fn drag_to(&mut self, x: f32, y: f32) {
        if self.mode != CameraMode::Follow {
            return;
        }
        let Some((anchor_x, anchor_y)) = self.drag_anchor else {
            return;
        };
        self.target_yaw += (x - anchor_x) * DRAG_SENSITIVITY;
        self.target_pitch += (y - anchor_y) * DRAG_SENSITIVITY;
        self.target_pitch = self.target_pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.drag_anchor = Some((x, y));
    }

    /// End the drag; targets snap back to zero so the view settles to center
    pub fn release(&mut self) {
        if self.mode != CameraMode::Follow {
            return;
        }
        self.drag_anchor = None;
        self.target_yaw = 0.0;
        self.target_pitch = 0.0;
    }

    /// Per-frame follow update.
    ///
    /// Smooths the drag rotation, then derives the chase pose from the active
    /// vehicle: camera behind it along its travel axis, look-at ahead of it
    /// displaced by the drag offsets. Returns None outside follow mode or
    /// when no vehicle is active.
    pub fn update(&mut self, fleet: &Fleet) -> Option<CameraPose> {
        if self.mode != CameraMode::Follow {
            return None;
        }
        let vehicle = fleet.active_vehicle()?;

        self.current_yaw += (self.target_yaw - self.current_yaw) * SPEED_SMOOTHING;
        self.current_pitch += (self.target_pitch - self.current_pitch) * SPEED_SMOOTHING;

        let (dx, dz) = vehicle.direction.unit();

        let position = Position::new(
            vehicle.position.x - dx * FOLLOW_BACK_DISTANCE,
            FOLLOW_HEIGHT,
            vehicle.position.z - dz * FOLLOW_BACK_DISTANCE,
        );

        let look_at = Position::new(
            vehicle.position.x + dx * LOOK_AHEAD_DISTANCE + self.current_yaw.sin() * YAW_SWING,
            vehicle.position.y + self.current_pitch.sin() * PITCH_SWING,
            vehicle.position.z + dz * LOOK_AHEAD_DISTANCE,
        );

        Some(CameraPose { position, look_at })
    }

    /// Fixed default pose used whenever follow mode is exited
    pub fn overhead_pose(grid_size: f32) -> CameraPose {
        let d = grid_size * 0.8;
        CameraPose {
            position: Position::new(d, d, d),
            look_at: Position::new(0.0, 0.0, 0.0),
        }
    }
}
