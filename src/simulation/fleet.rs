//! The vehicle fleet: ownership, spawning, and the per-frame update pass

use log::debug;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::layout::CityLayout;
use super::types::{FadeRect, LaneId, WrapBounds, VEHICLE_MODELS};
use super::vehicle::{braking_target_speed, Vehicle};

/// An ordered collection of vehicles plus the camera-followed index.
///
/// Vehicles may be appended at any frame (visual assets load late in the
/// original scene); the update pass simply operates over whatever is present.
pub struct Fleet {
    pub vehicles: Vec<Vehicle>,
    active: Option<usize>,
    wrap_bounds: WrapBounds,
    fade_rect: FadeRect,
    /// Optional seeded RNG for reproducible runs
    rng: Option<StdRng>,
}

impl Fleet {
    pub fn new(layout: &CityLayout) -> Self {
        Self::new_internal(layout, None)
    }

    /// Create a fleet with a seeded RNG so active-vehicle selection is
    /// reproducible
    pub fn new_with_seed(layout: &CityLayout, seed: u64) -> Self {
        Self::new_internal(layout, Some(StdRng::seed_from_u64(seed)))
    }

    fn new_internal(layout: &CityLayout, rng: Option<StdRng>) -> Self {
        Self {
            vehicles: Vec::new(),
            active: None,
            wrap_bounds: layout.wrap_bounds(),
            fade_rect: layout.fade_rect(),
            rng,
        }
    }

    fn random_index(&mut self, len: usize) -> usize {
        match &mut self.rng {
            Some(rng) => rng.random_range(0..len),
            None => rand::rng().random_range(0..len),
        }
    }

    /// Append one vehicle at the deterministic start pose for `slot % 4`.
    ///
    /// `lane_offset` shifts the lane id into the suburb's 4-7 range without
    /// changing the travel direction. Always succeeds.
    pub fn create_vehicle(&mut self, layout: &CityLayout, slot: u8, district_offset: f32, lane_offset: u8) {
        let lane = LaneId(slot % 4 + lane_offset);
        let (position, _) = layout.lane_start(slot, district_offset);
        let model = VEHICLE_MODELS[self.vehicles.len() % VEHICLE_MODELS.len()];
        self.vehicles.push(Vehicle::new(model, position, lane));
    }

    /// Spawn a district's worth of vehicles, cycling lane slots and models
    pub fn spawn_district(&mut self, layout: &CityLayout, count: usize, district_offset: f32, lane_offset: u8) {
        for i in 0..count {
            self.create_vehicle(layout, (i % 4) as u8, district_offset, lane_offset);
        }
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_vehicle(&self) -> Option<&Vehicle> {
        self.active.and_then(|i| self.vehicles.get(i))
    }

    /// Target speed the collision-avoidance scan yields for one vehicle,
    /// evaluated against current positions.
    ///
    /// Only same-lane vehicles strictly ahead along the travel axis matter;
    /// the nearest by Euclidean distance wins (any minimal candidate on a
    /// tie — the distance alone decides the outcome).
    pub fn target_speed(&self, index: usize) -> f32 {
        let vehicle = &self.vehicles[index];
        let nearest_ahead = self
            .vehicles
            .iter()
            .enumerate()
            .filter(|(i, other)| {
                *i != index && other.lane == vehicle.lane && vehicle.is_ahead(other)
            })
            .map(|(_, other)| OrderedFloat(vehicle.position.distance(&other.position)))
            .min()
            .map(OrderedFloat::into_inner);
        braking_target_speed(nearest_ahead)
    }

    /// Advance every vehicle by one frame.
    ///
    /// Target speeds are all computed from frame-start positions before any
    /// vehicle moves, so the outcome never depends on iteration order. Returns
    /// the indices of vehicles that crossed a wrap boundary this frame.
    pub fn update(&mut self) -> Vec<usize> {
        let targets: Vec<f32> = (0..self.vehicles.len())
            .map(|i| self.target_speed(i))
            .collect();

        let mut wrapped = Vec::new();
        for (i, (vehicle, target)) in self.vehicles.iter_mut().zip(targets).enumerate() {
            vehicle.integrate(target);
            vehicle.apply_edge_fade(&self.fade_rect);
            if vehicle.wrap_around(&self.wrap_bounds) {
                wrapped.push(i);
            }
        }
        wrapped
    }

    /// Pick the vehicle the camera follows.
    ///
    /// Empty fleet clears the selection; with two or more vehicles the new
    /// index is drawn uniformly from the indices different from the current
    /// one, so a reselection is always a visible change.
    pub fn select_active(&mut self) {
        let len = self.vehicles.len();
        self.active = match len {
            0 => None,
            1 => Some(0),
            _ => {
                let mut index = self.random_index(len);
                while Some(index) == self.active {
                    index = self.random_index(len);
                }
                Some(index)
            }
        };
        debug!("active vehicle is now {:?}", self.active);
    }
}
