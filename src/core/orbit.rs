use super::constants::*;
use glam::Vec2;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Tunables for the orbital navigation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParams {
    pub radius: f32,
    pub wobble_amplitude: f32,
    pub wobble_frequency: f32,
    pub speed_base: f32,
    pub speed_step: f32,
    pub speed_cycle: usize,
    pub attraction_threshold: f32,
    pub attraction_strength: f32,
    pub attraction_smoothing: f32,
    pub scale_gain: f32,
    pub item_half_extent: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            radius: ORBIT_RADIUS,
            wobble_amplitude: WOBBLE_AMPLITUDE,
            wobble_frequency: WOBBLE_FREQUENCY,
            speed_base: SPEED_BASE,
            speed_step: SPEED_STEP,
            speed_cycle: SPEED_CYCLE,
            attraction_threshold: ATTRACTION_THRESHOLD,
            attraction_strength: ATTRACTION_STRENGTH,
            attraction_smoothing: ATTRACTION_SMOOTHING,
            scale_gain: ATTRACTION_SCALE_GAIN,
            item_half_extent: ITEM_HALF_EXTENT,
        }
    }
}

/// Bounding box of the navigation container in viewport space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerGeometry {
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub top: f32,
}

impl ContainerGeometry {
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }
}

/// Last known pointer position in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    #[inline]
    pub fn local_to(&self, geometry: &ContainerGeometry) -> Vec2 {
        Vec2::new(self.x, self.y) - geometry.origin()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemPose {
    /// Final item center in container-local space.
    pub center: Vec2,
    pub scale: f32,
    pub attracted: bool,
}

impl ItemPose {
    /// Top-left translation for an item box of the given half extent.
    #[inline]
    pub fn offset(&self, half_extent: f32) -> Vec2 {
        self.center - Vec2::splat(half_extent)
    }
}

pub type OrbitFrame = SmallVec<[ItemPose; 8]>;

#[inline]
pub fn base_angle(index: usize, count: usize) -> f32 {
    (index as f32 / count as f32) * TAU
}

#[inline]
pub fn item_speed(index: usize, params: &OrbitParams) -> f32 {
    let cycle = params.speed_cycle.max(1);
    params.speed_base + (index % cycle) as f32 * params.speed_step
}

#[inline]
pub fn wobble(elapsed_sec: f32, params: &OrbitParams) -> f32 {
    (elapsed_sec * params.wobble_frequency).sin() * params.wobble_amplitude
}

/// Position on the (wobbling) circle before pointer attraction.
pub fn orbit_point(
    index: usize,
    count: usize,
    elapsed_sec: f32,
    geometry: &ContainerGeometry,
    params: &OrbitParams,
) -> Vec2 {
    let radius = params.radius + wobble(elapsed_sec, params);
    let angle = base_angle(index, count) + elapsed_sec * item_speed(index, params);
    geometry.center() + Vec2::new(angle.cos(), angle.sin()) * radius
}

#[inline]
pub fn attraction_force(distance: f32, params: &OrbitParams) -> f32 {
    params.attraction_strength / (distance + params.attraction_smoothing)
}

/// Apply pointer magnetism to a raw orbit point.
pub fn attract(point: Vec2, pointer_local: Vec2, params: &OrbitParams) -> ItemPose {
    let from_pointer = point - pointer_local;
    let distance = from_pointer.length();
    if distance < params.attraction_threshold {
        let force = attraction_force(distance, params);
        ItemPose {
            center: point - from_pointer * force,
            scale: 1.0 + params.scale_gain * force,
            attracted: true,
        }
    } else {
        ItemPose {
            center: point,
            scale: 1.0,
            attracted: false,
        }
    }
}

pub fn item_pose(
    index: usize,
    count: usize,
    elapsed_sec: f32,
    geometry: &ContainerGeometry,
    pointer: PointerState,
    params: &OrbitParams,
) -> ItemPose {
    let point = orbit_point(index, count, elapsed_sec, geometry, params);
    attract(point, pointer.local_to(geometry), params)
}

/// Poses for every item this frame.
///
/// Returns `None` while the container has no measurable size so callers leave
/// the previous transforms in place instead of writing NaN.
pub fn compute_frame(
    count: usize,
    elapsed_sec: f32,
    geometry: &ContainerGeometry,
    pointer: PointerState,
    params: &OrbitParams,
) -> Option<OrbitFrame> {
    if !geometry.is_measured() {
        return None;
    }
    Some(
        (0..count)
            .map(|i| item_pose(i, count, elapsed_sec, geometry, pointer, params))
            .collect(),
    )
}
