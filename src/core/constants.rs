// Orbit, layout and spectrum tuning constants. These are the defaults behind
// `OrbitParams` and `NavSettings`; data-* attributes on the nav container can
// override the orbit values.

// Orbit geometry (CSS pixels)
pub const ORBIT_RADIUS: f32 = 120.0;
pub const ITEM_HALF_EXTENT: f32 = 30.0; // half the rendered item box

// Shared radius breathing
pub const WOBBLE_AMPLITUDE: f32 = 15.0;
pub const WOBBLE_FREQUENCY: f32 = 0.5; // radians per second

// Per-item angular speed: BASE + (index % CYCLE) * STEP (radians per second)
pub const SPEED_BASE: f32 = 0.3;
pub const SPEED_STEP: f32 = 0.2;
pub const SPEED_CYCLE: usize = 3;

// Pointer magnetism
pub const ATTRACTION_THRESHOLD: f32 = 150.0;
pub const ATTRACTION_STRENGTH: f32 = 30.0;
pub const ATTRACTION_SMOOTHING: f32 = 30.0; // keeps force finite at zero distance
pub const ATTRACTION_SCALE_GAIN: f32 = 0.2;

// Below this viewport width the nav renders as a static list
pub const COMPACT_BREAKPOINT_PX: f32 = 768.0;

// Entrance spring (unit mass)
pub const ENTRANCE_STIFFNESS: f32 = 300.0;
pub const ENTRANCE_DAMPING: f32 = 20.0;
pub const ENTRANCE_STAGGER_SEC: f32 = 0.1;

// Spectrum
pub const FFT_SIZE: u32 = 256;
pub const BAR_WIDTH_FACTOR: f32 = 2.5;
pub const BAR_GAP_PX: f32 = 1.0;
pub const BAR_HEIGHT_DIVISOR: f32 = 2.0;
pub const SPIN_LEVEL_DIVISOR: f32 = 50.0; // degrees per frame = average / divisor
