pub mod config;
pub mod constants;
pub mod error;
pub mod hero;
pub mod layout;
pub mod lifecycle;
pub mod orbit;
pub mod player;
pub mod spectrum;

pub use config::NavSettings;
pub use layout::{compact_badge, LayoutMode};
pub use lifecycle::{AnimationGate, Subscription};
pub use orbit::{compute_frame, ContainerGeometry, PointerState};

// Shaders bundled as string constants
pub static HERO_WGSL: &str = include_str!("../../shaders/hero.wgsl");
