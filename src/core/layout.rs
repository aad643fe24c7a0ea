use super::constants::{
    COMPACT_BREAKPOINT_PX, ENTRANCE_DAMPING, ENTRANCE_STAGGER_SEC, ENTRANCE_STIFFNESS,
};

/// How the navigation is presented for the current viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Items orbit the container center and react to the pointer.
    Orbital,
    /// Static list; no orbit, no pointer tracking.
    Compact,
}

impl LayoutMode {
    pub fn for_viewport(viewport_width: f32, breakpoint: f32) -> Self {
        if viewport_width < breakpoint {
            LayoutMode::Compact
        } else {
            LayoutMode::Orbital
        }
    }

    #[inline]
    pub fn tracks_pointer(self) -> bool {
        matches!(self, LayoutMode::Orbital)
    }
}

impl Default for LayoutMode {
    fn default() -> Self {
        LayoutMode::for_viewport(f32::INFINITY, COMPACT_BREAKPOINT_PX)
    }
}

/// Single-character badge shown for an item in compact mode.
pub fn compact_badge(label: &str) -> String {
    label.chars().next().map(String::from).unwrap_or_default()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceSpring {
    pub stiffness: f32,
    pub damping: f32,
    pub stagger_sec: f32,
}

impl Default for EntranceSpring {
    fn default() -> Self {
        Self {
            stiffness: ENTRANCE_STIFFNESS,
            damping: ENTRANCE_DAMPING,
            stagger_sec: ENTRANCE_STAGGER_SEC,
        }
    }
}

impl EntranceSpring {
    /// Unit-step response of a unit-mass spring released from 0 at
    /// `index * stagger_sec`. May overshoot 1 while underdamped.
    pub fn factor(&self, index: usize, elapsed_sec: f32) -> f32 {
        let t = elapsed_sec - index as f32 * self.stagger_sec;
        if t <= 0.0 || self.stiffness <= 0.0 {
            return 0.0;
        }
        let omega = self.stiffness.sqrt();
        let zeta = self.damping / (2.0 * omega);
        if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega * t).exp();
            1.0 - envelope * ((omega_d * t).cos() + (zeta * omega / omega_d) * (omega_d * t).sin())
        } else {
            // over-damped springs are treated as critical
            1.0 - (-omega * t).exp() * (1.0 + omega * t)
        }
    }

    #[inline]
    pub fn opacity(&self, index: usize, elapsed_sec: f32) -> f32 {
        self.factor(index, elapsed_sec).clamp(0.0, 1.0)
    }
}
