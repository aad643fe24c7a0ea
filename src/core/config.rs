use super::constants::COMPACT_BREAKPOINT_PX;
use super::error::SiteError;
use super::layout::EntranceSpring;
use super::orbit::OrbitParams;

// data-* attribute names read from the nav container
pub const ATTR_RADIUS: &str = "data-orbit-radius";
pub const ATTR_WOBBLE: &str = "data-wobble";
pub const ATTR_THRESHOLD: &str = "data-attraction-threshold";
pub const ATTR_STRENGTH: &str = "data-attraction-strength";
pub const ATTR_SCALE_GAIN: &str = "data-scale-gain";
pub const ATTR_ITEM_SIZE: &str = "data-item-size";
pub const ATTR_BREAKPOINT: &str = "data-breakpoint";

pub const SETTING_ATTRIBUTES: [&str; 7] = [
    ATTR_RADIUS,
    ATTR_WOBBLE,
    ATTR_THRESHOLD,
    ATTR_STRENGTH,
    ATTR_SCALE_GAIN,
    ATTR_ITEM_SIZE,
    ATTR_BREAKPOINT,
];

/// Everything the orbital navigation needs besides its items.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavSettings {
    pub orbit: OrbitParams,
    pub breakpoint: f32,
    pub entrance: EntranceSpring,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            orbit: OrbitParams::default(),
            breakpoint: COMPACT_BREAKPOINT_PX,
            entrance: EntranceSpring::default(),
        }
    }
}

impl NavSettings {
    /// Defaults overridden by whatever `lookup` returns for the known
    /// attribute names. Absent or blank values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SiteError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        let orbit = &mut settings.orbit;
        if let Some(v) = read_setting(&lookup, ATTR_RADIUS)? {
            orbit.radius = v;
        }
        if let Some(v) = read_setting(&lookup, ATTR_WOBBLE)? {
            orbit.wobble_amplitude = v;
        }
        if let Some(v) = read_setting(&lookup, ATTR_THRESHOLD)? {
            orbit.attraction_threshold = v;
        }
        if let Some(v) = read_setting(&lookup, ATTR_STRENGTH)? {
            orbit.attraction_strength = v;
        }
        if let Some(v) = read_setting(&lookup, ATTR_SCALE_GAIN)? {
            orbit.scale_gain = v;
        }
        if let Some(v) = read_setting(&lookup, ATTR_ITEM_SIZE)? {
            orbit.item_half_extent = v * 0.5;
        }
        if let Some(v) = read_setting(&lookup, ATTR_BREAKPOINT)? {
            settings.breakpoint = v;
        }
        Ok(settings)
    }
}

fn read_setting<F>(lookup: &F, key: &str) -> Result<Option<f32>, SiteError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = match lookup(key) {
        Some(raw) => raw,
        None => return Ok(None),
    };
    let trimmed = raw.trim().trim_end_matches("px").trim_end();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f32>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(Some(v)),
        _ => Err(SiteError::InvalidSetting {
            key: key.to_string(),
            value: raw,
        }),
    }
}
