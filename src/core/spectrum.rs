use super::constants::{BAR_GAP_PX, BAR_HEIGHT_DIVISOR, BAR_WIDTH_FACTOR, SPIN_LEVEL_DIVISOR};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Bottom-aligned bars for one frame of byte frequency data.
///
/// Bars past the right edge are still produced; the canvas clips them.
pub fn bar_layout(bins: &[u8], canvas_width: f32, canvas_height: f32) -> Vec<Bar> {
    if bins.is_empty() || canvas_width <= 0.0 || canvas_height <= 0.0 {
        return Vec::new();
    }
    let width = canvas_width / bins.len() as f32 * BAR_WIDTH_FACTOR;
    let mut x = 0.0;
    bins.iter()
        .map(|&v| {
            let height = v as f32 / BAR_HEIGHT_DIVISOR;
            let bar = Bar {
                x,
                y: canvas_height - height,
                width,
                height,
            };
            x += width + BAR_GAP_PX;
            bar
        })
        .collect()
}

pub fn average_level(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    bins.iter().map(|&v| v as u32).sum::<u32>() as f32 / bins.len() as f32
}

/// Cover art rotation driven by the audio level.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CoverSpin {
    degrees: f32,
}

impl CoverSpin {
    pub fn degrees(&self) -> f32 {
        self.degrees
    }

    pub fn step(&mut self, average: f32, playing: bool) -> f32 {
        if playing {
            self.degrees = (self.degrees + average / SPIN_LEVEL_DIVISOR).rem_euclid(360.0);
        }
        self.degrees
    }
}
