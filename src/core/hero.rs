// Hero shader inputs that don't touch the GPU.

pub const MAX_PIXEL_RATIO: f64 = 2.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct HeroUniforms {
    pub resolution: [f32; 2],
    pub mouse: [f32; 2],
    pub time: f32,
    pub _pad: [f32; 3],
}

impl HeroUniforms {
    pub fn new(resolution: [f32; 2], mouse: [f32; 2], time: f32) -> Self {
        Self {
            resolution,
            mouse,
            time,
            _pad: [0.0; 3],
        }
    }
}

/// Pointer in shader uv space: x left-to-right, y bottom-to-top.
pub fn pointer_uv(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> [f32; 2] {
    if viewport_w > 0.0 && viewport_h > 0.0 {
        [
            (client_x / viewport_w).clamp(0.0, 1.0),
            1.0 - (client_y / viewport_h).clamp(0.0, 1.0),
        ]
    } else {
        [0.5, 0.5]
    }
}

#[inline]
pub fn effective_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Canvas backing store size for a CSS box, never smaller than 1x1.
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = effective_pixel_ratio(device_pixel_ratio);
    let w = (css_width.max(0.0) * dpr) as u32;
    let h = (css_height.max(0.0) * dpr) as u32;
    (w.max(1), h.max(1))
}
