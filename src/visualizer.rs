use crate::constants::{BAR_COLOR_BOTTOM, BAR_COLOR_TOP};
use crate::core::spectrum::bar_layout;
use crate::dom::{self, js_err};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Spectrum bars on a 2D canvas.
pub struct Visualizer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    // gradient depends on canvas height only
    gradient: Option<(u32, web::CanvasGradient)>,
}

impl Visualizer {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("unexpected 2d context type"))?;
        Ok(Self {
            canvas,
            ctx,
            gradient: None,
        })
    }

    pub fn draw(&mut self, bins: &[u8]) {
        let (w, h) = dom::sync_canvas_backing_size(&self.canvas);
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
        let Some(gradient) = self.gradient_for(h) else {
            return;
        };
        #[allow(deprecated)]
        self.ctx.set_fill_style(&gradient);
        for bar in bar_layout(bins, w as f32, h as f32) {
            self.ctx.fill_rect(
                bar.x as f64,
                bar.y as f64,
                bar.width as f64,
                bar.height as f64,
            );
        }
    }

    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn gradient_for(&mut self, height: u32) -> Option<web::CanvasGradient> {
        if let Some((h, g)) = &self.gradient {
            if *h == height {
                return Some(g.clone());
            }
        }
        let g = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, height as f64);
        if g.add_color_stop(0.0, BAR_COLOR_TOP).is_err()
            || g.add_color_stop(1.0, BAR_COLOR_BOTTOM).is_err()
        {
            log::warn!("[player] invalid bar gradient colors");
            return None;
        }
        self.gradient = Some((height, g.clone()));
        Some(g)
    }
}
