//! Canvas 2D implementation of the drawing surface

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;

/// A `Surface` backed by an HTML canvas 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Grab the 2d context from the canvas. Only called during startup, so
    /// a missing context is a hard failure.
    pub fn new(canvas: &HtmlCanvasElement) -> Self {
        let ctx = canvas
            .get_context("2d")
            .expect("failed to query 2d context")
            .expect("no 2d context on canvas")
            .dyn_into::<CanvasRenderingContext2d>()
            .expect("not a 2d context");
        ctx.set_font("32px monospace");
        ctx.set_text_align("center");
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, color: &str, center: Vec2, width: f32, height: f32) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            (center.x - width / 2.0) as f64,
            (center.y - height / 2.0) as f64,
            width as f64,
            height as f64,
        );
    }

    fn fill_circle(&mut self, color: &str, center: Vec2, radius: f32) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    fn draw_text(&mut self, color: &str, text: &str, pos: Vec2) {
        self.ctx.set_fill_style_str(color);
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }
}
