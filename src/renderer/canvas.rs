//! Canvas2D renderer for the web build

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{colors, hud_text, overlay_lines};
use crate::scheduler::Renderer;
use crate::sim::{GameState, SessionPhase};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    /// Canvas pixels per play-area unit
    scale: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, play_width: f32) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let scale = canvas.width() as f64 / play_width as f64;
        Ok(Self { ctx, scale })
    }

    fn rect(&self, color: &str, x: f32, y: f32, w: f32, h: f32) {
        let s = self.scale;
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(x as f64 * s, y as f64 * s, w as f64 * s, h as f64 * s);
    }

    fn text(&self, text: &str, x: f64, y: f64, size_px: u32) {
        self.ctx.set_font(&format!("bold {}px sans-serif", size_px));
        let _ = self.ctx.fill_text(text, x, y);
    }
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, state: &GameState) {
        let area = state.play_area();
        let s = self.scale;

        self.rect(colors::SKY, 0.0, 0.0, area.width, area.hazard_top());
        self.rect(colors::HAZARD, 0.0, area.hazard_top(), area.width, area.hazard_height);

        for platform in &state.platforms {
            let color = if platform.scored {
                colors::PLATFORM_SCORED
            } else {
                colors::PLATFORM
            };
            self.rect(
                color,
                platform.pos.x,
                platform.pos.y,
                platform.size.x,
                platform.size.y,
            );
        }

        let player = &state.player;
        self.rect(colors::PLAYER, player.pos.x, player.pos.y, player.size.x, player.size.y);

        self.ctx.set_fill_style_str(colors::TEXT);
        self.ctx.set_text_align("left");
        self.text(&hud_text(state), 10.0, 24.0, 16);

        let lines = overlay_lines(state);
        if lines.is_empty() {
            return;
        }
        if state.phase == SessionPhase::Over {
            self.rect(colors::OVERLAY, 0.0, 0.0, area.width, area.height);
        }
        self.ctx.set_fill_style_str(colors::TEXT);
        self.ctx.set_text_align("center");
        let center_x = area.width as f64 * s / 2.0;
        let mut y = area.height as f64 * s / 2.0 - 40.0;
        for (i, line) in lines.iter().enumerate() {
            self.text(line, center_x, y, if i == 0 { 40 } else { 20 });
            y += if i == 0 { 50.0 } else { 32.0 };
        }
    }
}
