//! Canvas 2D backend (wasm)

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::frame::{DrawCommand, Frame, PipeCap, TextLine};
use crate::Rect;

const SKY: &str = "#70c5ce";
const PIPE_FILL: &str = "#0f0";
const PIPE_STROKE: &str = "#070";
const PIPE_SHINE: &str = "rgba(255,255,255,0.3)";
const PIPE_LIP_RADIUS: f64 = 15.0;
const BODY_FILL: &str = "#FFD700";
const BODY_STROKE: &str = "#DAA520";
const BEAK: &str = "#FFA500";
const SHADE: &str = "rgba(0, 0, 0, 0.5)";

/// Paints [`Frame`]s onto a 2D canvas context
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn paint(&self, frame: &Frame) -> Result<(), JsValue> {
        for command in &frame.commands {
            match command {
                DrawCommand::Sky(field) => {
                    self.ctx.set_fill_style_str(SKY);
                    self.ctx
                        .fill_rect(0.0, 0.0, field.width as f64, field.height as f64);
                }
                DrawCommand::Cloud { center, size } => {
                    self.cloud(center.x as f64, center.y as f64, *size as f64)?
                }
                DrawCommand::Pipe { rect, cap } => self.pipe(rect, *cap)?,
                DrawCommand::Avatar { center, size } => self.avatar(
                    center.x as f64,
                    center.y as f64,
                    size.x as f64,
                    size.y as f64,
                )?,
                DrawCommand::Shade(field) => {
                    self.ctx.set_fill_style_str(SHADE);
                    self.ctx
                        .fill_rect(0.0, 0.0, field.width as f64, field.height as f64);
                }
                DrawCommand::Text(line) => self.text(line)?,
            }
        }
        Ok(())
    }

    fn cloud(&self, x: f64, y: f64, size: f64) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_fill_style_str("white");
        ctx.begin_path();
        ctx.arc(x, y, size * 0.4, 0.0, TAU)?;
        ctx.arc(x + size * 0.3, y - size * 0.15, size * 0.35, 0.0, TAU)?;
        ctx.arc(x + size * 0.6, y, size * 0.4, 0.0, TAU)?;
        ctx.fill();
        ctx.set_stroke_style_str("#ddd");
        ctx.set_line_width(2.0);
        ctx.stroke();
        Ok(())
    }

    fn pipe(&self, rect: &Rect, cap: PipeCap) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let (x, y, w, h) = (rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
        let r = PIPE_LIP_RADIUS.min(h / 2.0).max(0.0);

        ctx.set_fill_style_str(PIPE_FILL);
        ctx.set_stroke_style_str(PIPE_STROKE);
        ctx.set_line_width(3.0);
        ctx.begin_path();
        match cap {
            PipeCap::Bottom => {
                ctx.move_to(x, y);
                ctx.line_to(x, y + h - r);
                ctx.quadratic_curve_to(x, y + h, x + r, y + h);
                ctx.line_to(x + w - r, y + h);
                ctx.quadratic_curve_to(x + w, y + h, x + w, y + h - r);
                ctx.line_to(x + w, y);
            }
            PipeCap::Top => {
                ctx.move_to(x, y + r);
                ctx.quadratic_curve_to(x, y, x + r, y);
                ctx.line_to(x + w - r, y);
                ctx.quadratic_curve_to(x + w, y, x + w, y + r);
                ctx.line_to(x + w, y + h);
                ctx.line_to(x, y + h);
            }
        }
        ctx.close_path();
        ctx.fill();
        ctx.stroke();

        ctx.set_fill_style_str(PIPE_SHINE);
        let shine_y = match cap {
            PipeCap::Bottom => y + 5.0,
            PipeCap::Top => y + h / 2.0,
        };
        ctx.fill_rect(x + 5.0, shine_y, w / 2.0, h / 4.0);
        Ok(())
    }

    fn avatar(&self, x: f64, y: f64, w: f64, h: f64) -> Result<(), JsValue> {
        let ctx = &self.ctx;

        // Body
        ctx.set_fill_style_str(BODY_FILL);
        ctx.set_stroke_style_str(BODY_STROKE);
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.ellipse(x, y, w / 2.0, h / 2.0, 0.0, 0.0, TAU)?;
        ctx.fill();
        ctx.stroke();

        // Eye
        ctx.set_fill_style_str("white");
        ctx.begin_path();
        ctx.ellipse(x + 6.0, y - 5.0, 6.0, 8.0, 0.0, 0.0, TAU)?;
        ctx.fill();
        ctx.set_stroke_style_str("#444");
        ctx.stroke();
        ctx.set_fill_style_str("black");
        ctx.begin_path();
        ctx.ellipse(x + 7.0, y - 5.0, 3.0, 5.0, 0.0, 0.0, TAU)?;
        ctx.fill();

        // Beak
        ctx.set_fill_style_str(BEAK);
        ctx.begin_path();
        ctx.move_to(x + w / 2.0, y);
        ctx.line_to(x + w / 2.0 + 10.0, y + 4.0);
        ctx.line_to(x + w / 2.0 + 10.0, y - 4.0);
        ctx.close_path();
        ctx.fill();
        ctx.stroke();
        Ok(())
    }

    fn text(&self, line: &TextLine) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str("white");
        self.ctx.set_font(&format!("{}px Arial", line.font_px));
        self.ctx.set_text_align("center");
        self.ctx
            .fill_text(&line.text, line.pos.x as f64, line.pos.y as f64)
    }
}
