//! Canvas 2D renderer for the game's draw list

use game_core::render::{Anchor, FontSize};
use game_core::Color;

/// CSS color string with an alpha channel
pub fn css_color(color: Color, alpha: u8) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        color.r,
        color.g,
        color.b,
        alpha as f32 / 255.0
    )
}

/// CSS font shorthand for a HUD font size
pub fn css_font(size: FontSize) -> String {
    format!("{}px monospace", size.px())
}

/// Canvas `textAlign` and `textBaseline` for an anchor
pub fn text_alignment(anchor: Anchor) -> (&'static str, &'static str) {
    match anchor {
        Anchor::TopLeft => ("left", "top"),
        Anchor::Center => ("center", "middle"),
    }
}

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

#[cfg(target_arch = "wasm32")]
mod canvas {
    use super::{css_color, css_font, text_alignment};
    use crate::ClientError;
    use game_core::render::{DrawCmd, Frame};
    use std::f64::consts::TAU;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    pub struct CanvasRenderer {
        ctx: CanvasRenderingContext2d,
        width: f64,
        height: f64,
    }

    impl CanvasRenderer {
        pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, ClientError> {
            let ctx = canvas
                .get_context("2d")
                .map_err(|_| ClientError::NoContext)?
                .ok_or(ClientError::NoContext)?
                .dyn_into::<CanvasRenderingContext2d>()
                .map_err(|_| ClientError::NoContext)?;

            Ok(Self {
                ctx,
                width: canvas.width() as f64,
                height: canvas.height() as f64,
            })
        }

        pub fn draw(&self, frame: &Frame) {
            for cmd in &frame.commands {
                self.draw_cmd(cmd);
            }
        }

        fn draw_cmd(&self, cmd: &DrawCmd) {
            let ctx = &self.ctx;
            match cmd {
                DrawCmd::Clear(color) => {
                    ctx.set_fill_style_str(&css_color(*color, u8::MAX));
                    ctx.fill_rect(0.0, 0.0, self.width, self.height);
                }
                DrawCmd::FillRect { pos, size, color } => {
                    ctx.set_fill_style_str(&css_color(*color, u8::MAX));
                    ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
                }
                DrawCmd::StrokeRect { pos, size, color } => {
                    ctx.set_stroke_style_str(&css_color(*color, u8::MAX));
                    ctx.set_line_width(1.0);
                    ctx.stroke_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
                }
                DrawCmd::Circle {
                    center,
                    radius,
                    color,
                    alpha,
                } => {
                    ctx.set_fill_style_str(&css_color(*color, *alpha));
                    ctx.begin_path();
                    // Only fails for a negative radius
                    let _ = ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU);
                    ctx.fill();
                }
                DrawCmd::Text {
                    text,
                    pos,
                    size,
                    anchor,
                    color,
                } => {
                    let (align, baseline) = text_alignment(*anchor);
                    ctx.set_font(&css_font(*size));
                    ctx.set_text_align(align);
                    ctx.set_text_baseline(baseline);
                    ctx.set_fill_style_str(&css_color(*color, u8::MAX));
                    let _ = ctx.fill_text(text, pos.x as f64, pos.y as f64);
                }
            }
        }
    }
}
