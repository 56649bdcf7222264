//! Draw list for one frame.
//!
//! Pure read of the simulation state; the host turns the commands into
//! pixels. Coordinates are window pixels with the origin top-left.

use glam::Vec2;
use hecs::World;

use crate::{Ball, Color, Config, MatchState, Paddle, Phase, Score, Side, Trail};

const SERVE_HINT: &str = "Press SPACE to start, P to pause";

/// Font sizes used by the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Large,
    Small,
}

impl FontSize {
    pub fn px(self) -> f32 {
        match self {
            FontSize::Large => 32.0,
            FontSize::Small => 16.0,
        }
    }
}

/// Where a text position is measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(Color),
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    StrokeRect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        alpha: u8,
    },
    Text {
        text: String,
        pos: Vec2,
        size: FontSize,
        anchor: Anchor,
        color: Color,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCmd>,
}

impl Frame {
    fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }

    fn text(&mut self, text: impl Into<String>, pos: Vec2, size: FontSize, anchor: Anchor) {
        self.push(DrawCmd::Text {
            text: text.into(),
            pos,
            size,
            anchor,
            color: Color::WHITE,
        });
    }

    /// All text strings in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Build the draw list for the current state
pub fn build_frame(world: &World, config: &Config, state: &MatchState, score: &Score) -> Frame {
    let mut frame = Frame::default();
    frame.push(DrawCmd::Clear(Color::BLACK));

    draw_score_bar(&mut frame, config, state, score);

    for (_e, paddle) in world.query::<&Paddle>().iter() {
        let rect = config.paddle_rect(paddle.side, paddle.top);
        frame.push(DrawCmd::FillRect {
            pos: rect.min,
            size: rect.size(),
            color: paddle.color(),
        });
    }

    for (_e, (ball, trail)) in world.query::<(&Ball, &Trail)>().iter() {
        draw_trail(&mut frame, trail, ball.color, config.ball_radius);
        frame.push(DrawCmd::Circle {
            center: ball.pos.trunc(),
            radius: config.ball_radius,
            color: ball.color,
            alpha: u8::MAX,
        });
    }

    draw_center_line(&mut frame, config);

    if state.phase == Phase::Resting {
        let pos = Vec2::new(config.width / 2.0, (config.height + config.upper_boundary) / 2.0);
        frame.text(SERVE_HINT, pos, FontSize::Small, Anchor::Center);
    }

    if state.paused {
        let pos = Vec2::new(config.width / 2.0, config.height / 2.0).trunc();
        frame.text("PAUSED", pos, FontSize::Large, Anchor::Center);
    }

    frame.text(
        format!("Difficulty: {} (Press 1-3 to change)", state.difficulty.label()),
        Vec2::new(10.0, config.height - 20.0),
        FontSize::Small,
        Anchor::TopLeft,
    );

    frame
}

fn draw_score_bar(frame: &mut Frame, config: &Config, state: &MatchState, score: &Score) {
    frame.push(DrawCmd::StrokeRect {
        pos: Vec2::new(5.0, 5.0),
        size: Vec2::new(config.width - 10.0, config.upper_boundary - 5.0),
        color: Color::WHITE,
    });

    let right_x = config.width - 200.0;
    frame.text("PLAYER", Vec2::new(50.0, 13.0), FontSize::Large, Anchor::TopLeft);
    frame.text(
        format!("SCORE: {}", score.get(Side::Left)),
        Vec2::new(50.0, 55.0),
        FontSize::Large,
        Anchor::TopLeft,
    );
    frame.text(
        format!("AI ({})", state.difficulty.label()),
        Vec2::new(right_x, 13.0),
        FontSize::Large,
        Anchor::TopLeft,
    );
    frame.text(
        format!("SCORE: {}", score.get(Side::Right)),
        Vec2::new(right_x, 55.0),
        FontSize::Large,
        Anchor::TopLeft,
    );
}

/// Older points are smaller and more transparent; the oldest is invisible
fn draw_trail(frame: &mut Frame, trail: &Trail, color: Color, ball_radius: f32) {
    let len = trail.len() as f32;
    for (i, point) in trail.points.iter().enumerate() {
        let fraction = i as f32 / len;
        let alpha = (255.0 * fraction) as u8;
        let radius = (ball_radius * fraction).floor().max(1.0);
        frame.push(DrawCmd::Circle {
            center: *point,
            radius,
            color,
            alpha,
        });
    }
}

fn draw_center_line(frame: &mut Frame, config: &Config) {
    let x = (config.width / 2.0).floor() - 1.0;
    let mut y = config.upper_boundary;
    while y < config.height {
        frame.push(DrawCmd::FillRect {
            pos: Vec2::new(x, y),
            size: Vec2::new(2.0, 10.0),
            color: Color::WHITE,
        });
        y += 20.0;
    }
}
