use std::collections::VecDeque;

use glam::Vec2;

/// Which side of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // human
    Right, // AI
}

/// Solid RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Paddle component - one per side
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub top: f32, // Y of the top edge (clamped to playfield)
}

impl Paddle {
    pub fn new(side: Side, top: f32) -> Self {
        Self { side, top }
    }

    pub fn color(&self) -> Color {
        match self.side {
            Side::Left => Color::RED,
            Side::Right => Color::PURPLE,
        }
    }
}

/// Movement command for a paddle, in pixels per tick (positive = down).
///
/// For the AI paddle this is also its only memory: when the AI skips a
/// reaction the previous command keeps driving the paddle.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub velocity: f32,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Marks the paddle steered by the AI controller
#[derive(Debug, Clone, Copy, Default)]
pub struct AiControlled;

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            color: Color::BLUE,
        }
    }
}

/// Recent ball positions, oldest first
#[derive(Debug, Clone, Default)]
pub struct Trail {
    pub points: VecDeque<Vec2>,
    pub max_len: usize,
}

impl Trail {
    pub fn new(max_len: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(max_len + 1),
            max_len,
        }
    }

    /// Append a position, evicting the oldest once full
    pub fn push(&mut self, pos: Vec2) {
        self.points.push_back(pos);
        while self.points.len() > self.max_len {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
