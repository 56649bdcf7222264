use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Check if the circle's bounding square touches this box (edges inclusive)
    pub fn overlaps_circle_bounds(&self, center: Vec2, radius: f32) -> bool {
        center.x - radius <= self.max.x
            && center.x + radius >= self.min.x
            && center.y + radius >= self.min.y
            && center.y - radius <= self.max.y
    }
}
