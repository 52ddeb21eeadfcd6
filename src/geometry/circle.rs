//! Circle shape for round obstacles

use macroquad::math::Vec2;
use super::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Circle inscribed in a bounding square: same center, radius = half the side
    pub fn from_bounds(bounds: &Rect) -> Self {
        Self::new(bounds.center(), bounds.w * 0.5)
    }
}
