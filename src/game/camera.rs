//! Follow camera
//!
//! The camera is just a translation: world minus offset gives screen. It is
//! rebuilt from the player position every frame.

use macroquad::math::Vec2;
use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World position of the screen's top-left corner
    pub offset: Vec2,
    /// Screen-space viewport, always at (0, 0)
    pub viewport: Rect,
}

impl Camera {
    /// Center the viewport on `target`
    pub fn follow(target: Vec2, viewport_size: Vec2) -> Self {
        Self {
            offset: target - viewport_size / 2.0,
            viewport: Rect::screen(viewport_size.x, viewport_size.y),
        }
    }

    pub fn world_to_screen(&self, point: Vec2) -> Vec2 {
        point - self.offset
    }

    pub fn rect_to_screen(&self, rect: &Rect) -> Rect {
        rect.translate(-self.offset.x, -self.offset.y)
    }

    /// Screen rectangle for `rect`, or None if it's entirely off screen
    pub fn project(&self, rect: &Rect) -> Option<Rect> {
        let screen = self.rect_to_screen(rect);
        screen.overlaps(&self.viewport).then_some(screen)
    }
}
