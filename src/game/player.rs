//! Player character

use macroquad::math::Vec2;
use crate::geometry::Rect;

/// The survivor: a circle that moves at constant speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// World-space center
    pub center: Vec2,
    pub radius: f32,
    /// World units per frame
    pub speed: f32,
}

impl Player {
    pub fn new(center: Vec2, radius: f32, speed: f32) -> Self {
        Self { center, radius, speed }
    }

    /// Axis-aligned bounding box, used against rectangular obstacles
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.center, self.radius * 2.0, self.radius * 2.0)
    }

    /// Movement for one frame from a raw input direction.
    ///
    /// The direction is normalized first so diagonals are no faster than
    /// straight lines. A zero direction yields zero movement.
    pub fn movement(&self, direction: Vec2) -> Vec2 {
        let magnitude = direction.length();
        if magnitude > 0.0 {
            direction / magnitude * self.speed
        } else {
            Vec2::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let player = Player::new(Vec2::new(125.0, 0.0), 20.0, 3.0);
        assert_eq!(player.bounds(), Rect::new(105.0, -20.0, 40.0, 40.0));
    }

    #[test]
    fn test_diagonal_not_faster() {
        let player = Player::new(Vec2::ZERO, 20.0, 3.0);
        let straight = player.movement(Vec2::new(1.0, 0.0));
        let diagonal = player.movement(Vec2::new(1.0, -1.0));
        assert!((straight.length() - 3.0).abs() < 0.0001);
        assert!((diagonal.length() - 3.0).abs() < 0.0001);
        assert!((diagonal.x - 3.0 / 2f32.sqrt()).abs() < 0.0001);
        assert!(diagonal.y < 0.0);
    }

    #[test]
    fn test_no_input_no_movement() {
        let player = Player::new(Vec2::ZERO, 20.0, 3.0);
        assert_eq!(player.movement(Vec2::ZERO), Vec2::ZERO);
    }
}
