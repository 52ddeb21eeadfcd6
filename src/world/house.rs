//! House geometry
//!
//! A square of walls with uniform thickness. The right side is split into two
//! equal segments with the door gap between them; it's the only way in.
//!
//! ```text
//!   +--------------+
//!   |              |
//!   |              #   <- right_top
//!   |
//!   |                  <- door gap
//!   |              #   <- right_bottom
//!   |              |
//!   +--------------+
//! ```

use macroquad::math::Vec2;
use crate::geometry::Rect;

/// Gap between the right wall and a freshly spawned player
const SPAWN_CLEARANCE: f32 = 5.0;

/// Height of each right-wall segment: a third of the inner height, floored,
/// never negative
pub fn door_segment_height(inner_height: f32) -> f32 {
    (inner_height / 3.0).floor().max(0.0)
}

/// Height of the door gap: whatever the two segments leave over, never negative
pub fn door_gap_height(inner_height: f32) -> f32 {
    (inner_height - 2.0 * (inner_height / 3.0).floor()).max(0.0)
}

/// The five wall rectangles plus derived door measurements
#[derive(Debug, Clone, PartialEq)]
pub struct House {
    /// top, bottom, left, right_top, right_bottom
    pub walls: [Rect; 5],
    pub door_gap: f32,
    pub thickness: f32,
}

impl House {
    /// Build the walls of a house of outer size `span` x `span` centered on `center`
    pub fn build(center: Vec2, span: f32, thickness: f32) -> Self {
        let left = (center.x - span * 0.5).trunc();
        let top = (center.y - span * 0.5).trunc();
        let span = span.trunc();

        let inner_height = span - 2.0 * thickness;
        let segment = door_segment_height(inner_height);
        let door_gap = door_gap_height(inner_height);

        let top_wall = Rect::new(left, top, span, thickness);
        let bottom_wall = Rect::new(left, top + span - thickness, span, thickness);
        let left_wall = Rect::new(left, top + thickness, thickness, inner_height.max(0.0));

        let right_x = left + span - thickness;
        let right_top = Rect::new(right_x, top + thickness, thickness, segment);
        let right_bottom = Rect::new(right_x, right_top.bottom() + door_gap, thickness, segment);

        Self {
            walls: [top_wall, bottom_wall, left_wall, right_top, right_bottom],
            door_gap,
            thickness,
        }
    }

    pub fn right_top(&self) -> &Rect {
        &self.walls[3]
    }

    /// The opening in the right wall
    pub fn door(&self) -> Rect {
        let upper = self.right_top();
        Rect::new(upper.x, upper.bottom(), self.thickness, self.door_gap)
    }

    /// Player spawn: just outside the door, vertically centered in the gap
    pub fn spawn_point(&self, player_radius: f32) -> Vec2 {
        let upper = self.right_top();
        Vec2::new(
            upper.right() + player_radius + SPAWN_CLEARANCE,
            upper.bottom() + (self.door_gap / 2.0).floor(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_house() -> House {
        House::build(Vec2::ZERO, 200.0, 20.0)
    }

    #[test]
    fn test_wall_layout() {
        let house = default_house();
        let [top, bottom, left, right_top, right_bottom] = house.walls;

        assert_eq!(top, Rect::new(-100.0, -100.0, 200.0, 20.0));
        assert_eq!(bottom, Rect::new(-100.0, 80.0, 200.0, 20.0));
        assert_eq!(left, Rect::new(-100.0, -80.0, 20.0, 160.0));
        // inner height 160 -> segments of 53, gap of 54
        assert_eq!(right_top, Rect::new(80.0, -80.0, 20.0, 53.0));
        assert_eq!(right_bottom, Rect::new(80.0, -27.0 + 54.0, 20.0, 53.0));
        assert_eq!(house.door_gap, 54.0);
        // bottom segment ends flush with the bottom wall
        assert_eq!(right_bottom.bottom(), bottom.top());
    }

    #[test]
    fn test_uniform_thickness() {
        let house = House::build(Vec2::new(300.0, -50.0), 240.0, 12.0);
        let [top, bottom, left, right_top, right_bottom] = house.walls;
        assert_eq!(top.h, 12.0);
        assert_eq!(bottom.h, 12.0);
        assert_eq!(left.w, 12.0);
        assert_eq!(right_top.w, 12.0);
        assert_eq!(right_bottom.w, 12.0);
        assert_eq!(right_top.h, right_bottom.h);
    }

    #[test]
    fn test_door_gap_formula() {
        for inner in 0..300 {
            let inner = inner as f32;
            let gap = door_gap_height(inner);
            assert!(gap >= 0.0);
            assert_eq!(gap, inner - 2.0 * (inner / 3.0).floor());
            assert_eq!(2.0 * door_segment_height(inner) + gap, inner);
        }
    }

    #[test]
    fn test_degenerate_house_clamps() {
        // Walls thicker than half the span: negative inner height
        let house = House::build(Vec2::ZERO, 30.0, 20.0);
        assert_eq!(house.door_gap, 0.0);
        assert_eq!(house.right_top().h, 0.0);
        assert_eq!(house.walls[4].h, 0.0);
        assert_eq!(house.walls[2].h, 0.0);
    }

    #[test]
    fn test_spawn_point_outside_door() {
        let house = default_house();
        let spawn = house.spawn_point(20.0);
        assert_eq!(spawn, Vec2::new(100.0 + 20.0 + 5.0, -27.0 + 27.0));

        let door = house.door();
        assert!(spawn.y > door.top() && spawn.y < door.bottom());
        assert!(spawn.x - 20.0 > door.right());
    }
}
