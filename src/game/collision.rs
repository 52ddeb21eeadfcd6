//! Collision System
//!
//! Per-frame movement resolution for the player against static obstacles.
//! Two shapes, two algorithms, always in this order:
//!
//! 1. Rectangles (walls, scrap): axis-separated sweep. Move along X, clamp the
//!    leading edge against every overlapping rectangle, then the same for Y.
//! 2. Circles (stones, bushes): push the player out along the center-to-center
//!    normal by the overlap, but only when the player is moving into the
//!    circle. Push-backs from all circles are summed and applied once.
//!
//! Both passes are single-shot approximations. Overlapping rectangles resolve
//! in list order, and opposing circle pushes can cancel each other out.

use macroquad::math::Vec2;
use crate::geometry::{Circle, Rect};
use crate::world::World;
use super::player::Player;

/// Stand-in distance when the player center sits exactly on a circle center
pub const DISTANCE_EPSILON: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Static obstacles split by collision shape
#[derive(Debug, Clone, Default)]
pub struct Obstacles {
    pub rects: Vec<Rect>,
    pub circles: Vec<Circle>,
}

impl Obstacles {
    pub fn new(rects: Vec<Rect>, circles: Vec<Circle>) -> Self {
        Self { rects, circles }
    }

    pub fn from_world(world: &World) -> Self {
        Self::new(world.rect_obstacles(), world.circle_obstacles())
    }
}

/// Result of one frame of movement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Corrected player center
    pub center: Vec2,
    /// A rectangle clamped the X move
    pub hit_x: bool,
    /// A rectangle clamped the Y move
    pub hit_y: bool,
    /// Summed circle push-back that was applied
    pub push_back: Vec2,
    /// Number of circles that contributed a push
    pub circle_contacts: usize,
}

/// Move `bounds` by `delta` along one axis and clamp against rectangles.
///
/// Every rectangle is checked, even after a correction. Nothing happens for
/// a zero delta, so a box already resting inside a rectangle stays put.
/// Returns whether any rectangle clamped the move.
pub fn sweep_axis(bounds: &mut Rect, delta: f32, axis: Axis, rects: &[Rect]) -> bool {
    match axis {
        Axis::X => bounds.x += delta,
        Axis::Y => bounds.y += delta,
    }

    let mut hit = false;
    for obstacle in rects {
        if !bounds.overlaps(obstacle) {
            continue;
        }
        match axis {
            Axis::X if delta > 0.0 => bounds.set_right(obstacle.left()),
            Axis::X if delta < 0.0 => bounds.set_left(obstacle.right()),
            Axis::Y if delta > 0.0 => bounds.set_bottom(obstacle.top()),
            Axis::Y if delta < 0.0 => bounds.set_top(obstacle.bottom()),
            _ => continue,
        }
        hit = true;
    }
    hit
}

/// Push-back for one circular obstacle, or zero.
///
/// Zero when the circles don't overlap, and also when the player isn't moving
/// into the obstacle (movement · normal >= 0). The second rule keeps a player
/// at rest from being shoved around while overlapping.
pub fn circle_push_back(center: Vec2, radius: f32, obstacle: &Circle, movement: Vec2) -> Vec2 {
    let offset = center - obstacle.center;
    let mut distance = offset.length();
    let min_distance = radius + obstacle.radius;

    if distance >= min_distance {
        return Vec2::ZERO;
    }
    if distance == 0.0 {
        distance = DISTANCE_EPSILON;
    }

    let overlap = min_distance - distance;
    let normal = offset / distance;

    if movement.dot(normal) < 0.0 {
        normal * overlap
    } else {
        Vec2::ZERO
    }
}

/// Resolve one frame of movement for a circular player of `radius` at `center`
pub fn resolve_movement(
    center: Vec2,
    radius: f32,
    movement: Vec2,
    obstacles: &Obstacles,
    debug_log: bool,
) -> CollisionResult {
    // Rectangle pass on the bounding box
    let mut bounds = Rect::from_center(center, radius * 2.0, radius * 2.0);
    let hit_x = sweep_axis(&mut bounds, movement.x, Axis::X, &obstacles.rects);
    let hit_y = sweep_axis(&mut bounds, movement.y, Axis::Y, &obstacles.rects);

    // Circle pass from the rect-corrected center
    let after_rects = bounds.center();
    let mut push_back = Vec2::ZERO;
    let mut circle_contacts = 0;
    for circle in &obstacles.circles {
        let push = circle_push_back(after_rects, radius, circle, movement);
        if push != Vec2::ZERO {
            circle_contacts += 1;
            push_back += push;
        }
    }

    let result = CollisionResult {
        center: after_rects + push_back,
        hit_x,
        hit_y,
        push_back,
        circle_contacts,
    };

    if debug_log && movement != Vec2::ZERO {
        println!(
            "COL|in:({:.1},{:.1})|mv:({:.2},{:.2})|out:({:.1},{:.1})|rect:{}{}|push:({:.2},{:.2})x{}",
            center.x, center.y,
            movement.x, movement.y,
            result.center.x, result.center.y,
            if hit_x { "X" } else { "-" },
            if hit_y { "Y" } else { "-" },
            push_back.x, push_back.y,
            circle_contacts
        );
    }

    result
}

/// Move the player by `movement`, resolving collisions, and update its center
pub fn move_player(
    player: &mut Player,
    movement: Vec2,
    obstacles: &Obstacles,
    debug_log: bool,
) -> CollisionResult {
    let result = resolve_movement(player.center, player.radius, movement, obstacles, debug_log);
    player.center = result.center;
    result
}
