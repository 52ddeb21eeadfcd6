//! World module - static layout of the map
//!
//! Built once at startup and never mutated afterwards:
//! - The house: five wall segments with a door gap on the right side
//! - Randomly scattered stones, scrap and bushes
//!
//! Obstacles come in exactly two collision shapes. Walls and scrap collide as
//! rectangles, stones and bushes as circles inscribed in their bounding square.

mod generator;
mod house;

pub use generator::*;
pub use house::*;

use crate::config::GameConfig;
use crate::geometry::{Circle, Rect};
use macroquad::math::Vec2;

/// Category of a static world object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Wall,
    Stone,
    Scrap,
    Bush,
}

/// How an object collides with the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionShape {
    Rect,
    Circle,
}

impl ObjectKind {
    pub fn shape(self) -> CollisionShape {
        match self {
            ObjectKind::Wall | ObjectKind::Scrap => CollisionShape::Rect,
            ObjectKind::Stone | ObjectKind::Bush => CollisionShape::Circle,
        }
    }
}

/// All static objects in world coordinates
#[derive(Debug, Clone)]
pub struct World {
    pub house: House,
    pub stones: Vec<Rect>,
    pub scraps: Vec<Rect>,
    pub bushes: Vec<Rect>,
    /// Region the generator scatters objects in
    pub bounds: Rect,
}

impl World {
    /// Build the house at the origin and scatter objects from `seed`
    pub fn generate(config: &GameConfig, seed: u64) -> Self {
        let house = House::build(Vec2::ZERO, config.house_span(), config.wall_thickness);

        let mut generator = WorldGenerator::new(seed, config.world_half_extent);
        let stones = generator.generate(&config.stones);
        let scraps = generator.generate(&config.scraps);
        let bushes = generator.generate(&config.bushes);

        Self {
            house,
            stones,
            scraps,
            bushes,
            bounds: generator.bounds(),
        }
    }

    /// Every object tagged with its kind, in draw order
    /// (walls, stones, scrap, bushes)
    pub fn objects(&self) -> impl Iterator<Item = (ObjectKind, &Rect)> + '_ {
        self.house.walls.iter().map(|r| (ObjectKind::Wall, r))
            .chain(self.stones.iter().map(|r| (ObjectKind::Stone, r)))
            .chain(self.scraps.iter().map(|r| (ObjectKind::Scrap, r)))
            .chain(self.bushes.iter().map(|r| (ObjectKind::Bush, r)))
    }

    /// Rectangular obstacles: walls first, then scrap
    pub fn rect_obstacles(&self) -> Vec<Rect> {
        self.objects()
            .filter(|(kind, _)| kind.shape() == CollisionShape::Rect)
            .map(|(_, r)| *r)
            .collect()
    }

    /// Circular obstacles: stones first, then bushes
    pub fn circle_obstacles(&self) -> Vec<Circle> {
        self.objects()
            .filter(|(kind, _)| kind.shape() == CollisionShape::Circle)
            .map(|(_, r)| Circle::from_bounds(r))
            .collect()
    }
}
