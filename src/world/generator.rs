//! Random world object placement
//!
//! Objects are squares scattered uniformly inside a square region centered on
//! the origin. Placement is deliberately naive: objects may overlap each other
//! and the house.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use crate::geometry::Rect;

/// Largest accepted half extent. Keeps `2 * extent` well inside `i32` and
/// world coordinates exact in `f32`.
pub const MAX_WORLD_HALF_EXTENT: i32 = 1 << 20;

/// Inclusive count and size bounds for one object category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRange {
    pub min_count: u32,
    pub max_count: u32,
    pub min_size: i32,
    pub max_size: i32,
}

impl SpawnRange {
    pub const fn new(min_count: u32, max_count: u32, min_size: i32, max_size: i32) -> Self {
        Self { min_count, max_count, min_size, max_size }
    }
}

/// Seeded generator for world objects
pub struct WorldGenerator {
    rng: StdRng,
    half_extent: i32,
}

impl WorldGenerator {
    /// `half_extent` is clamped to `1..=MAX_WORLD_HALF_EXTENT`
    pub fn new(seed: u64, half_extent: i32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            half_extent: half_extent.clamp(1, MAX_WORLD_HALF_EXTENT),
        }
    }

    /// Region every generated object lies within
    pub fn bounds(&self) -> Rect {
        let e = self.half_extent as f32;
        Rect::new(-e, -e, 2.0 * e, 2.0 * e)
    }

    /// Generate one category of objects.
    ///
    /// Inverted ranges are swapped and sizes are clamped to fit in the world
    /// rather than rejected.
    pub fn generate(&mut self, range: &SpawnRange) -> Vec<Rect> {
        let (min_count, max_count) = ordered(range.min_count, range.max_count);
        let (min_size, max_size) = ordered(range.min_size, range.max_size);
        let span = self.half_extent * 2;
        let min_size = min_size.clamp(1, span);
        let max_size = max_size.clamp(min_size, span);

        let count = self.rng.gen_range(min_count..=max_count);
        let mut objects = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let size = self.rng.gen_range(min_size..=max_size);
            // Top-left corner such that corner + size stays inside the bounds
            let x = self.rng.gen_range(-self.half_extent..=self.half_extent - size);
            let y = self.rng.gen_range(-self.half_extent..=self.half_extent - size);
            objects.push(Rect::square(x as f32, y as f32, size as f32));
        }
        objects
    }
}

fn ordered<T: Ord>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objects_stay_in_bounds() {
        let mut generator = WorldGenerator::new(12345, 1000);
        let bounds = generator.bounds();
        let range = SpawnRange::new(50, 80, 25, 60);

        for _ in 0..20 {
            let objects = generator.generate(&range);
            assert!(objects.len() >= 50 && objects.len() <= 80);
            for obj in &objects {
                assert!(obj.left() >= bounds.left() && obj.right() <= bounds.right(), "{:?}", obj);
                assert!(obj.top() >= bounds.top() && obj.bottom() <= bounds.bottom(), "{:?}", obj);
                assert!(obj.w >= 25.0 && obj.w <= 60.0);
                assert_eq!(obj.w, obj.h);
            }
        }
    }

    #[test]
    fn test_fixed_range() {
        let mut generator = WorldGenerator::new(1, 1000);
        let objects = generator.generate(&SpawnRange::new(4, 4, 30, 30));
        assert_eq!(objects.len(), 4);
        assert!(objects.iter().all(|o| o.w == 30.0 && o.h == 30.0));
    }

    #[test]
    fn test_inverted_range_is_normalized() {
        let mut generator = WorldGenerator::new(3, 1000);
        let objects = generator.generate(&SpawnRange::new(6, 2, 40, 20));
        assert!(objects.len() >= 2 && objects.len() <= 6);
        assert!(objects.iter().all(|o| o.w >= 20.0 && o.w <= 40.0));
    }

    #[test]
    fn test_oversized_objects_fill_world() {
        let mut generator = WorldGenerator::new(9, 10);
        let objects = generator.generate(&SpawnRange::new(1, 1, 50, 90));
        assert_eq!(objects, vec![Rect::square(-10.0, -10.0, 20.0)]);
    }

    #[test]
    fn test_huge_extent_is_clamped() {
        let mut generator = WorldGenerator::new(5, i32::MAX);
        let bounds = generator.bounds();
        let e = MAX_WORLD_HALF_EXTENT as f32;
        assert_eq!(bounds, Rect::new(-e, -e, 2.0 * e, 2.0 * e));

        let objects = generator.generate(&SpawnRange::new(10, 10, 25, 60));
        assert_eq!(objects.len(), 10);
        for obj in &objects {
            assert!(obj.left() >= bounds.left() && obj.right() <= bounds.right(), "{:?}", obj);
            assert!(obj.top() >= bounds.top() && obj.bottom() <= bounds.bottom(), "{:?}", obj);
        }

        // Non-positive extents fall back to the smallest world
        assert_eq!(WorldGenerator::new(5, i32::MIN).bounds(), Rect::new(-1.0, -1.0, 2.0, 2.0));
    }

    #[test]
    fn test_zero_count() {
        let mut generator = WorldGenerator::new(9, 1000);
        assert!(generator.generate(&SpawnRange::new(0, 0, 10, 20)).is_empty());
    }
}
