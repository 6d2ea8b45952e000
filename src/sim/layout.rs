//! Button geometry
//!
//! Buttons sit in a single row of equal-width slots across the viewport.
//! Coordinates are surface pixels with the origin at the top-left corner and
//! y pointing down, matching pointer events.

use glam::Vec2;

/// Row of circular buttons sized to a viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub button_count: usize,
}

impl Layout {
    pub fn new(width: f32, height: f32, button_count: usize) -> Self {
        Self {
            width,
            height,
            button_count: button_count.max(1),
        }
    }

    /// Width of one button slot
    #[inline]
    pub fn slot_width(&self) -> f32 {
        self.width / self.button_count as f32
    }

    /// Radius shared by all buttons, in whole pixels
    #[inline]
    pub fn radius(&self) -> f32 {
        (self.height / (self.button_count + 3) as f32).floor()
    }

    /// Center of button `index` (midpoint of its slot, vertically centered)
    pub fn center(&self, index: usize) -> Vec2 {
        let slot = self.slot_width();
        let start = index as f32 * slot;
        let end = (index + 1) as f32 * slot;
        Vec2::new((start + end) / 2.0, self.height / 2.0)
    }

    /// Slot under a horizontal position, if it is inside the viewport
    pub fn slot_at(&self, x: f32) -> Option<usize> {
        if !(0.0..self.width).contains(&x) {
            return None;
        }
        let slot = (x / self.slot_width()) as usize;
        Some(slot.min(self.button_count - 1))
    }

    /// Button hit by a press at `point`.
    ///
    /// The slot is chosen from the x coordinate alone, then the press must land
    /// inside that slot's circle.
    pub fn button_at(&self, point: Vec2) -> Option<usize> {
        let index = self.slot_at(point.x)?;
        point_in_circle(point, self.center(index), self.radius()).then_some(index)
    }
}

/// Check if a point lies inside (or on) a circle
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance_squared(center) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn default_layout() -> Layout {
        Layout::new(1280.0, 720.0, 4)
    }

    #[test]
    fn test_centers_match_slots() {
        let layout = default_layout();
        let xs: Vec<f32> = (0..4).map(|i| layout.center(i).x).collect();
        assert_eq!(xs, vec![160.0, 480.0, 800.0, 1120.0]);
        assert!((0..4).all(|i| layout.center(i).y == 360.0));
    }

    #[test]
    fn test_radius() {
        let layout = default_layout();
        assert_eq!(layout.radius(), 102.0);
        assert_eq!(Layout::new(800.0, 600.0, 5).radius(), 75.0);
    }

    #[test]
    fn test_radius_is_whole_pixels() {
        let layout = default_layout();
        let c = layout.center(2);
        // Inside 720/7 but past the truncated radius
        assert_eq!(layout.button_at(c + Vec2::new(102.5, 0.0)), None);
        assert_eq!(layout.button_at(c + Vec2::new(102.0, 0.0)), Some(2));
    }

    #[test]
    fn test_button_at_center_hits() {
        let layout = default_layout();
        for i in 0..4 {
            assert_eq!(layout.button_at(layout.center(i)), Some(i));
        }
    }

    #[test]
    fn test_button_at_edge_of_circle() {
        let layout = default_layout();
        let r = layout.radius();
        let c = layout.center(1);
        assert_eq!(layout.button_at(c + Vec2::new(r - 0.5, 0.0)), Some(1));
        assert_eq!(layout.button_at(c + Vec2::new(0.0, r + 0.5)), None);
    }

    #[test]
    fn test_button_at_misses_outside_circle() {
        let layout = default_layout();
        // Slot 0 but far above the row
        assert_eq!(layout.button_at(Vec2::new(160.0, 20.0)), None);
        // Between two circles
        assert_eq!(layout.button_at(Vec2::new(320.0, 360.0)), None);
    }

    #[test]
    fn test_slot_at_bounds() {
        let layout = default_layout();
        assert_eq!(layout.slot_at(-1.0), None);
        assert_eq!(layout.slot_at(0.0), Some(0));
        assert_eq!(layout.slot_at(1279.9), Some(3));
        assert_eq!(layout.slot_at(1280.0), None);
    }

    #[test]
    fn test_point_in_circle_inclusive() {
        let c = Vec2::new(10.0, 10.0);
        assert!(point_in_circle(Vec2::new(13.0, 14.0), c, 5.0));
        assert!(!point_in_circle(Vec2::new(13.0, 14.1), c, 5.0));
    }

    proptest! {
        #[test]
        fn prop_hit_button_matches_slot(
            x in 0.0f32..1280.0,
            y in 0.0f32..720.0,
            buttons in 1usize..9,
        ) {
            let layout = Layout::new(1280.0, 720.0, buttons);
            let point = Vec2::new(x, y);
            if let Some(i) = layout.button_at(point) {
                prop_assert!(i < buttons);
                prop_assert_eq!(layout.slot_at(x), Some(i));
                prop_assert!(point.distance(layout.center(i)) <= layout.radius() + 0.001);
            }
        }
    }
}
