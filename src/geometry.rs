//! Signed points and rectangles used for pane placement and hit-testing.
//!
//! Pane positions are relative to the parent's origin and may go negative
//! (a pane dragged partially past its parent's left edge), so origins are
//! `i32` while sizes stay unsigned like `ratatui::layout::Rect`.

use std::ops::{Add, AddAssign, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<(u16, u16)> for Size {
    fn from((width, height): (u16, u16)) -> Self {
        Self { width, height }
    }
}

/// Signed rectangle origin with unsigned size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PaneRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl PaneRect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Translate the rectangle by `offset`.
    pub fn moved(self, offset: Point) -> Self {
        Self::new(self.origin() + offset, self.size())
    }

    /// Center cell, rounded toward the origin.
    pub fn center(&self) -> Point {
        Point::new(
            self.x.saturating_add(i32::from(self.width) / 2),
            self.y.saturating_add(i32::from(self.height) / 2),
        )
    }

    /// Half-open containment: the right and bottom edges are outside.
    ///
    /// Edges are measured in `i64` so rectangles reaching past `i32::MAX`
    /// keep their full extent.
    pub fn contains(&self, point: Point) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        let (x, y) = (i64::from(point.x), i64::from(point.y));
        let (min_x, min_y) = (i64::from(self.x), i64::from(self.y));
        let max_x = min_x + i64::from(self.width);
        let max_y = min_y + i64::from(self.height);
        x >= min_x && x < max_x && y >= min_y && y < max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = PaneRect::new(Point::new(2, 3), Size::new(4, 2));
        assert!(r.contains(Point::new(2, 3)));
        assert!(r.contains(Point::new(5, 4)));
        assert!(!r.contains(Point::new(6, 4)));
        assert!(!r.contains(Point::new(5, 5)));
        assert!(!r.contains(Point::new(1, 3)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let r = PaneRect::new(Point::ORIGIN, Size::new(0, 5));
        assert!(!r.contains(Point::ORIGIN));
    }

    #[test]
    fn negative_origin_hit_test() {
        let r = PaneRect::new(Point::new(-4, -4), Size::new(6, 6));
        assert!(r.contains(Point::new(-4, 0)));
        assert!(r.contains(Point::new(1, 1)));
        assert!(!r.contains(Point::new(2, 1)));
    }

    #[test]
    fn center_rounds_toward_origin() {
        let r = PaneRect::new(Point::new(10, 10), Size::new(5, 4));
        assert_eq!(r.center(), Point::new(12, 12));
        assert_eq!(r.moved(Point::new(-10, 1)).center(), Point::new(2, 13));
    }

    #[test]
    fn rect_near_i32_max_keeps_its_extent() {
        let r = PaneRect::new(Point::new(i32::MAX - 3, 0), Size::new(10, 10));
        assert!(r.contains(Point::new(i32::MAX - 3, 0)));
        assert!(r.contains(Point::new(i32::MAX, 9)));
        assert!(!r.contains(Point::new(i32::MAX - 4, 0)));
        assert!(!r.contains(Point::new(1, 1)));
        assert_eq!(r.center(), Point::new(i32::MAX, 5));
    }
}
