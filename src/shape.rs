//! Pre-rendered decorations for panes.
//!
//! Shapes are rasterized by sampling each cell at its center, so a cell is
//! painted when its midpoint falls inside the shape. The returned surfaces
//! are transparent outside the shape and can be used directly as pane
//! background images.

use ratatui::style::Color;

use crate::geometry::Size;
use crate::surface::{Surface, SurfaceFlags};

/// Filled disc inscribed in a `diameter` x `diameter` square.
pub fn circle(diameter: u16, color: Color) -> Surface {
    let mut surface = Surface::new(Size::new(diameter, diameter), SurfaceFlags::TRANSPARENT);
    let radius = f32::from(diameter) / 2.0;
    for y in 0..diameter {
        for x in 0..diameter {
            let dx = f32::from(x) + 0.5 - radius;
            let dy = f32::from(y) + 0.5 - radius;
            if dx * dx + dy * dy <= radius * radius {
                surface.set_cell(x, y, " ", color);
            }
        }
    }
    surface
}

/// Isosceles triangle pointing right, with vertices at the left corners and
/// the middle of the right edge.
pub fn isosceles_triangle(size: Size, color: Color) -> Surface {
    let mut surface = Surface::new(size, SurfaceFlags::TRANSPARENT);
    if size.is_empty() {
        return surface;
    }
    let w = f32::from(size.width);
    let h = f32::from(size.height);
    let half = h / 2.0;
    for y in 0..size.height {
        for x in 0..size.width {
            let px = f32::from(x) + 0.5;
            let py = f32::from(y) + 0.5;
            // Half-height of the triangle shrinks linearly to zero at the tip.
            let reach = half * (1.0 - px / w);
            if (py - half).abs() <= reach {
                surface.set_cell(x, y, " ", color);
            }
        }
    }
    surface
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(surface: &Surface, x: u16, y: u16) -> bool {
        surface.color_at(x, y) != Some(Color::Reset)
    }

    #[test]
    fn circle_fills_center_and_leaves_corners() {
        let c = circle(5, Color::White);
        assert_eq!(c.size(), Size::new(5, 5));
        assert!(c.flags().transparent);
        assert!(painted(&c, 2, 2));
        assert!(painted(&c, 0, 2));
        assert!(!painted(&c, 0, 0));
        assert!(!painted(&c, 4, 4));
    }

    #[test]
    fn zero_circle_is_empty() {
        let c = circle(0, Color::White);
        assert!(c.size().is_empty());
    }

    #[test]
    fn triangle_points_right() {
        let t = isosceles_triangle(Size::new(6, 6), Color::Red);
        // Wide at the left edge.
        assert!(painted(&t, 0, 0));
        assert!(painted(&t, 0, 5));
        // Narrow at the tip.
        assert!(painted(&t, 4, 2));
        assert!(!painted(&t, 4, 0));
        assert!(!painted(&t, 5, 0));
        assert!(!painted(&t, 5, 5));
    }
}
