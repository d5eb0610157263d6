//! Cell-grid drawing surface backing every pane.
//!
//! A `Surface` is a `ratatui` buffer anchored at the origin. One terminal
//! cell plays the role of a pixel: `fill` paints the cell background and
//! `blit` copies cells from another surface at a signed offset, clipping
//! anything that falls outside the destination.

use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::geometry::{PaneRect, Point, Size};

/// Creation flags for a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceFlags {
    /// Blank cells with a `Color::Reset` background are see-through when
    /// this surface is blitted with [`Blend::Normal`].
    pub transparent: bool,
}

impl SurfaceFlags {
    pub const OPAQUE: SurfaceFlags = SurfaceFlags { transparent: false };
    pub const TRANSPARENT: SurfaceFlags = SurfaceFlags { transparent: true };
}

/// How source cells are combined with the destination during a blit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Blend {
    /// Copy cells, skipping see-through cells of transparent sources.
    #[default]
    Normal,
    /// Copy every cell regardless of transparency.
    Replace,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Surface {
    buffer: Buffer,
    flags: SurfaceFlags,
}

impl Surface {
    pub fn new(size: Size, flags: SurfaceFlags) -> Self {
        let mut surface = Self {
            buffer: Buffer::empty(Rect::new(0, 0, size.width, size.height)),
            flags,
        };
        if flags.transparent {
            surface.fill(Color::Reset);
        }
        surface
    }

    pub fn size(&self) -> Size {
        Size::new(self.buffer.area.width, self.buffer.area.height)
    }

    /// Rectangle covering the whole surface, anchored at the origin.
    pub fn rect(&self) -> PaneRect {
        PaneRect::new(Point::ORIGIN, self.size())
    }

    pub fn flags(&self) -> SurfaceFlags {
        self.flags
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    /// Paint every cell with a blank symbol over `color`.
    pub fn fill(&mut self, color: Color) {
        for cell in self.buffer.content.iter_mut() {
            cell.reset();
            cell.set_bg(color);
        }
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.buffer.cell((x, y))
    }

    /// Write a single cell. Out-of-range coordinates are ignored.
    pub fn set_cell(&mut self, x: u16, y: u16, symbol: &str, color: Color) {
        if let Some(cell) = self.buffer.cell_mut((x, y)) {
            cell.set_symbol(symbol);
            cell.set_bg(color);
        }
    }

    /// Write `text` left to right starting at `(x, y)` in `fg`, keeping the
    /// background already painted. Characters past the right edge are
    /// dropped.
    pub fn print(&mut self, x: u16, y: u16, text: &str, fg: Color) {
        let mut column = x;
        for ch in text.chars() {
            let Some(cell) = self.buffer.cell_mut((column, y)) else {
                break;
            };
            cell.set_char(ch);
            cell.set_fg(fg);
            column = column.saturating_add(1);
        }
    }

    /// Background color of the cell at `(x, y)`.
    pub fn color_at(&self, x: u16, y: u16) -> Option<Color> {
        self.cell(x, y).map(|cell| cell.bg)
    }

    /// Composite `src` onto this surface with its origin at `offset`.
    pub fn blit(&mut self, src: &Surface, offset: Point, blend: Blend) {
        let dst_w = i32::from(self.buffer.area.width);
        let dst_h = i32::from(self.buffer.area.height);
        let keyed = blend == Blend::Normal && src.flags.transparent;
        let src_size = src.size();
        for sy in 0..src_size.height {
            let dy = offset.y.saturating_add(i32::from(sy));
            if dy < 0 || dy >= dst_h {
                continue;
            }
            for sx in 0..src_size.width {
                let dx = offset.x.saturating_add(i32::from(sx));
                if dx < 0 || dx >= dst_w {
                    continue;
                }
                let Some(src_cell) = src.buffer.cell((sx, sy)) else {
                    continue;
                };
                if keyed && is_see_through(src_cell) {
                    continue;
                }
                if let Some(dst_cell) = self.buffer.cell_mut((dx as u16, dy as u16)) {
                    *dst_cell = src_cell.clone();
                }
            }
        }
    }
}

fn is_see_through(cell: &Cell) -> bool {
    cell.bg == Color::Reset && cell.symbol() == " "
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_paints_every_cell() {
        let mut s = Surface::new(Size::new(3, 2), SurfaceFlags::OPAQUE);
        s.fill(Color::Blue);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(s.color_at(x, y), Some(Color::Blue));
            }
        }
    }

    #[test]
    fn blit_clips_negative_offsets() {
        let mut dst = Surface::new(Size::new(4, 4), SurfaceFlags::OPAQUE);
        dst.fill(Color::Black);
        let mut src = Surface::new(Size::new(3, 3), SurfaceFlags::OPAQUE);
        src.fill(Color::Red);
        dst.blit(&src, Point::new(-2, -2), Blend::Normal);
        assert_eq!(dst.color_at(0, 0), Some(Color::Red));
        assert_eq!(dst.color_at(1, 0), Some(Color::Black));
        assert_eq!(dst.color_at(0, 1), Some(Color::Black));
    }

    #[test]
    fn blit_past_far_edge_is_clipped() {
        let mut dst = Surface::new(Size::new(4, 4), SurfaceFlags::OPAQUE);
        dst.fill(Color::Black);
        let mut src = Surface::new(Size::new(3, 3), SurfaceFlags::OPAQUE);
        src.fill(Color::Red);
        dst.blit(&src, Point::new(3, 3), Blend::Normal);
        assert_eq!(dst.color_at(3, 3), Some(Color::Red));
        assert_eq!(dst.color_at(2, 3), Some(Color::Black));
    }

    #[test]
    fn transparent_cells_are_skipped_unless_replacing() {
        let mut dst = Surface::new(Size::new(2, 1), SurfaceFlags::OPAQUE);
        dst.fill(Color::Green);
        let mut src = Surface::new(Size::new(2, 1), SurfaceFlags::TRANSPARENT);
        src.set_cell(1, 0, " ", Color::Yellow);

        dst.blit(&src, Point::ORIGIN, Blend::Normal);
        assert_eq!(dst.color_at(0, 0), Some(Color::Green));
        assert_eq!(dst.color_at(1, 0), Some(Color::Yellow));

        dst.blit(&src, Point::ORIGIN, Blend::Replace);
        assert_eq!(dst.color_at(0, 0), Some(Color::Reset));
    }

    #[test]
    fn print_keeps_background_and_clips() {
        let mut s = Surface::new(Size::new(3, 1), SurfaceFlags::OPAQUE);
        s.fill(Color::Blue);
        s.print(1, 0, "abc", Color::White);
        assert_eq!(s.cell(1, 0).map(|c| c.symbol()), Some("a"));
        assert_eq!(s.cell(2, 0).map(|c| c.symbol()), Some("b"));
        assert_eq!(s.color_at(1, 0), Some(Color::Blue));
        assert_eq!(s.cell(1, 0).map(|c| c.fg), Some(Color::White));
    }

    #[test]
    fn opaque_reset_cells_still_copy() {
        let mut dst = Surface::new(Size::new(1, 1), SurfaceFlags::OPAQUE);
        dst.fill(Color::Green);
        let mut src = Surface::new(Size::new(1, 1), SurfaceFlags::OPAQUE);
        src.fill(Color::Reset);
        dst.blit(&src, Point::ORIGIN, Blend::Normal);
        assert_eq!(dst.color_at(0, 0), Some(Color::Reset));
    }
}
