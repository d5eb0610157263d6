//! UiFrame: a thin wrapper around `ratatui::Frame` that clips compositing to
//! the visible area.
//!
//! The root pane may be larger than the terminal, or the terminal may shrink
//! between frames. Writing outside the frame buffer would panic, so every
//! cell copied onto the display goes through `UiFrame`, which drops cells
//! that land outside the visible area.
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::geometry::Point;
use crate::surface::Surface;

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Copy every cell of `surface` onto the frame with the surface origin
    /// at `origin`, clipped to the visible area.
    pub fn blit_surface(&mut self, surface: &Surface, origin: Point) {
        let src = surface.buffer();
        let frame_x0 = i32::from(self.area.x);
        let frame_y0 = i32::from(self.area.y);
        let frame_x1 = frame_x0 + i32::from(self.area.width);
        let frame_y1 = frame_y0 + i32::from(self.area.height);
        let size = surface.size();
        for sy in 0..size.height {
            let dy = origin.y.saturating_add(i32::from(sy));
            if dy < frame_y0 || dy >= frame_y1 {
                continue;
            }
            for sx in 0..size.width {
                let dx = origin.x.saturating_add(i32::from(sx));
                if dx < frame_x0 || dx >= frame_x1 {
                    continue;
                }
                if let (Some(src_cell), Some(dst_cell)) = (
                    src.cell((sx, sy)),
                    self.buffer.cell_mut((dx as u16, dy as u16)),
                ) {
                    *dst_cell = src_cell.clone();
                }
            }
        }
    }
}
