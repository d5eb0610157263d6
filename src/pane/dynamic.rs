//! Draggable panes.
//!
//! A dynamic pane is a transparent container with two fixed children: a
//! ribbon strip along the top that acts as the drag handle, and a content
//! pane filling the rest. Pressing the ribbon raises the pane and sticks it
//! to the pointer; releasing drops it, snapping it back to the middle of
//! its parent if its center ended up outside the parent.

use ratatui::style::Color;

use crate::drivers::{InputSnapshot, MouseButton};
use crate::error::PaneError;
use crate::geometry::{Point, Size};
use crate::surface::{Surface, SurfaceFlags};
use crate::theme;

use super::{DragState, PaneConfig, PaneEvent, PaneId, PaneTree};

/// Ids of the three panes making up a dynamic pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DynamicPane {
    pub pane: PaneId,
    pub ribbon: PaneId,
    pub content: PaneId,
}

#[derive(Debug, Clone)]
pub struct DynamicPaneConfig {
    size: Size,
    position: Point,
    ribbon_height: u16,
    ribbon_color: Color,
    blanking_color: Color,
    background_image: Option<Surface>,
    content_flags: SurfaceFlags,
    ribbon_flags: SurfaceFlags,
}

impl DynamicPaneConfig {
    pub fn new(size: impl Into<Size>, ribbon_height: u16) -> Self {
        Self {
            size: size.into(),
            position: Point::ORIGIN,
            ribbon_height,
            ribbon_color: theme::ribbon(),
            blanking_color: theme::blanking(),
            background_image: None,
            content_flags: SurfaceFlags::OPAQUE,
            ribbon_flags: SurfaceFlags::OPAQUE,
        }
    }

    pub fn at(mut self, position: impl Into<Point>) -> Self {
        self.position = position.into();
        self
    }

    pub fn ribbon_color(mut self, color: Color) -> Self {
        self.ribbon_color = color;
        self
    }

    /// Blanking color of the content pane.
    pub fn blanking(mut self, color: Color) -> Self {
        self.blanking_color = color;
        self
    }

    /// Background image of the content pane.
    pub fn background(mut self, image: Surface) -> Self {
        self.background_image = Some(image);
        self
    }

    pub fn content_flags(mut self, flags: SurfaceFlags) -> Self {
        self.content_flags = flags;
        self
    }

    pub fn ribbon_flags(mut self, flags: SurfaceFlags) -> Self {
        self.ribbon_flags = flags;
        self
    }

    fn validate(&self) -> Result<(), PaneError> {
        if self.ribbon_height == 0 || self.ribbon_height >= self.size.height {
            return Err(PaneError::Configuration(format!(
                "ribbon height {} must be between 1 and the pane height {} (exclusive)",
                self.ribbon_height, self.size.height
            )));
        }
        Ok(())
    }
}

impl PaneTree {
    /// Create a draggable pane as the frontmost child of `parent`.
    pub fn add_dynamic(
        &mut self,
        parent: PaneId,
        config: DynamicPaneConfig,
    ) -> Result<DynamicPane, PaneError> {
        config.validate()?;
        let DynamicPaneConfig {
            size,
            position,
            ribbon_height,
            ribbon_color,
            blanking_color,
            background_image,
            content_flags,
            ribbon_flags,
        } = config;

        let pane = self.add_pane(
            parent,
            PaneConfig::new(size)
                .at(position)
                .blanking(Color::Reset)
                .flags(SurfaceFlags::TRANSPARENT),
        )?;
        self.pane_mut(pane).drag = Some(DragState::default());

        let ribbon = self.add_pane(
            pane,
            PaneConfig::new((size.width, ribbon_height))
                .blanking(ribbon_color)
                .flags(ribbon_flags),
        )?;
        let content = self.add_pane(
            pane,
            PaneConfig::new((size.width, size.height - ribbon_height))
                .at((0, i32::from(ribbon_height)))
                .blanking(blanking_color)
                .maybe_background(background_image)
                .flags(content_flags),
        )?;

        self.on(
            ribbon,
            PaneEvent::Press(MouseButton::Left),
            |tree, ribbon, pos| {
                if let Some(pane) = tree.parent(ribbon) {
                    let grab = pos + tree.position(ribbon);
                    tree.begin_drag(pane, grab);
                }
            },
        );
        self.on(
            ribbon,
            PaneEvent::Release(MouseButton::Left),
            |tree, ribbon, _| {
                if let Some(pane) = tree.parent(ribbon) {
                    tree.end_drag(pane);
                }
            },
        );

        Ok(DynamicPane {
            pane,
            ribbon,
            content,
        })
    }

    /// Whether `id` is a dynamic pane currently stuck to the pointer.
    pub fn is_dragging(&self, id: PaneId) -> bool {
        self.pane(id).drag.is_some_and(|drag| drag.stuck)
    }

    /// Stick a dynamic pane to the pointer, holding it at the pane-local
    /// point `grab`, and raise it above its siblings. Returns `false` for
    /// panes that are not draggable.
    pub fn begin_drag(&mut self, id: PaneId, grab: Point) -> bool {
        let Some(drag) = self.pane_mut(id).drag.as_mut() else {
            return false;
        };
        drag.stuck = true;
        drag.grab = grab;
        tracing::debug!(pane = ?id, x = grab.x, y = grab.y, "drag started");
        self.raise(id);
        true
    }

    /// Drop a dynamic pane. If its center lies outside the parent, it is
    /// recentered within the parent.
    pub fn end_drag(&mut self, id: PaneId) -> bool {
        let Some(drag) = self.pane_mut(id).drag.as_mut() else {
            return false;
        };
        drag.stuck = false;
        let position = self.position(id);
        tracing::debug!(pane = ?id, x = position.x, y = position.y, "drag ended");

        let Some(parent) = self.parent(id) else {
            return true;
        };
        let bounds = self.local_rect(parent);
        let rect = self.rect(id);
        if !bounds.contains(rect.center()) {
            let half = Point::new(i32::from(rect.width) / 2, i32::from(rect.height) / 2);
            let snapped = bounds.center() - half;
            tracing::debug!(pane = ?id, x = snapped.x, y = snapped.y, "snapped back into parent");
            self.set_position(id, snapped);
        }
        true
    }

    /// Apply drag motion for this frame. Runs after routing so presses and
    /// releases seen this frame are already reflected.
    pub fn update(&mut self, input: &InputSnapshot) {
        self.update_pane(self.root(), input);
    }

    fn update_pane(&mut self, id: PaneId, input: &InputSnapshot) {
        if let Some(drag) = self.pane(id).drag
            && drag.stuck
        {
            let pointer = input.pointer - self.screen_position(id);
            let delta = pointer - drag.grab;
            self.pane_mut(id).position += delta;
        }
        let children = self.children(id).to_vec();
        for child in children {
            self.update_pane(child, input);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::ButtonState;

    fn setup() -> (PaneTree, DynamicPane) {
        let mut t = PaneTree::master((40, 20), Color::Black).unwrap();
        let root = t.root();
        let d = t
            .add_dynamic(root, DynamicPaneConfig::new((10, 6), 1).at((10, 5)))
            .unwrap();
        (t, d)
    }

    fn step(t: &mut PaneTree, pointer: (i32, i32), held: bool) {
        let buttons = if held {
            ButtonState::only(MouseButton::Left)
        } else {
            ButtonState::NONE
        };
        let input = InputSnapshot::new(pointer.into(), buttons, true);
        t.route_pointer(&input);
        t.update(&input);
    }

    #[test]
    fn builds_ribbon_and_content() {
        let (t, d) = setup();
        assert_eq!(t.children(d.pane), &[d.ribbon, d.content]);
        assert_eq!(t.rect(d.ribbon), t.local_rect(d.ribbon));
        assert_eq!(t.size(d.ribbon), Size::new(10, 1));
        assert_eq!(t.size(d.content), Size::new(10, 5));
        assert_eq!(t.position(d.content), Point::new(0, 1));
        assert!(t.surface(d.pane).flags().transparent);
    }

    #[test]
    fn ribbon_height_must_leave_room_for_content() {
        let mut t = PaneTree::master((40, 20), Color::Black).unwrap();
        let root = t.root();
        for height in [0, 6, 9] {
            let err = t
                .add_dynamic(root, DynamicPaneConfig::new((10, 6), height))
                .unwrap_err();
            assert!(matches!(err, PaneError::Configuration(_)));
        }
        assert!(t.children(root).is_empty());
    }

    #[test]
    fn press_on_content_does_not_drag() {
        let (mut t, d) = setup();
        step(&mut t, (12, 8), false);
        step(&mut t, (12, 8), true);
        assert!(!t.is_dragging(d.pane));
        step(&mut t, (20, 12), true);
        assert_eq!(t.position(d.pane), Point::new(10, 5));
    }

    #[test]
    fn drag_tracks_pointer_and_release_stops_it() {
        let (mut t, d) = setup();
        step(&mut t, (12, 5), false);
        step(&mut t, (12, 5), true);
        assert!(t.is_dragging(d.pane));
        step(&mut t, (14, 6), true);
        step(&mut t, (17, 9), true);
        assert_eq!(t.position(d.pane), Point::new(15, 9));
        step(&mut t, (17, 9), false);
        assert!(!t.is_dragging(d.pane));
        step(&mut t, (30, 15), false);
        assert_eq!(t.position(d.pane), Point::new(15, 9));
    }

    #[test]
    fn dropping_outside_parent_recenters() {
        let (mut t, d) = setup();
        step(&mut t, (12, 5), false);
        step(&mut t, (12, 5), true);
        step(&mut t, (60, 5), true);
        assert_eq!(t.position(d.pane), Point::new(58, 5));
        step(&mut t, (60, 5), false);
        assert_eq!(t.position(d.pane), Point::new(15, 7));
        assert_eq!(t.rect(d.pane).center(), t.local_rect(t.root()).center());
    }

    #[test]
    fn begin_drag_ignores_plain_panes() {
        let (mut t, d) = setup();
        assert!(!t.begin_drag(d.content, Point::ORIGIN));
        assert!(!t.end_drag(t.root()));
    }

    #[test]
    fn drop_far_past_the_right_edge_recenters() {
        let mut t = PaneTree::master((40, 20), Color::Black).unwrap();
        let root = t.root();
        let d = t
            .add_dynamic(
                root,
                DynamicPaneConfig::new((10, 6), 1).at((i32::MAX - 3, 0)),
            )
            .unwrap();
        step(&mut t, (1, 1), false);
        assert!(t.end_drag(d.pane));
        assert_eq!(t.position(d.pane), Point::new(15, 7));
    }
}
