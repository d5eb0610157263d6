//! The pane tree.
//!
//! A `PaneTree` owns every pane in an arena addressed by [`PaneId`]. Each
//! pane keeps an ordered list of child ids (last = frontmost) and a
//! non-owning id of its parent, which is used for coordinate translation
//! and front-promotion. Panes are created attached to a parent and live as
//! long as the tree; there is no re-parenting.
//!
//! A frame runs three depth-first passes over the tree:
//! 1. [`PaneTree::route_pointer`] hit-tests and fires handlers,
//! 2. [`PaneTree::update`] applies drag motion,
//! 3. [`PaneTree::blank`] then [`PaneTree::draw`] composite every pane onto
//!    its parent, leaving the finished frame in the root surface.

mod callbacks;
mod dynamic;
mod router;

pub use callbacks::{MoveHandler, PaneEvent, PointHandler};
pub use dynamic::{DynamicPane, DynamicPaneConfig};

use ratatui::style::Color;

use self::callbacks::Callbacks;
use crate::drivers::ButtonState;
use crate::error::PaneError;
use crate::geometry::{PaneRect, Point, Size};
use crate::surface::{Blend, Surface, SurfaceFlags};
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PaneId(usize);

/// Construction-time settings for a pane.
#[derive(Debug, Clone)]
pub struct PaneConfig {
    size: Size,
    position: Point,
    blanking_color: Color,
    background_image: Option<Surface>,
    flags: SurfaceFlags,
}

impl PaneConfig {
    pub fn new(size: impl Into<Size>) -> Self {
        Self {
            size: size.into(),
            position: Point::ORIGIN,
            blanking_color: theme::blanking(),
            background_image: None,
            flags: SurfaceFlags::OPAQUE,
        }
    }

    /// Position relative to the parent's origin.
    pub fn at(mut self, position: impl Into<Point>) -> Self {
        self.position = position.into();
        self
    }

    pub fn blanking(mut self, color: Color) -> Self {
        self.blanking_color = color;
        self
    }

    pub fn background(mut self, image: Surface) -> Self {
        self.background_image = Some(image);
        self
    }

    pub fn maybe_background(mut self, image: Option<Surface>) -> Self {
        self.background_image = image;
        self
    }

    pub fn flags(mut self, flags: SurfaceFlags) -> Self {
        self.flags = flags;
        self
    }

    fn validate(&self) -> Result<(), PaneError> {
        if self.size.is_empty() {
            return Err(PaneError::Configuration(format!(
                "pane size must be non-zero, got {}x{}",
                self.size.width, self.size.height
            )));
        }
        Ok(())
    }
}

/// Interaction state the router carries from one frame to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerState {
    last_buttons: ButtonState,
    last_in_frame: bool,
    last_position: Point,
}

impl PointerState {
    /// Buttons pressed since their last release was delivered.
    pub fn last_buttons(&self) -> ButtonState {
        self.last_buttons
    }

    /// Whether the pane owned the pointer on the last routed frame.
    pub fn last_in_frame(&self) -> bool {
        self.last_in_frame
    }

    /// Pointer position in pane-local space on the last routed frame.
    pub fn last_position(&self) -> Point {
        self.last_position
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct DragState {
    stuck: bool,
    /// Pane-local point the pointer grabbed the pane at.
    grab: Point,
}

#[derive(Debug)]
pub struct Pane {
    position: Point,
    blanking_color: Color,
    background_image: Option<Surface>,
    surface: Surface,
    parent: Option<PaneId>,
    children: Vec<PaneId>,
    callbacks: Callbacks,
    pointer: PointerState,
    drag: Option<DragState>,
}

impl Pane {
    fn new(config: PaneConfig, parent: Option<PaneId>, pointer_hint: Point) -> Self {
        Self {
            position: config.position,
            blanking_color: config.blanking_color,
            background_image: config.background_image,
            surface: Surface::new(config.size, config.flags),
            parent,
            children: Vec::new(),
            callbacks: Callbacks::default(),
            pointer: PointerState {
                last_position: pointer_hint,
                ..PointerState::default()
            },
            drag: None,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.surface.size()
    }

    pub fn parent(&self) -> Option<PaneId> {
        self.parent
    }

    /// Child ids, back to front.
    pub fn children(&self) -> &[PaneId] {
        &self.children
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn blanking_color(&self) -> Color {
        self.blanking_color
    }

    pub fn background_image(&self) -> Option<&Surface> {
        self.background_image.as_ref()
    }

    pub fn pointer_state(&self) -> PointerState {
        self.pointer
    }

    /// Rectangle at the local origin with this pane's size.
    pub fn local_rect(&self) -> PaneRect {
        self.surface.rect()
    }

    /// Local rectangle translated into the parent's space.
    pub fn rect(&self) -> PaneRect {
        self.local_rect().moved(self.position)
    }
}

/// Arena of panes rooted at [`PaneTree::root`].
///
/// Methods taking a [`PaneId`] panic when handed an id minted by a different
/// tree. [`PaneTree::get`] is the checked lookup, and [`PaneTree::add_pane`]
/// reports an unknown parent as [`PaneError::UnknownPane`].
#[derive(Debug)]
pub struct PaneTree {
    panes: Vec<Pane>,
    /// Screen-space pointer from the most recent routed frame.
    last_pointer: Point,
}

impl PaneTree {
    pub fn new(root: PaneConfig) -> Result<Self, PaneError> {
        root.validate()?;
        let hint = Point::ORIGIN - root.position;
        Ok(Self {
            panes: vec![Pane::new(root, None, hint)],
            last_pointer: Point::ORIGIN,
        })
    }

    /// Root pane at the display origin, sized to the display.
    pub fn master(size: impl Into<Size>, blanking_color: Color) -> Result<Self, PaneError> {
        Self::new(PaneConfig::new(size).blanking(blanking_color))
    }

    pub fn root(&self) -> PaneId {
        PaneId(0)
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn get(&self, id: PaneId) -> Option<&Pane> {
        self.panes.get(id.0)
    }

    /// # Panics
    ///
    /// Panics if `id` was minted by a different tree.
    pub fn pane(&self, id: PaneId) -> &Pane {
        &self.panes[id.0]
    }

    fn pane_mut(&mut self, id: PaneId) -> &mut Pane {
        &mut self.panes[id.0]
    }

    /// Create a pane and register it as the frontmost child of `parent`.
    pub fn add_pane(&mut self, parent: PaneId, config: PaneConfig) -> Result<PaneId, PaneError> {
        if self.get(parent).is_none() {
            return Err(PaneError::UnknownPane(parent));
        }
        config.validate()?;
        let id = PaneId(self.panes.len());
        let hint = self.last_pointer - self.screen_position(parent) - config.position;
        self.panes.push(Pane::new(config, None, hint));
        self.attach(parent, id);
        tracing::debug!(pane = ?id, parent = ?parent, "created pane");
        Ok(id)
    }

    fn attach(&mut self, parent: PaneId, child: PaneId) {
        self.pane_mut(child).parent = Some(parent);
        self.pane_mut(parent).children.push(child);
    }

    pub fn parent(&self, id: PaneId) -> Option<PaneId> {
        self.pane(id).parent
    }

    pub fn children(&self, id: PaneId) -> &[PaneId] {
        &self.pane(id).children
    }

    pub fn position(&self, id: PaneId) -> Point {
        self.pane(id).position
    }

    pub fn set_position(&mut self, id: PaneId, position: impl Into<Point>) {
        self.pane_mut(id).position = position.into();
    }

    pub fn size(&self, id: PaneId) -> Size {
        self.pane(id).size()
    }

    pub fn surface(&self, id: PaneId) -> &Surface {
        &self.pane(id).surface
    }

    /// Drawing surface of a pane, for painting between `blank` and `draw`.
    pub fn surface_mut(&mut self, id: PaneId) -> &mut Surface {
        &mut self.pane_mut(id).surface
    }

    pub fn set_blanking_color(&mut self, id: PaneId, color: Color) {
        self.pane_mut(id).blanking_color = color;
    }

    pub fn set_background_image(&mut self, id: PaneId, image: Option<Surface>) {
        self.pane_mut(id).background_image = image;
    }

    pub fn pointer_state(&self, id: PaneId) -> PointerState {
        self.pane(id).pointer
    }

    /// Whether the pane owned the pointer on the last routed frame.
    pub fn is_hovered(&self, id: PaneId) -> bool {
        self.pane(id).pointer.last_in_frame
    }

    pub fn local_rect(&self, id: PaneId) -> PaneRect {
        self.pane(id).local_rect()
    }

    pub fn rect(&self, id: PaneId) -> PaneRect {
        self.pane(id).rect()
    }

    /// Sum of this pane's position and every ancestor's position.
    pub fn screen_position(&self, id: PaneId) -> Point {
        let mut position = Point::ORIGIN;
        let mut current = Some(id);
        while let Some(pane_id) = current {
            let pane = self.pane(pane_id);
            position += pane.position;
            current = pane.parent;
        }
        position
    }

    pub fn screen_rect(&self, id: PaneId) -> PaneRect {
        self.local_rect(id).moved(self.screen_position(id))
    }

    /// Replace the handler for `event` on pane `id`.
    pub fn on<F>(&mut self, id: PaneId, event: PaneEvent, handler: F)
    where
        F: FnMut(&mut PaneTree, PaneId, Point) + 'static,
    {
        self.pane_mut(id).callbacks.set(event, Box::new(handler));
    }

    /// Replace the pointer-motion handler on pane `id`.
    pub fn on_mouse_move<F>(&mut self, id: PaneId, handler: F)
    where
        F: FnMut(&mut PaneTree, PaneId, Point, Point) + 'static,
    {
        self.pane_mut(id).callbacks.set_mouse_move(Box::new(handler));
    }

    /// Make `child` the frontmost child of `parent`. Does nothing when
    /// `child` is not a direct child of `parent`.
    pub fn move_to_front(&mut self, parent: PaneId, child: PaneId) -> bool {
        let children = &mut self.pane_mut(parent).children;
        let Some(index) = children.iter().position(|id| *id == child) else {
            return false;
        };
        children.remove(index);
        children.push(child);
        tracing::debug!(pane = ?child, parent = ?parent, "moved pane to front");
        true
    }

    /// Move a pane to the front of its own parent's children.
    pub fn raise(&mut self, id: PaneId) -> bool {
        match self.parent(id) {
            Some(parent) => self.move_to_front(parent, id),
            None => false,
        }
    }

    /// Reset every surface in the tree to its blanking color and background.
    pub fn blank(&mut self) {
        self.blank_pane(self.root());
    }

    pub fn blank_pane(&mut self, id: PaneId) {
        let pane = self.pane_mut(id);
        pane.surface.fill(pane.blanking_color);
        if let Some(image) = &pane.background_image {
            pane.surface.blit(image, Point::ORIGIN, Blend::Normal);
        }
        let children = pane.children.clone();
        for child in children {
            self.blank_pane(child);
        }
    }

    /// Composite the whole tree into the root surface.
    pub fn draw(&mut self) {
        self.draw_pane(self.root(), Blend::Normal);
    }

    /// Draw every child of `id` back to front, then composite `id` onto its
    /// parent with `blend`. The root has no parent and stays in place for
    /// presentation.
    pub fn draw_pane(&mut self, id: PaneId, blend: Blend) {
        let children = self.pane(id).children.clone();
        for child in children {
            self.draw_pane(child, Blend::Normal);
        }
        let Some(parent) = self.parent(id) else {
            return;
        };
        let surface = std::mem::take(&mut self.pane_mut(id).surface);
        let position = self.position(id);
        self.pane_mut(parent).surface.blit(&surface, position, blend);
        self.pane_mut(id).surface = surface;
    }

    /// The root pane's surface holding the last composited frame.
    pub fn root_surface(&self) -> &Surface {
        self.surface(self.root())
    }
}
