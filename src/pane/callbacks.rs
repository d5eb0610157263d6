//! Per-pane handler table.
//!
//! Every pane owns its own set of handlers, one slot per [`PaneEvent`] plus a
//! slot for pointer motion. Slots start out as no-ops, so dispatch never has
//! to check for presence.

use std::fmt;

use crate::drivers::mouse::MouseButton;
use crate::geometry::Point;

use super::{PaneId, PaneTree};

/// Handler for events carrying the pane-local pointer position.
pub type PointHandler = Box<dyn FnMut(&mut PaneTree, PaneId, Point)>;

/// Handler for pointer motion: `(previous, current)` in pane-local space.
pub type MoveHandler = Box<dyn FnMut(&mut PaneTree, PaneId, Point, Point)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneEvent {
    /// Button went down while the pointer was over the pane.
    Press(MouseButton),
    /// Button came up after having been pressed; fires even if the pointer
    /// has since left the pane.
    Release(MouseButton),
    /// Button is down while the pointer is over the pane, once per frame.
    Held(MouseButton),
    Enter,
    Exit,
}

impl PaneEvent {
    pub(crate) const COUNT: usize = 3 * MouseButton::COUNT + 2;

    fn slot(self) -> usize {
        match self {
            PaneEvent::Press(button) => button.index(),
            PaneEvent::Release(button) => MouseButton::COUNT + button.index(),
            PaneEvent::Held(button) => 2 * MouseButton::COUNT + button.index(),
            PaneEvent::Enter => 3 * MouseButton::COUNT,
            PaneEvent::Exit => 3 * MouseButton::COUNT + 1,
        }
    }
}

fn noop_point() -> PointHandler {
    Box::new(|_, _, _| {})
}

fn noop_move() -> MoveHandler {
    Box::new(|_, _, _, _| {})
}

/// A handler plus a counter bumped on every assignment. The router takes a
/// handler out while it runs and only puts it back if the slot was not
/// reassigned in the meantime.
struct Slot<H> {
    handler: H,
    generation: u64,
}

impl<H> Slot<H> {
    fn new(handler: H) -> Self {
        Self {
            handler,
            generation: 0,
        }
    }

    fn set(&mut self, handler: H) {
        self.handler = handler;
        self.generation = self.generation.wrapping_add(1);
    }

    fn take(&mut self, placeholder: H) -> (H, u64) {
        (
            std::mem::replace(&mut self.handler, placeholder),
            self.generation,
        )
    }

    fn restore(&mut self, handler: H, generation: u64) {
        if self.generation == generation {
            self.handler = handler;
        }
    }
}

pub struct Callbacks {
    points: [Slot<PointHandler>; PaneEvent::COUNT],
    mouse_move: Slot<MoveHandler>,
}

impl Default for Callbacks {
    fn default() -> Self {
        Self {
            points: std::array::from_fn(|_| Slot::new(noop_point())),
            mouse_move: Slot::new(noop_move()),
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}

impl Callbacks {
    pub(crate) fn set(&mut self, event: PaneEvent, handler: PointHandler) {
        self.points[event.slot()].set(handler);
    }

    pub(crate) fn set_mouse_move(&mut self, handler: MoveHandler) {
        self.mouse_move.set(handler);
    }

    pub(crate) fn take(&mut self, event: PaneEvent) -> (PointHandler, u64) {
        self.points[event.slot()].take(noop_point())
    }

    pub(crate) fn restore(&mut self, event: PaneEvent, handler: PointHandler, generation: u64) {
        self.points[event.slot()].restore(handler, generation);
    }

    pub(crate) fn take_mouse_move(&mut self) -> (MoveHandler, u64) {
        self.mouse_move.take(noop_move())
    }

    pub(crate) fn restore_mouse_move(&mut self, handler: MoveHandler, generation: u64) {
        self.mouse_move.restore(handler, generation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_slots_are_distinct() {
        let mut seen = std::collections::BTreeSet::new();
        for button in MouseButton::ALL {
            assert!(seen.insert(PaneEvent::Press(button).slot()));
            assert!(seen.insert(PaneEvent::Release(button).slot()));
            assert!(seen.insert(PaneEvent::Held(button).slot()));
        }
        assert!(seen.insert(PaneEvent::Enter.slot()));
        assert!(seen.insert(PaneEvent::Exit.slot()));
        assert_eq!(seen.len(), PaneEvent::COUNT);
        assert!(seen.iter().all(|slot| *slot < PaneEvent::COUNT));
    }

    #[test]
    fn restore_skips_reassigned_slot() {
        let mut slot = Slot::new(1u8);
        let (taken, generation) = slot.take(0);
        assert_eq!(taken, 1);
        slot.set(7);
        slot.restore(taken, generation);
        assert_eq!(slot.handler, 7);

        let (taken, generation) = slot.take(0);
        slot.restore(taken, generation);
        assert_eq!(slot.handler, 7);
    }
}
