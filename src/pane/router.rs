//! Occlusion-aware pointer routing.
//!
//! Routing walks the tree depth-first, visiting children front to back. A
//! child whose rectangle covers the pointer occludes every sibling behind it
//! and the parent itself, so exactly one pane per frame sees the pointer as
//! "in frame". Edge-triggered events are synthesized by diffing the frame's
//! input snapshot against the state each pane kept from the previous frame.

use crate::drivers::{InputSnapshot, MouseButton};
use crate::geometry::Point;

use super::{PaneEvent, PaneId, PaneTree};

impl PaneTree {
    /// Route one frame of input through the whole tree, starting at the root
    /// with the screen-space pointer.
    pub fn route_pointer(&mut self, input: &InputSnapshot) {
        self.last_pointer = input.pointer;
        self.route_pane(self.root(), input.pointer, false, input);
    }

    /// `upper` is the pointer in the parent's space.
    fn route_pane(&mut self, id: PaneId, upper: Point, mut occluded: bool, input: &InputSnapshot) {
        let local = upper - self.position(id);

        let children = self.children(id).to_vec();
        for child in children.into_iter().rev() {
            self.route_pane(child, local, occluded, input);
            if !occluded && self.rect(child).contains(local) {
                occluded = true;
            }
        }

        let buttons = input.buttons;
        let in_frame = !occluded && input.focused && self.local_rect(id).contains(local);

        // Releases bypass the in-frame test so a drag that ends outside the
        // pane still reaches the pane that saw the press.
        for button in MouseButton::ALL {
            if !buttons[button] && self.pane(id).pointer.last_buttons[button] {
                self.fire(id, PaneEvent::Release(button), local);
                self.pane_mut(id).pointer.last_buttons.set(button, false);
            }
        }

        if in_frame {
            for button in MouseButton::ALL {
                if !buttons[button] {
                    continue;
                }
                self.fire(id, PaneEvent::Held(button), local);
                if !self.pane(id).pointer.last_buttons[button] {
                    self.fire(id, PaneEvent::Press(button), local);
                }
            }
            let previous = self.pane(id).pointer.last_position;
            if local != previous {
                self.fire_mouse_move(id, previous, local);
            }
        }

        // Presses seen out of frame still arm the release.
        for button in MouseButton::ALL {
            if buttons[button] {
                self.pane_mut(id).pointer.last_buttons.set(button, true);
            }
        }

        let was_in_frame = self.pane(id).pointer.last_in_frame;
        if in_frame && !was_in_frame {
            tracing::trace!(pane = ?id, x = local.x, y = local.y, "pointer entered");
            self.fire(id, PaneEvent::Enter, local);
        } else if !in_frame && was_in_frame {
            tracing::trace!(pane = ?id, x = local.x, y = local.y, "pointer exited");
            self.fire(id, PaneEvent::Exit, local);
        }

        let pointer = &mut self.pane_mut(id).pointer;
        pointer.last_in_frame = in_frame;
        pointer.last_position = local;
    }

    fn fire(&mut self, id: PaneId, event: PaneEvent, position: Point) {
        let (mut handler, generation) = self.pane_mut(id).callbacks.take(event);
        handler(self, id, position);
        self.pane_mut(id)
            .callbacks
            .restore(event, handler, generation);
    }

    fn fire_mouse_move(&mut self, id: PaneId, previous: Point, current: Point) {
        let (mut handler, generation) = self.pane_mut(id).callbacks.take_mouse_move();
        handler(self, id, previous, current);
        self.pane_mut(id)
            .callbacks
            .restore_mouse_move(handler, generation);
    }
}
