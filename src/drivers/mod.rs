pub mod console;
pub mod mouse;
pub mod output_driver;

pub use mouse::{ButtonState, MouseButton};
pub use output_driver::OutputDriver;

use crate::error::BackendError;
use crate::geometry::Point;

/// Input sampled once per frame and shared by every pane in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    /// Pointer position in screen space.
    pub pointer: Point,
    pub buttons: ButtonState,
    /// Whether the display currently has input focus.
    pub focused: bool,
}

impl InputSnapshot {
    pub const fn new(pointer: Point, buttons: ButtonState, focused: bool) -> Self {
        Self {
            pointer,
            buttons,
            focused,
        }
    }
}

/// Polled input backend. Queries report the current level state and stay
/// stable until the next `pump`.
pub trait InputDriver {
    /// Drain pending platform events without blocking.
    fn pump(&mut self) -> Result<(), BackendError>;
    fn pointer_position(&mut self) -> Result<Point, BackendError>;
    fn button_state(&mut self) -> Result<ButtonState, BackendError>;
    fn has_focus(&mut self) -> Result<bool, BackendError>;

    fn snapshot(&mut self) -> Result<InputSnapshot, BackendError> {
        Ok(InputSnapshot {
            pointer: self.pointer_position()?,
            buttons: self.button_state()?,
            focused: self.has_focus()?,
        })
    }
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn pump(&mut self) -> Result<(), BackendError> {
        (**self).pump()
    }

    fn pointer_position(&mut self) -> Result<Point, BackendError> {
        (**self).pointer_position()
    }

    fn button_state(&mut self) -> Result<ButtonState, BackendError> {
        (**self).button_state()
    }

    fn has_focus(&mut self) -> Result<bool, BackendError> {
        (**self).has_focus()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy;
    impl InputDriver for Dummy {
        fn pump(&mut self) -> Result<(), BackendError> {
            Ok(())
        }

        fn pointer_position(&mut self) -> Result<Point, BackendError> {
            Ok(Point::new(3, 4))
        }

        fn button_state(&mut self) -> Result<ButtonState, BackendError> {
            Ok(ButtonState::only(MouseButton::Right))
        }

        fn has_focus(&mut self) -> Result<bool, BackendError> {
            Err(BackendError::Render("no display".into()))
        }
    }

    fn pump_and_sample<D: InputDriver>(mut driver: D) -> (Point, ButtonState) {
        driver.pump().unwrap();
        (
            driver.pointer_position().unwrap(),
            driver.button_state().unwrap(),
        )
    }

    #[test]
    fn blanket_impl_for_mut_ref_works() {
        let mut d = Dummy;
        // pass &mut Dummy so the calls go through the blanket impl
        let (pointer, buttons) = pump_and_sample(&mut d);
        assert_eq!(pointer, Point::new(3, 4));
        assert!(buttons[MouseButton::Right]);
    }

    #[test]
    fn snapshot_propagates_backend_failure() {
        let mut d = Dummy;
        assert!(matches!(d.snapshot(), Err(BackendError::Render(_))));
    }
}
