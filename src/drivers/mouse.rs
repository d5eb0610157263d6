use std::ops::Index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    pub const COUNT: usize = 3;
    pub const ALL: [MouseButton; MouseButton::COUNT] =
        [MouseButton::Left, MouseButton::Middle, MouseButton::Right];

    pub const fn index(self) -> usize {
        match self {
            MouseButton::Left => 0,
            MouseButton::Middle => 1,
            MouseButton::Right => 2,
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(button: crossterm::event::MouseButton) -> Self {
        match button {
            crossterm::event::MouseButton::Left => MouseButton::Left,
            crossterm::event::MouseButton::Middle => MouseButton::Middle,
            crossterm::event::MouseButton::Right => MouseButton::Right,
        }
    }
}

/// Level-triggered pressed/not-pressed state of the three buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ButtonState([bool; MouseButton::COUNT]);

impl ButtonState {
    pub const NONE: ButtonState = ButtonState([false; MouseButton::COUNT]);

    pub const fn new(left: bool, middle: bool, right: bool) -> Self {
        Self([left, middle, right])
    }

    pub const fn only(button: MouseButton) -> Self {
        let mut state = [false; MouseButton::COUNT];
        state[button.index()] = true;
        Self(state)
    }

    pub const fn is_pressed(&self, button: MouseButton) -> bool {
        self.0[button.index()]
    }

    pub fn set(&mut self, button: MouseButton, pressed: bool) {
        self.0[button.index()] = pressed;
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|pressed| *pressed)
    }
}

impl Index<MouseButton> for ButtonState {
    type Output = bool;

    fn index(&self, button: MouseButton) -> &bool {
        &self.0[button.index()]
    }
}
