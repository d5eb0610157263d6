use ratatui::style::Color;

// Default colors for panes. Kept as small helpers so callers and builders
// share one place to change the palette.

pub const RIBBON_RGB: (u8, u8, u8) = (255, 255, 255);
pub const HOVER_RGB: (u8, u8, u8) = (200, 100, 0);

pub fn rgb(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub fn blanking() -> Color {
    Color::Black
}

pub fn ribbon() -> Color {
    rgb(RIBBON_RGB)
}

pub fn hover() -> Color {
    rgb(HOVER_RGB)
}

pub fn dragging() -> Color {
    Color::Blue
}

pub fn desktop() -> Color {
    Color::DarkGray
}
