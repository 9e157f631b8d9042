//! Theme system for TUI colors and styles
//!
//! Colors line up with the `snackq ls` output so both surfaces read alike.

use iocraft::prelude::Color;

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Ticket fields
    pub name: Color,
    pub origin: Color,
    pub issue: Color,
    pub wait_time: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub button: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: Color::White,
            origin: Color::Cyan,
            issue: Color::White,
            wait_time: Color::Yellow,

            border: GREY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GREY,
            highlight: Color::Blue,
            button: Color::Green,
            error: Color::Red,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
