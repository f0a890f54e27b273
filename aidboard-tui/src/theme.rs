//! Style helpers for the dashboard.
//!
//! A small fixed palette: cyan for focus and highlights, green/blue/
//! yellow/red for the status badge tones, steel gray for secondary text.

use aidboard_core::BadgeTone;
use ratatui::style::{Color, Modifier, Style};

pub fn accent() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn text() -> Style {
    Style::default().fg(Color::White)
}

pub fn warning() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn positive() -> Style {
    Style::default().fg(Color::Green)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Terminal color for a status badge tone.
pub fn badge_color(tone: BadgeTone) -> Color {
    match tone {
        BadgeTone::Green => Color::Green,
        BadgeTone::Blue => Color::Blue,
        BadgeTone::Yellow => Color::Yellow,
        BadgeTone::Gray => Color::DarkGray,
        BadgeTone::Red => Color::Red,
    }
}

/// Badge style: tone color, bold, like the web UI's pill badges.
pub fn badge_style(tone: BadgeTone) -> Style {
    Style::default()
        .fg(badge_color(tone))
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_colors_follow_the_tone_table() {
        assert_eq!(badge_color(BadgeTone::Green), Color::Green);
        assert_eq!(badge_color(BadgeTone::Blue), Color::Blue);
        assert_eq!(badge_color(BadgeTone::Yellow), Color::Yellow);
        assert_eq!(badge_color(BadgeTone::Gray), Color::DarkGray);
        assert_eq!(badge_color(BadgeTone::Red), Color::Red);
    }

    #[test]
    fn active_border_is_highlighted() {
        assert_eq!(panel_border(true), accent());
        assert_eq!(panel_border(false), muted());
    }
}
