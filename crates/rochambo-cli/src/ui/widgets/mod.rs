pub use self::{alert_popup::*, prompt_box::*, session_panel::*};

mod alert_popup;
mod prompt_box;
mod session_panel;

mod color {
    use ratatui::style::Color;

    // Common colors as associated constants
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const HELP: Style = fg_bg(color::GRAY, color::BLACK);

    pub const IDLE_BORDER: Style = fg_bg(color::WHITE, color::BLACK);
    pub const PROMPT_BORDER: Style = fg_bg(color::YELLOW, color::BLACK);
    pub const ALERT_BORDER: Style = fg_bg(color::YELLOW, color::BLACK);

    pub const WIN: Style = fg_bg(color::GREEN, color::BLACK);
    pub const LOSE: Style = fg_bg(color::RED, color::BLACK);
    pub const DRAW: Style = fg_bg(color::CYAN, color::BLACK);
}
