use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Paragraph, Widget, Wrap},
};

use crate::ui::widgets::style;

/// Modal notification that blocks the screen until dismissed.
#[derive(Debug)]
pub struct AlertPopup<'a> {
    message: &'a str,
}

impl<'a> AlertPopup<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    pub fn width(&self) -> u16 {
        52
    }

    pub fn height(&self) -> u16 {
        7
    }
}

impl Widget for AlertPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &AlertPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Clear.render(area, buf);

        let lines = vec![
            Line::from(self.message),
            Line::raw(""),
            Line::from("press Enter to continue").style(style::HELP).centered(),
        ];
        let block = Block::bordered()
            .title(Line::from("NOTICE").centered())
            .padding(Padding::symmetric(1, 0))
            .border_style(style::ALERT_BORDER)
            .style(style::DEFAULT);
        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
