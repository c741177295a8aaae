use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Paragraph, Widget},
};
use rochambo_engine::PROMPT_TEXT;

use crate::ui::widgets::style;

/// Modal text prompt asking for the player's choice.
#[derive(Debug)]
pub struct PromptBox<'a> {
    input: &'a str,
}

impl<'a> PromptBox<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    pub fn width(&self) -> u16 {
        44
    }

    pub fn height(&self) -> u16 {
        6
    }
}

impl Widget for PromptBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PromptBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Clear.render(area, buf);

        let lines = vec![
            Line::from(PROMPT_TEXT),
            Line::raw(""),
            Line::from(format!("> {}_", self.input)),
        ];
        let block = Block::bordered()
            .title(Line::from("YOUR CHOICE").centered())
            .padding(Padding::symmetric(1, 0))
            .border_style(style::PROMPT_BORDER)
            .style(style::DEFAULT);
        Paragraph::new(Text::from(lines)).block(block).render(area, buf);
    }
}
