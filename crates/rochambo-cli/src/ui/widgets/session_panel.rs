use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Text},
    widgets::{Block, Padding, Paragraph, Widget},
};
use rochambo_engine::{GameSession, Outcome, RoundRecord, SessionState};

use crate::ui::widgets::style;

/// Main panel: the session tally and the last round's verdict.
#[derive(Debug)]
pub struct SessionPanel<'a> {
    session: &'a GameSession,
    last_round: Option<&'a RoundRecord>,
}

impl<'a> SessionPanel<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            last_round: None,
        }
    }

    pub fn last_round(self, last_round: Option<&'a RoundRecord>) -> Self {
        Self { last_round, ..self }
    }

    pub fn width(&self) -> u16 {
        60
    }

    pub fn height(&self) -> u16 {
        12
    }
}

impl Widget for SessionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_style = match self.session.state() {
            SessionState::Idle => style::IDLE_BORDER,
            SessionState::Running => style::PROMPT_BORDER,
        };

        let stats = self.session.stats();
        let mut lines = vec![
            Line::from(format!("Rounds played: {}", stats.rounds())),
            Line::from(format!("You won:       {}", stats.player_wins())),
            Line::from(format!("Computer won:  {}", stats.computer_wins())),
            Line::from(format!("Draws:         {}", stats.draws())),
            Line::raw(""),
        ];
        if let Some(record) = self.last_round {
            let verdict_style = match record.outcome {
                Outcome::Draw => style::DRAW,
                Outcome::PlayerWins => style::WIN,
                Outcome::ComputerWins => style::LOSE,
            };
            lines.push(Line::from(format!("Last round: {}", record.outcome)).style(verdict_style));
            lines.push(Line::from(record.message.as_str()));
        } else {
            lines.push(Line::from("No rounds played yet.").style(style::HELP));
        }

        let block = Block::bordered()
            .title(Line::from("ROCHAMBO").centered())
            .padding(Padding::symmetric(2, 1))
            .border_style(border_style)
            .style(style::DEFAULT);
        Paragraph::new(Text::from(lines)).block(block).render(area, buf);
    }
}
