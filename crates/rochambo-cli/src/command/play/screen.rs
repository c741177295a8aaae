use std::collections::VecDeque;

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    text::Text,
};
use rochambo_engine::{GameSession, RoundRecord};

use crate::ui::widgets::{AlertPopup, PromptBox, SessionPanel, style};

/// What the play screen is currently showing.
///
/// Mirrors the session guard: the guard is `Running` exactly while the
/// prompt is open, so a second start trigger during `Prompting` is a
/// no-op.
#[derive(Debug, derive_more::IsVariant)]
enum Phase {
    /// Waiting for the start trigger.
    Idle,
    /// The choice prompt is open; holds the typed text.
    Prompting { input: String },
    /// Modal notifications waiting to be dismissed, in order.
    Alert { pending: VecDeque<String> },
}

#[derive(Debug)]
pub struct RoundScreen {
    session: GameSession,
    phase: Phase,
    last_round: Option<RoundRecord>,
    is_exiting: bool,
}

impl RoundScreen {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            phase: Phase::Idle,
            last_round: None,
            is_exiting: false,
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    pub fn handle_event(&mut self, event: &Event) {
        if let Some(key) = event.as_key_event() {
            match &self.phase {
                Phase::Idle => self.handle_idle_key(key.code),
                Phase::Prompting { .. } => self.handle_prompt_key(key.code),
                Phase::Alert { .. } => self.handle_alert_key(key.code),
            }
        }
    }

    fn handle_idle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.trigger_round(),
            KeyCode::Char('q') => self.is_exiting = true,
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, code: KeyCode) {
        let Phase::Prompting { input } = &mut self.phase else {
            return;
        };
        match code {
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Enter => {
                let raw = std::mem::take(input);
                self.resolve_round(&raw);
            }
            KeyCode::Esc => {
                self.session.abort_round();
                self.phase = Phase::Idle;
            }
            _ => {}
        }
    }

    fn handle_alert_key(&mut self, code: KeyCode) {
        let Phase::Alert { pending } = &mut self.phase else {
            return;
        };
        match code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                pending.pop_front();
                if pending.is_empty() {
                    self.phase = Phase::Idle;
                }
            }
            _ => {}
        }
    }

    /// The start trigger. A no-op unless the session guard accepts it.
    fn trigger_round(&mut self) {
        if self.session.begin_round().is_ok() {
            self.phase = Phase::Prompting {
                input: String::new(),
            };
        }
    }

    fn resolve_round(&mut self, raw: &str) {
        let Ok(record) = self.session.resolve_round(raw) else {
            return;
        };

        // Invalid-input notice first, then the verdict.
        let mut pending = VecDeque::new();
        if let Some(notice) = record.fallback_notice() {
            pending.push_back(notice);
        }
        pending.push_back(record.message.clone());

        self.last_round = Some(record);
        self.phase = Phase::Alert { pending };
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let help_text = match &self.phase {
            Phase::Idle => "Controls: Enter (Play) | Q (Quit)",
            Phase::Prompting { .. } => "Controls: Type your choice | Enter (Submit) | Esc (Cancel)",
            Phase::Alert { .. } => "Controls: Enter (Dismiss)",
        };
        let help_text = Text::from(help_text).style(style::HELP).centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
                .areas::<2>(frame.area());

        let panel = SessionPanel::new(&self.session).last_round(self.last_round.as_ref());
        let panel_area = centered(main_area, panel.width(), panel.height());
        frame.render_widget(&panel, panel_area);
        frame.render_widget(help_text, help_area);

        match &self.phase {
            Phase::Idle => {}
            Phase::Prompting { input } => {
                let prompt = PromptBox::new(input);
                let area = centered(main_area, prompt.width(), prompt.height());
                frame.render_widget(&prompt, area);
            }
            Phase::Alert { pending } => {
                if let Some(message) = pending.front() {
                    let popup = AlertPopup::new(message);
                    let area = centered(main_area, popup.width(), popup.height());
                    frame.render_widget(&popup, area);
                }
            }
        }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas::<1>(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas::<1>(area);
    area
}
