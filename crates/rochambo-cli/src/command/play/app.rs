use crossterm::event::Event;
use ratatui::Frame;
use rochambo_engine::GameSession;

use crate::{command::play::screen::RoundScreen, tui::App};

#[derive(Debug)]
pub struct PlayApp {
    screen: RoundScreen,
}

impl PlayApp {
    pub fn new(session: GameSession) -> Self {
        Self {
            screen: RoundScreen::new(session),
        }
    }
}

impl App for PlayApp {
    fn should_exit(&self) -> bool {
        self.screen.is_exiting()
    }

    fn handle_event(&mut self, event: Event) {
        self.screen.handle_event(&event);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }
}
