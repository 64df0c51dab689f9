mod best_record;
mod guesses;
mod hint;
mod input_field;
mod logs;
mod status;
mod victory;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{game::Status, ui::app::App};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Min(8),    // Screen body
                Constraint::Length(3), // Input
                Constraint::Length(7), // Logs
            ])
            .split(f.area());

        self.draw_status_bar(f, layout[0]);

        match self.game.status() {
            Status::Idle => self.draw_best_record(f, layout[1]),
            Status::Playing => {
                let body = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(4), Constraint::Min(4)])
                    .split(layout[1]);

                self.draw_hint(f, body[0]);
                self.draw_guesses(f, body[1]);
            }
            Status::Won => self.draw_victory(f, layout[1]),
        }

        self.draw_input(f, layout[2]);
        self.draw_logs(f, layout[3]);
    }
}
