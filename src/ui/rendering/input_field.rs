//! Input field rendering with validation status.

use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    game::Status,
    ui::{app::App, handlers::input_status, types::InputStatus},
};

impl App {
    pub(in crate::ui) fn draw_input(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let (border_color, subtitle) = match input_status(self) {
            InputStatus::Incomplete => (Color::Gray, ""),
            InputStatus::Valid => (Color::Green, ""),
            InputStatus::Invalid(msg) => (Color::Red, msg),
        };
        let border_color = if self.input_error { Color::Red } else { border_color };

        let (text, label, help_text) = match self.game.status() {
            Status::Idle => (
                format!("{}▌", self.name_input),
                "Challenger name",
                "Enter = enter the quest | Ctrl+Q = quit",
            ),
            Status::Playing => (
                format!("{}▌", self.guess_input),
                "Guess 1-100",
                "Enter = guess | Ctrl+Q = quit",
            ),
            Status::Won => (
                String::new(),
                "Play again?",
                "Enter = play again | Ctrl+Q = quit",
            ),
        };

        f.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(format!("{} {} | {}", label, subtitle, help_text)),
            ),
            area,
        );
    }
}
