use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{game::Status, ui::app::App};

impl App {
    pub(in crate::ui) fn draw_status_bar(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let (text, color) = match self.game.status() {
            Status::Idle => (
                "NUMBER QUEST | Find the number between 1 and 100 | Ctrl+Q to quit".to_string(),
                Color::Cyan,
            ),
            Status::Playing => (
                format!(
                    "{} | ⏱ {}s | # {} attempts",
                    self.game.player_name(),
                    self.game.elapsed_seconds(),
                    self.game.attempts()
                ),
                Color::White,
            ),
            Status::Won => (
                format!(
                    "CORRECT! {} found the number in {} attempts",
                    self.game.player_name(),
                    self.game.attempts()
                ),
                Color::Green,
            ),
        };

        f.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .block(Block::default().borders(Borders::ALL).title("Number Quest")),
            area,
        );
    }
}
