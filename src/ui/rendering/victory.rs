use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_victory(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let target = self
            .game
            .target()
            .map(|t| t.to_string())
            .unwrap_or_else(|| "?".to_string());

        let mut lines = vec![
            Line::styled(
                "CORRECT!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Line::from(format!("The secret number was {}", target)),
            Line::from(""),
            Line::from(format!("Time taken: {} sec", self.game.elapsed_seconds())),
            Line::from(format!("Attempts:   {} times", self.game.attempts())),
        ];

        if self.is_new_record {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                "✨ NEW RECORD ACHIEVED! ✨",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ));
        }

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Victory")),
            area,
        );
    }
}
