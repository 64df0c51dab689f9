//! Hall of fame shown before a game starts.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_best_record(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let mut lines = match &self.best_record {
            Some(best) => vec![
                Line::styled(
                    format!("🏆 {}", best.player_name),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Line::from("Champion"),
                Line::from(""),
                Line::styled(
                    format!("{} guesses", best.attempts),
                    Style::default().fg(Color::Green),
                ),
                Line::from(format!("{}s elapsed", best.time_seconds)),
            ],
            None => vec![Line::styled(
                "The throne is empty. Claim it.",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )],
        };

        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("\"{}\"", self.hint),
            Style::default().fg(Color::Gray),
        ));

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Best Record")),
            area,
        );
    }
}
