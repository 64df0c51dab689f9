//! Guess history, latest first.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{game::Feedback, ui::app::App};

impl App {
    pub(in crate::ui) fn draw_guesses(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let guesses = self.game.guesses();

        let lines: Vec<Line> = if guesses.is_empty() {
            vec![Line::styled(
                "The battlefield is quiet. Start guessing!",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )]
        } else {
            guesses
                .iter()
                .enumerate()
                .map(|(i, g)| {
                    let number_style = if i == 0 {
                        Style::default().fg(Color::Black).bg(Color::Blue)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    let feedback_style = match g.feedback {
                        Feedback::High => Style::default().fg(Color::Red),
                        Feedback::Low => Style::default().fg(Color::Yellow),
                        Feedback::Correct => Style::default().fg(Color::Green),
                    };

                    Line::from(vec![
                        Span::styled(format!(" {:>3} ", guesses.len() - i), number_style),
                        Span::raw(format!("  #{:<4}", g.value)),
                        Span::styled(
                            g.feedback.to_string().to_uppercase(),
                            feedback_style.add_modifier(Modifier::BOLD),
                        ),
                    ])
                })
                .collect()
        };

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Recent Guesses (latest first)"),
            ),
            area,
        );
    }
}
