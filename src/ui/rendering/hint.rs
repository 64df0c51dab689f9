//! Host commentary panel.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_hint(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let (color, title) = if self.input_error {
            (Color::Red, "Host")
        } else if self.hint_pending {
            (Color::DarkGray, "Host (thinking...)")
        } else {
            (Color::Gray, "Host")
        };

        f.render_widget(
            Paragraph::new(format!("\"{}\"", self.hint))
                .style(Style::default().fg(color).add_modifier(Modifier::ITALIC))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color))
                        .title(title),
                ),
            area,
        );
    }
}
