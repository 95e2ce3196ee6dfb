//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::icons::IconService;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, policy_count: usize, deleting: bool, icons: &IconService) {
        let status_text = if deleting {
            format!("{} Deleting policy...", icons.busy())
        } else {
            format!("{policy_count} policies • d: delete • Enter: details • r: reload • ?: help • q: quit")
        };

        let status_color = if deleting { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
