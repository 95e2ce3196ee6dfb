//! Transient error/info overlay dismissed by any key.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::icons::IconService;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Info,
}

/// Error/info message dialog component.
pub struct MessageDialog {
    content: Option<(MessageKind, String)>,
    icons: IconService,
}

impl MessageDialog {
    pub fn new() -> Self {
        Self {
            content: None,
            icons: IconService::default(),
        }
    }

    pub fn show_error(&mut self, message: String) {
        self.content = Some((MessageKind::Error, message));
    }

    pub fn show_info(&mut self, message: String) {
        self.content = Some((MessageKind::Info, message));
    }

    pub fn close(&mut self) {
        self.content = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }
}

impl Default for MessageDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for MessageDialog {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        if self.content.is_none() {
            return Action::None;
        }

        // Any key dismisses the message
        Action::HideDialog
    }

    fn render(&mut self, f: &mut Frame, rect: ratatui::layout::Rect) {
        let Some((kind, message)) = &self.content else {
            return;
        };

        let (title, color) = match kind {
            MessageKind::Error => (format!("{} Error", self.icons.error()), Color::Red),
            MessageKind::Info => (format!("{} Info", self.icons.info()), Color::Blue),
        };

        let dialog_area = LayoutManager::centered_rect_lines(60, 7, rect);
        f.render_widget(Clear, dialog_area);

        let paragraph = Paragraph::new(format!("{message}\n\nPress any key to continue"))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(color)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, dialog_area);
    }
}
