//! Scrollable help overlay.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;

const HELP_CONTENT: &str = r"
INCENTIVIST - Rewards Policy Administration
===========================================

NAVIGATION
----------
j/k         Navigate policies (down/up)
g/G         Jump to first/last policy
Enter       Show policy details

POLICY MANAGEMENT
-----------------
d           Delete selected policy (with confirmation)
r           Reload the policy list

DELETE CONFIRMATION DIALOG
--------------------------
Tab         Switch between Cancel and Delete Policy
Enter       Activate the focused button
y           Confirm deletion directly
n/Esc       Cancel without deleting

While a deletion is running the dialog ignores all input
until the outcome arrives.

GENERAL CONTROLS
----------------
?           Toggle this help panel
i           Change icon theme
q           Quit application
Ctrl+C      Quit application

Press 'Esc', '?' or 'q' to close this help panel
";

/// Help dialog component.
pub struct HelpDialog {
    visible: bool,
    scroll_offset: usize,
    scrollbar_state: ScrollbarState,
}

impl HelpDialog {
    pub fn new() -> Self {
        Self {
            visible: false,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
        }
    }

    pub fn open(&mut self) {
        self.visible = true;
        self.scroll_offset = 0;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.scroll_offset = 0;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visible
    }
}

impl Default for HelpDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HelpDialog {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.visible {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                Action::None
            }
            KeyCode::End => {
                self.scroll_offset = usize::MAX;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: ratatui::layout::Rect) {
        if !self.visible {
            return;
        }

        let help_area = LayoutManager::centered_rect(80, 90, rect);
        f.render_widget(Clear, help_area);

        let lines: Vec<&str> = HELP_CONTENT.lines().collect();
        let total_lines = lines.len();
        let visible_height = help_area.height.saturating_sub(2) as usize;

        let max_scroll = total_lines.saturating_sub(visible_height);
        let clamped_offset = self.scroll_offset.min(max_scroll);

        self.scrollbar_state = self
            .scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(clamped_offset);

        let visible_lines: Vec<&str> = lines.iter().skip(clamped_offset).take(visible_height).copied().collect();

        let help_paragraph = Paragraph::new(visible_lines.join("\n"))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help - Press 'Esc', '?' or 'q' to close")
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(help_paragraph, help_area);

        if total_lines > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("▐")
                .style(Style::default().fg(Color::Gray))
                .thumb_style(Style::default().fg(Color::White));

            f.render_stateful_widget(scrollbar, help_area, &mut self.scrollbar_state);
        }
    }
}
