//! Policy deletion confirmation dialog component.
//!
//! Shows a summary of the policy about to be deleted, the consequences of
//! deleting it, and a stronger warning for system policies. The actual
//! deletion runs on a background task; while it is in flight every control
//! in this dialog is inert and the confirm button shows a progress state.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::icons::IconService;
use crate::policy::{Policy, PolicyCategory};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;

/// Which of the two dialog buttons currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonFocus {
    Cancel,
    Confirm,
}

/// Policy deletion confirmation dialog component.
pub struct DeletePolicyDialog {
    policy: Option<Policy>,
    focus: ButtonFocus,
    deleting: bool,
    error: Option<String>,
    icons: IconService,
}

impl DeletePolicyDialog {
    pub fn new() -> Self {
        Self {
            policy: None,
            focus: ButtonFocus::Cancel,
            deleting: false,
            error: None,
            icons: IconService::default(),
        }
    }

    /// Open the dialog for the given policy, resetting any previous state.
    pub fn open(&mut self, policy: Policy) {
        self.policy = Some(policy);
        self.focus = ButtonFocus::Cancel;
        self.deleting = false;
        self.error = None;
    }

    /// Close the dialog and discard its transient state.
    pub fn close(&mut self) {
        self.policy = None;
        self.focus = ButtonFocus::Cancel;
        self.deleting = false;
        self.error = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.policy.is_some()
    }

    #[must_use]
    pub fn policy_id(&self) -> Option<&str> {
        self.policy.as_ref().map(|policy| policy.id.as_str())
    }

    #[must_use]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Mark the deletion as in flight; all input is ignored until the
    /// outcome arrives.
    pub fn set_deleting(&mut self, deleting: bool) {
        self.deleting = deleting;
    }

    /// Record a failed deletion: back to idle, error shown inline, dialog
    /// stays open.
    pub fn set_error(&mut self, message: String) {
        self.deleting = false;
        self.error = Some(message);
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    /// Request deletion of the loaded policy.
    fn confirm(&mut self) -> Action {
        // Unreachable through the UI while no policy is loaded; kept as a guard.
        let Some(policy) = &self.policy else {
            return Action::None;
        };

        self.deleting = true;
        self.error = None;
        log::info!("Dialog: Requesting deletion of policy {}", policy.id);
        Action::DeletePolicy(policy.id.clone())
    }

    /// Color token for a policy category; unknown categories render gray.
    #[must_use]
    pub fn category_color(category: &PolicyCategory) -> Color {
        match category {
            PolicyCategory::Distribution => Color::Blue,
            PolicyCategory::Minting => Color::Yellow,
            PolicyCategory::Recognition => Color::Magenta,
            PolicyCategory::Compliance => Color::Cyan,
            PolicyCategory::Other(_) => Color::Gray,
        }
    }

    fn summary_lines(&self, policy: &Policy) -> Vec<Line<'static>> {
        let category_color = Self::category_color(&policy.category);
        let status_color = if policy.is_active() { Color::Green } else { Color::Gray };

        let mut lines = vec![
            Line::from(Span::styled(
                policy.title.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    format!("{} {}", self.icons.category(&policy.category), policy.category.display_name()),
                    Style::default().fg(category_color),
                ),
                Span::styled("  •  ", Style::default().fg(Color::DarkGray)),
                Span::styled(policy.status.display_name(), Style::default().fg(status_color)),
                Span::styled("  •  ", Style::default().fg(Color::DarkGray)),
                Span::styled(format!("by {}", policy.created_by), Style::default().fg(Color::Gray)),
            ]),
            Line::from(Span::styled(
                format!("{} • {}", policy.active_condition_label(), policy.reward_totals().summary()),
                Style::default().fg(Color::Gray),
            )),
        ];

        if !policy.description.is_empty() {
            lines.push(Line::from(Span::styled(
                policy.description.clone(),
                Style::default().fg(Color::DarkGray),
            )));
        }

        lines
    }

    fn warning_lines(&self, policy: &Policy) -> Vec<Line<'static>> {
        let bullet_style = Style::default().fg(Color::White);
        let condition_count = policy.conditions.len();

        let mut lines = vec![
            Line::from(Span::styled(
                "Deleting this policy will:",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("• Permanently remove the policy", bullet_style)),
            Line::from(Span::styled(
                format!("• Delete all {condition_count} conditions attached to it"),
                bullet_style,
            )),
            Line::from(Span::styled("• Halt any reward distributions it drives", bullet_style)),
            Line::from(Span::styled("• Keep the audit trail of past payouts", bullet_style)),
        ];

        if policy.is_active() {
            lines.push(Line::from(Span::styled(
                "• Interrupt a policy that is currently ACTIVE",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }

        lines
    }

    fn system_policy_lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                format!("{} SYSTEM POLICY", self.icons.warning()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )),
            Line::from(Span::styled(
                "Core reward operations depend on this policy. Deleting it may break payout processing.",
                Style::default().fg(Color::Red),
            )),
        ]
    }

    fn button_line(&self) -> Line<'static> {
        if self.deleting {
            return Line::from(vec![
                Span::styled("[ Cancel ]", Style::default().fg(Color::DarkGray)),
                Span::raw("   "),
                Span::styled(
                    format!("[ {} Deleting… ]", self.icons.busy()),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
            ]);
        }

        let focused = Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        let cancel_style = if self.focus == ButtonFocus::Cancel {
            focused.fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        let confirm_style = if self.focus == ButtonFocus::Confirm {
            focused.fg(Color::Red)
        } else {
            Style::default().fg(Color::Red)
        };

        Line::from(vec![
            Span::styled("[ Cancel ]", cancel_style),
            Span::raw("   "),
            Span::styled("[ Delete Policy ]", confirm_style),
        ])
    }

    fn instruction_line(&self) -> Line<'static> {
        if self.deleting {
            return Line::from(Span::styled(
                "Deletion in progress…",
                Style::default().fg(Color::Yellow),
            ));
        }

        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled(" Select", Style::default().fg(Color::Gray)),
            Span::styled(" • ", Style::default().fg(Color::DarkGray)),
            Span::styled("Tab", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(" Switch", Style::default().fg(Color::Gray)),
            Span::styled(" • ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(" Cancel", Style::default().fg(Color::Gray)),
        ])
    }
}

impl Default for DeletePolicyDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DeletePolicyDialog {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.policy.is_none() {
            return Action::None;
        }

        // Both controls stay inert for the whole flight of a deletion.
        if self.deleting {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
            KeyCode::Char('y') => self.confirm(),
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                self.focus = match self.focus {
                    ButtonFocus::Cancel => ButtonFocus::Confirm,
                    ButtonFocus::Confirm => ButtonFocus::Cancel,
                };
                Action::None
            }
            KeyCode::Enter => match self.focus {
                ButtonFocus::Cancel => Action::HideDialog,
                ButtonFocus::Confirm => self.confirm(),
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: ratatui::layout::Rect) {
        // No policy, no dialog.
        let Some(policy) = self.policy.clone() else {
            return;
        };

        let mut lines = self.summary_lines(&policy);
        lines.push(Line::default());
        lines.extend(self.warning_lines(&policy));

        if policy.is_system_policy {
            lines.push(Line::default());
            lines.extend(self.system_policy_lines());
        }

        if let Some(error) = &self.error {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("{} Delete failed: {error}", self.icons.error()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }

        lines.push(Line::default());
        lines.push(self.button_line().alignment(Alignment::Center));
        lines.push(self.instruction_line().alignment(Alignment::Center));

        let height = lines.len() as u16 + 2;
        let dialog_area = LayoutManager::centered_rect_lines(70, height, rect);
        f.render_widget(Clear, dialog_area);

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} Delete Policy", self.icons.warning()))
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Red)),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, dialog_area);
    }
}
