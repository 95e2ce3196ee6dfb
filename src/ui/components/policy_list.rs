//! Policy list component: the main screen of the application.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::config::DisplayConfig;
use crate::icons::IconService;
use crate::policy::{Policy, PolicyStatus};
use crate::ui::components::dialogs::DeletePolicyDialog;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};

pub struct PolicyListComponent {
    pub policies: Vec<Policy>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub icons: IconService,
    pub display_config: DisplayConfig,
}

impl Default for PolicyListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyListComponent {
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            icons: IconService::default(),
            display_config: DisplayConfig::default(),
        }
    }

    pub fn update_data(&mut self, policies: Vec<Policy>) {
        self.policies = policies;
        self.update_list_state();
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn set_display_config(&mut self, display_config: DisplayConfig) {
        self.display_config = display_config;
    }

    #[must_use]
    pub fn selected_policy(&self) -> Option<&Policy> {
        self.policies.get(self.selected_index)
    }

    fn update_list_state(&mut self) {
        if self.policies.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.policies.len() {
                self.selected_index = self.policies.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_next(&mut self) {
        if !self.policies.is_empty() && self.selected_index + 1 < self.policies.len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_first(&mut self) {
        if !self.policies.is_empty() {
            self.selected_index = 0;
            self.list_state.select(Some(0));
        }
    }

    fn select_last(&mut self) {
        if !self.policies.is_empty() {
            self.selected_index = self.policies.len() - 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    /// Details text for the currently selected policy (info dialog content).
    fn selected_policy_details(&self) -> Option<String> {
        let policy = self.selected_policy()?;
        Some(format!(
            "{}\n{}\n\nCategory: {}\nStatus: {}\nCreated by: {}\n{}\nTotal rewards: {}",
            policy.title,
            policy.description,
            policy.category.display_name(),
            policy.status.display_name(),
            policy.created_by,
            policy.active_condition_label(),
            policy.reward_totals().summary(),
        ))
    }

    fn create_policy_list_items(&self) -> Vec<ListItem<'static>> {
        self.policies
            .iter()
            .map(|policy| {
                let category_color = DeletePolicyDialog::category_color(&policy.category);
                let status_color = match policy.status {
                    PolicyStatus::Active => Color::Green,
                    PolicyStatus::Draft => Color::Yellow,
                    PolicyStatus::Archived => Color::DarkGray,
                };

                let mut spans = vec![
                    Span::styled(
                        format!("{} ", self.icons.category(&policy.category)),
                        Style::default().fg(category_color),
                    ),
                    Span::styled(
                        policy.title.clone(),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  [{}]", policy.status.display_name()), Style::default().fg(status_color)),
                ];

                if policy.is_system_policy {
                    spans.push(Span::styled(
                        format!("  {}", self.icons.system()),
                        Style::default().fg(Color::Red),
                    ));
                }

                if self.display_config.show_reward_totals {
                    spans.push(Span::styled(
                        format!("  {}", policy.reward_totals().summary()),
                        Style::default().fg(Color::Gray),
                    ));
                }

                let mut lines = vec![Line::from(spans)];
                if self.display_config.show_descriptions && !policy.description.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("    {}", policy.description),
                        Style::default().fg(Color::DarkGray),
                    )));
                }

                ListItem::new(lines)
            })
            .collect()
    }
}

impl Component for PolicyListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.select_next();
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.select_previous();
                Action::None
            }
            KeyCode::Char('g') => {
                self.select_first();
                Action::None
            }
            KeyCode::Char('G') => {
                self.select_last();
                Action::None
            }
            KeyCode::Char('d') => match self.selected_policy() {
                Some(policy) => Action::ShowDialog(DialogType::DeletePolicy {
                    policy_id: policy.id.clone(),
                }),
                None => Action::ShowDialog(DialogType::Info("No policy selected".to_string())),
            },
            KeyCode::Enter => match self.selected_policy_details() {
                Some(details) => Action::ShowDialog(DialogType::Info(details)),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!(" Reward Policies ({}) ", self.policies.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(Color::White));

        if self.policies.is_empty() {
            let empty = List::new(vec![ListItem::new("No policies loaded")]).block(block);
            f.render_widget(empty, rect);
            return;
        }

        let items = self.create_policy_list_items();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
