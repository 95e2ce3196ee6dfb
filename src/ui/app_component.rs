//! Application shell: component composition, global keys and app-level
//! action handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::icons::{IconService, IconTheme};
use crate::policy::Policy;
use crate::service::PolicyService;
use crate::ui::components::dialogs::{DeletePolicyDialog, HelpDialog, MessageDialog};
use crate::ui::components::{PolicyListComponent, StatusBar};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub policies: Vec<Policy>,
    pub loading: bool,
    pub deleting: bool,
}

pub struct AppComponent {
    // Component composition
    list: PolicyListComponent,
    delete_dialog: DeletePolicyDialog,
    help_dialog: HelpDialog,
    message_dialog: MessageDialog,

    // Application state
    state: AppState,

    // Services
    service: PolicyService,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    icons: IconService,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(service: PolicyService, config: &Config) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();

        let icons = IconService::new(IconTheme::from_name(&config.ui.icon_theme).unwrap_or_default());

        let mut list = PolicyListComponent::new();
        list.set_display_config(config.display.clone());

        let state = AppState {
            loading: true,
            ..Default::default()
        };

        let mut app = Self {
            list,
            delete_dialog: DeletePolicyDialog::new(),
            help_dialog: HelpDialog::new(),
            message_dialog: MessageDialog::new(),
            state,
            service,
            task_manager,
            background_action_rx,
            icons,
            should_quit: false,
        };
        app.sync_component_icons();
        app
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the number of active background tasks
    #[must_use]
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Kick off the initial policy load on startup.
    pub fn trigger_initial_load(&mut self) {
        log::info!("App: Loading policies");
        self.state.loading = true;
        self.task_manager.spawn_policy_load(self.service.clone());
    }

    fn sync_component_icons(&mut self) {
        self.list.set_icons(self.icons.clone());
        self.delete_dialog.set_icons(self.icons.clone());
        self.message_dialog.set_icons(self.icons.clone());
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                log::info!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                log::info!("Global key: Ctrl+C - quitting application");
                Action::Quit
            }
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('r') => {
                log::info!("Global key: 'r' - reloading policies");
                Action::ReloadPolicies
            }
            KeyCode::Char('i') => Action::CycleIconTheme,
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::ShowDialog(DialogType::DeletePolicy { policy_id }) => {
                match self.state.policies.iter().find(|policy| policy.id == policy_id) {
                    Some(policy) => {
                        log::info!("Dialog: Opening delete confirmation for policy {} '{}'", policy.id, policy.title);
                        self.delete_dialog.open(policy.clone());
                    }
                    None => {
                        log::warn!("Dialog: Policy {policy_id} not found, cannot open delete confirmation");
                        self.message_dialog.show_error(format!("Policy {policy_id} not found"));
                    }
                }
                Action::None
            }
            Action::ShowDialog(DialogType::Error(message)) => {
                self.message_dialog.show_error(message);
                Action::None
            }
            Action::ShowDialog(DialogType::Info(message)) => {
                self.message_dialog.show_info(message);
                Action::None
            }
            Action::ShowDialog(DialogType::Help) => {
                self.help_dialog.open();
                Action::None
            }
            Action::HideDialog => {
                if self.message_dialog.is_open() {
                    self.message_dialog.close();
                } else if self.delete_dialog.is_open() {
                    self.delete_dialog.close();
                } else {
                    self.help_dialog.close();
                }
                Action::None
            }
            Action::DeletePolicy(policy_id) => {
                log::info!("Policy: Deleting policy {policy_id}");
                self.state.deleting = true;
                self.delete_dialog.set_deleting(true);
                self.task_manager.spawn_delete(self.service.clone(), policy_id);
                Action::None
            }
            Action::PolicyDeleted(policy_id) => {
                log::info!("Policy: Deleted policy {policy_id}");
                self.state.deleting = false;
                self.delete_dialog.close();
                self.task_manager.spawn_policy_load(self.service.clone());
                Action::None
            }
            Action::DeleteFailed { policy_id, message } => {
                // No toast layer in a terminal: the failure surfaces inside
                // the still-open dialog and in the log file.
                log::error!("Policy: Failed to delete policy {policy_id}: {message}");
                self.state.deleting = false;
                self.delete_dialog.set_error(message);
                Action::None
            }
            Action::ReloadPolicies => {
                self.state.loading = true;
                self.task_manager.spawn_policy_load(self.service.clone());
                Action::None
            }
            Action::PoliciesLoaded(policies) => {
                log::info!("Data: Loaded {} policies", policies.len());
                self.state.policies = policies;
                self.state.loading = false;
                self.list.update_data(self.state.policies.clone());
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.sync_component_icons();
                Action::None
            }
            Action::None => Action::None,
        }
    }

    /// Process background actions from the task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Background: Received action {action:?}");
            actions.push(action);
        }

        let cleaned = self.task_manager.cleanup_finished_tasks();
        if cleaned > 0 {
            log::debug!("Background: Cleaned up {cleaned} finished tasks");
        }

        actions
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                // Topmost visible overlay gets the event first
                if self.message_dialog.is_open() {
                    self.message_dialog.handle_key_events(key)
                } else if self.delete_dialog.is_open() {
                    self.delete_dialog.handle_key_events(key)
                } else if self.help_dialog.is_open() {
                    self.help_dialog.handle_key_events(key)
                } else {
                    let list_action = self.list.handle_key_events(key);
                    if matches!(list_action, Action::None) {
                        self.handle_global_key(key)
                    } else {
                        list_action
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let _final_action = self.handle_app_action(action);
        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Direct key handling is routed through handle_event instead
        self.handle_global_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);

        self.list.render(f, areas[0]);
        StatusBar::render(f, areas[1], self.state.policies.len(), self.state.deleting, &self.icons);

        // Overlays, topmost last
        self.help_dialog.render(f, rect);
        self.delete_dialog.render(f, rect);
        self.message_dialog.render(f, rect);
    }
}
