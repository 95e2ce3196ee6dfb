use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{backend::TestBackend, Terminal};

use incentivist::policy::{Condition, Policy, PolicyCategory, PolicyStatus, WormReward};
use incentivist::ui::components::dialogs::DeletePolicyDialog;
use incentivist::ui::core::{Action, Component};

fn fixture_policy() -> Policy {
    Policy {
        id: "p1".to_string(),
        title: "Savings streak bonus".to_string(),
        description: "Rewards consecutive weekly deposits".to_string(),
        category: PolicyCategory::Distribution,
        status: PolicyStatus::Active,
        created_by: "m.keller".to_string(),
        is_system_policy: false,
        conditions: vec![
            Condition {
                is_active: true,
                reward: Some(WormReward {
                    gold: 2,
                    silver: 0,
                    bronze: 1,
                }),
            },
            Condition {
                is_active: true,
                reward: None,
            },
            Condition {
                is_active: false,
                reward: None,
            },
        ],
    }
}

/// Render the dialog into a test terminal and return the buffer as text.
fn render_to_text(dialog: &mut DeletePolicyDialog) -> String {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    let mut text = String::new();
    for (i, cell) in buffer.content.iter().enumerate() {
        if i > 0 && i % width == 0 {
            text.push('\n');
        }
        text.push_str(cell.symbol());
    }
    text
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

#[test]
fn test_renders_nothing_without_policy() {
    let mut dialog = DeletePolicyDialog::new();
    assert!(!dialog.is_open());

    let text = render_to_text(&mut dialog);
    assert!(text.trim().is_empty());
}

#[test]
fn test_renders_policy_summary() {
    let mut dialog = DeletePolicyDialog::new();
    dialog.open(fixture_policy());

    let text = render_to_text(&mut dialog);
    assert!(text.contains("Savings streak bonus"));
    assert!(text.contains("Distribution"));
    assert!(text.contains("2 active conditions"));
    assert!(text.contains("2 Gold, 1 Bronze"));
    assert!(text.contains("Delete all 3 conditions"));
}

#[test]
fn test_active_policy_gets_extra_warning() {
    let mut dialog = DeletePolicyDialog::new();
    dialog.open(fixture_policy());
    assert!(render_to_text(&mut dialog).contains("currently ACTIVE"));

    let mut archived = fixture_policy();
    archived.status = PolicyStatus::Archived;
    dialog.open(archived);
    assert!(!render_to_text(&mut dialog).contains("currently ACTIVE"));
}

#[test]
fn test_system_policy_warning_present_iff_flagged() {
    let mut dialog = DeletePolicyDialog::new();

    let mut policy = fixture_policy();
    policy.is_system_policy = true;
    dialog.open(policy);
    assert!(render_to_text(&mut dialog).contains("SYSTEM POLICY"));

    dialog.open(fixture_policy());
    assert!(!render_to_text(&mut dialog).contains("SYSTEM POLICY"));
}

#[test]
fn test_unknown_category_renders_raw_string() {
    let mut dialog = DeletePolicyDialog::new();

    let mut policy = fixture_policy();
    policy.category = PolicyCategory::Other("unknown-x".to_string());
    dialog.open(policy);

    let text = render_to_text(&mut dialog);
    assert!(text.contains("unknown-x"));
}

#[test]
fn test_no_reward_policy_renders_no_rewards() {
    let mut dialog = DeletePolicyDialog::new();

    let mut policy = fixture_policy();
    for condition in &mut policy.conditions {
        condition.reward = None;
    }
    dialog.open(policy);

    assert!(render_to_text(&mut dialog).contains("No rewards"));
}

#[test]
fn test_confirm_via_y_requests_deletion() {
    let mut dialog = DeletePolicyDialog::new();
    dialog.open(fixture_policy());

    let action = dialog.handle_key_events(key(KeyCode::Char('y')));
    assert!(matches!(action, Action::DeletePolicy(id) if id == "p1"));
    assert!(dialog.is_deleting());
}

#[test]
fn test_enter_activates_focused_button() {
    let mut dialog = DeletePolicyDialog::new();
    dialog.open(fixture_policy());

    // Cancel has the initial focus
    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::HideDialog));
    assert!(!dialog.is_deleting());

    // Tab moves focus to the confirm button
    dialog.open(fixture_policy());
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Tab)), Action::None));
    let action = dialog.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::DeletePolicy(id) if id == "p1"));
}

#[test]
fn test_escape_cancels_without_deleting() {
    let mut dialog = DeletePolicyDialog::new();
    dialog.open(fixture_policy());

    let action = dialog.handle_key_events(key(KeyCode::Esc));
    assert!(matches!(action, Action::HideDialog));
    assert!(!dialog.is_deleting());
}

#[test]
fn test_all_controls_inert_while_deleting() {
    let mut dialog = DeletePolicyDialog::new();
    dialog.open(fixture_policy());
    dialog.set_deleting(true);

    for code in [
        KeyCode::Enter,
        KeyCode::Esc,
        KeyCode::Char('y'),
        KeyCode::Char('n'),
        KeyCode::Tab,
    ] {
        assert!(matches!(dialog.handle_key_events(key(code)), Action::None));
    }

    let text = render_to_text(&mut dialog);
    assert!(text.contains("Deleting"));
}

#[test]
fn test_closed_dialog_ignores_keys() {
    let mut dialog = DeletePolicyDialog::new();
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('y'))), Action::None));
}

#[test]
fn test_failed_delete_returns_to_idle_with_error() {
    let mut dialog = DeletePolicyDialog::new();
    dialog.open(fixture_policy());
    dialog.set_deleting(true);

    dialog.set_error("simulated platform outage".to_string());
    assert!(!dialog.is_deleting());
    assert!(dialog.is_open());
    assert_eq!(dialog.error(), Some("simulated platform outage"));

    let text = render_to_text(&mut dialog);
    assert!(text.contains("Delete failed"));
    assert!(text.contains("simulated platform outage"));

    // Controls work again after the failure
    let action = dialog.handle_key_events(key(KeyCode::Char('y')));
    assert!(matches!(action, Action::DeletePolicy(_)));
    // Re-confirming clears the previous error
    assert!(dialog.error().is_none());
}

#[test]
fn test_successful_close_resets_state() {
    let mut dialog = DeletePolicyDialog::new();
    dialog.open(fixture_policy());
    dialog.set_deleting(true);

    dialog.close();
    assert!(!dialog.is_open());
    assert!(!dialog.is_deleting());
    assert!(dialog.policy_id().is_none());

    let text = render_to_text(&mut dialog);
    assert!(text.trim().is_empty());
}
