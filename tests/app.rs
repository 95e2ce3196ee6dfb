use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{backend::TestBackend, Terminal};

use incentivist::backend::{DeleteError, PolicyBackend};
use incentivist::config::Config;
use incentivist::policy::{Condition, Policy, PolicyCategory, PolicyStatus};
use incentivist::service::PolicyService;
use incentivist::ui::core::{Component, EventType};
use incentivist::ui::AppComponent;

struct AcceptingBackend;

#[async_trait]
impl PolicyBackend for AcceptingBackend {
    async fn delete_policy(&self, _policy_id: &str) -> Result<(), DeleteError> {
        Ok(())
    }
}

struct FailingBackend;

#[async_trait]
impl PolicyBackend for FailingBackend {
    async fn delete_policy(&self, _policy_id: &str) -> Result<(), DeleteError> {
        Err(DeleteError::Backend("simulated platform outage".to_string()))
    }
}

fn fixture_policies() -> Vec<Policy> {
    ["p1", "p2"]
        .into_iter()
        .map(|id| Policy {
            id: id.to_string(),
            title: format!("Policy {id}"),
            description: String::new(),
            category: PolicyCategory::Recognition,
            status: PolicyStatus::Draft,
            created_by: "tester".to_string(),
            is_system_policy: false,
            conditions: vec![Condition {
                is_active: true,
                reward: None,
            }],
        })
        .collect()
}

/// Wait for background tasks to report back, then apply their actions.
async fn pump_background(app: &mut AppComponent) {
    for _ in 0..200 {
        let actions = app.process_background_actions();
        if !actions.is_empty() {
            for action in actions {
                app.handle_app_action(action);
            }
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("no background action arrived");
}

fn render_to_text(app: &mut AppComponent) -> String {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

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

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::from(code))).unwrap();
}

#[tokio::test]
async fn test_confirmed_delete_closes_dialog_and_refreshes_list() {
    let service = PolicyService::new(Arc::new(AcceptingBackend), fixture_policies());
    let mut app = AppComponent::new(service.clone(), &Config::default());

    app.trigger_initial_load();
    pump_background(&mut app).await;
    assert!(render_to_text(&mut app).contains("Reward Policies (2)"));

    // Open the confirmation dialog for the first policy
    press(&mut app, KeyCode::Char('d'));
    let text = render_to_text(&mut app);
    assert!(text.contains("Delete Policy"));
    assert!(text.contains("Policy p1"));

    // Move focus to the confirm button and activate it
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);

    // Deletion outcome, then the follow-up list reload
    pump_background(&mut app).await;
    pump_background(&mut app).await;

    let text = render_to_text(&mut app);
    assert!(!text.contains("Delete Policy"));
    assert!(text.contains("Reward Policies (1)"));
    assert_eq!(service.policy_count().await, 1);
    assert!(service.policy("p1").await.is_none());
}

#[tokio::test]
async fn test_failed_delete_keeps_dialog_open_with_error() {
    let service = PolicyService::new(Arc::new(FailingBackend), fixture_policies());
    let mut app = AppComponent::new(service.clone(), &Config::default());

    app.trigger_initial_load();
    pump_background(&mut app).await;

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    pump_background(&mut app).await;

    let text = render_to_text(&mut app);
    assert!(text.contains("Delete Policy"));
    assert!(text.contains("Delete failed"));
    assert!(text.contains("simulated platform outage"));

    // Nothing was removed
    assert_eq!(service.policy_count().await, 2);
}

#[tokio::test]
async fn test_cancel_performs_no_deletion() {
    let service = PolicyService::new(Arc::new(AcceptingBackend), fixture_policies());
    let mut app = AppComponent::new(service.clone(), &Config::default());

    app.trigger_initial_load();
    pump_background(&mut app).await;

    press(&mut app, KeyCode::Char('d'));
    assert!(render_to_text(&mut app).contains("Delete Policy"));

    press(&mut app, KeyCode::Esc);
    assert!(!render_to_text(&mut app).contains("Delete Policy"));
    assert_eq!(service.policy_count().await, 2);
}

#[tokio::test]
async fn test_quit_key() {
    let service = PolicyService::new(Arc::new(AcceptingBackend), fixture_policies());
    let mut app = AppComponent::new(service, &Config::default());

    assert!(!app.should_quit());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}
