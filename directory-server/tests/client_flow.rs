//! The client crate driving the real router in-process

use std::collections::VecDeque;
use std::sync::Arc;

use directory_client::controller::{FormField, Mode, Notice, NoticeLevel, Ui};
use directory_client::{Controller, Employee, EmployeeProxy, OneshotHttpClient, ViewState};
use directory_server::{Config, EmployeeStore, MemoryEmployeeStore, ServerState, build_app};

/// Answers confirmations from a script and keeps every notice
#[derive(Default)]
struct ScriptedUi {
    answers: VecDeque<bool>,
    notices: Vec<Notice>,
    renders: usize,
}

impl ScriptedUi {
    fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Default::default()
        }
    }

    fn messages(&self) -> Vec<&str> {
        self.notices.iter().map(|n| n.message.as_str()).collect()
    }
}

impl Ui for ScriptedUi {
    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }

    fn confirm(&mut self, _prompt: &str) -> bool {
        self.answers.pop_front().unwrap_or(false)
    }

    fn render(&mut self, _state: &ViewState) {
        self.renders += 1;
    }
}

fn setup(ui: ScriptedUi) -> (Controller<OneshotHttpClient, ScriptedUi>, Arc<MemoryEmployeeStore>) {
    let store = Arc::new(MemoryEmployeeStore::new());
    let state = ServerState::new(Config::in_memory("http://localhost:4200"), store.clone());
    let router = build_app(&state).with_state(state);
    let proxy = EmployeeProxy::new(OneshotHttpClient::new(router));
    (Controller::new(proxy, ui), store)
}

fn fill(controller: &mut Controller<OneshotHttpClient, ScriptedUi>, name: &str) {
    controller.reset();
    controller.edit(FormField::Name(name.into()));
    controller.edit(FormField::Position("Dev".into()));
    controller.edit(FormField::Office("HQ".into()));
    controller.edit(FormField::Salary(1000.0));
}

#[tokio::test]
async fn test_create_edit_delete_through_controller() {
    let (mut controller, store) = setup(ScriptedUi::answering(&[true]));

    controller.load().await;
    assert!(controller.state().employees().is_empty());

    fill(&mut controller, "Ana");
    controller.submit().await;
    assert_eq!(controller.state().employees().len(), 1);
    assert_eq!(controller.state().form(), &Employee::default());
    assert_eq!(controller.state().mode(), Mode::IdleList);

    let id = controller.state().employees()[0].id.clone();
    assert!(!id.is_empty());

    assert!(controller.select(&id));
    controller.edit(FormField::Name("Ana2".into()));
    controller.submit().await;
    let stored = store.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Ana2");
    assert_eq!(stored.office, "HQ");
    assert_eq!(controller.state().employees()[0].name, "Ana2");

    controller.delete(id.clone()).await;
    assert!(store.is_empty());
    assert!(controller.state().employees().is_empty());

    let ui = controller.into_ui();
    assert_eq!(
        ui.messages(),
        vec!["Saved successfully", "Updated successfully", "Employee deleted"]
    );
    assert!(ui.notices.iter().all(|n| n.level == NoticeLevel::Success));
    assert!(ui.renders > 0);
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let (mut controller, store) = setup(ScriptedUi::answering(&[false]));

    fill(&mut controller, "Ana");
    controller.submit().await;
    let id = controller.state().employees()[0].id.clone();

    controller.delete(id.clone()).await;
    assert_eq!(store.len(), 1);
    assert!(controller.state().can_submit());
    assert_eq!(controller.into_ui().messages(), vec!["Saved successfully"]);
}

#[tokio::test]
async fn test_proxy_fetch_one() {
    let (mut controller, _store) = setup(ScriptedUi::default());

    fill(&mut controller, "Luis");
    controller.submit().await;
    let id = controller.state().employees()[0].id.clone();

    let found = controller.proxy().fetch_one(&id).await.unwrap();
    assert_eq!(found.map(|e| e.name), Some("Luis".to_string()));

    let missing = controller.proxy().fetch_one("nope").await.unwrap();
    assert!(missing.is_none());

    // Reserved characters reach the handler as one id instead of another route
    let odd = controller.proxy().fetch_one("a/b?c#d").await.unwrap();
    assert!(odd.is_none());
}

#[tokio::test]
async fn test_server_rejection_becomes_failure_notice() {
    let store = Arc::new(MemoryEmployeeStore::new());
    let state = ServerState::new(Config::in_memory("http://localhost:4200"), store.clone());
    let router = build_app(&state).with_state(state);
    let proxy = EmployeeProxy::with_resource_path(OneshotHttpClient::new(router), "/api/missing");
    let mut controller = Controller::new(proxy, ScriptedUi::default());

    fill(&mut controller, "Ana");
    controller.submit().await;

    assert!(controller.state().can_submit());
    assert_eq!(controller.state().form().name, "Ana");
    assert!(store.is_empty());

    let ui = controller.into_ui();
    assert_eq!(ui.notices.len(), 1);
    assert_eq!(ui.notices[0].level, NoticeLevel::Failure);
    assert!(ui.notices[0].message.starts_with("Could not save employee"));
}

#[tokio::test]
async fn test_select_rejects_blank_and_unlisted_ids() {
    let (mut controller, store) = setup(ScriptedUi::answering(&[true]));

    fill(&mut controller, "Ana");
    controller.submit().await;
    let id = controller.state().employees()[0].id.clone();

    assert!(!controller.select(""));
    assert!(controller.select(&id));

    controller.delete(id.clone()).await;
    assert!(!controller.select(&id));

    // Nothing was created by the rejected selections
    assert!(store.is_empty());
}
