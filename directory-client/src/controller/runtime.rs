//! Controller runtime - executes [`Command`]s and feeds results back

use std::collections::VecDeque;

use super::state::{Command, FormField, Msg, Notice, Operation, ViewState, update};
use crate::EmployeeProxy;
use crate::client::HttpClient;

/// Presentation side of the controller
///
/// Rendering is left to the implementor; the controller only needs to
/// show notices and ask yes/no questions.
pub trait Ui {
    fn notify(&mut self, notice: &Notice);

    /// Blocking confirmation; `true` means proceed
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Called after every processed message
    fn render(&mut self, _state: &ViewState) {}
}

pub struct Controller<C, U> {
    proxy: EmployeeProxy<C>,
    ui: U,
    state: ViewState,
}

impl<C: HttpClient, U: Ui> Controller<C, U> {
    pub fn new(proxy: EmployeeProxy<C>, ui: U) -> Self {
        Self {
            proxy,
            ui,
            state: ViewState::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn proxy(&self) -> &EmployeeProxy<C> {
        &self.proxy
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn into_ui(self) -> U {
        self.ui
    }

    /// Process `msg` and every message its commands produce
    pub async fn dispatch(&mut self, msg: Msg) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            let commands = update(&mut self.state, msg);
            self.ui.render(&self.state);
            for command in commands {
                if let Some(next) = self.run(command).await {
                    queue.push_back(next);
                }
            }
        }
    }

    async fn run(&mut self, command: Command) -> Option<Msg> {
        match command {
            Command::FetchAll => Some(match self.proxy.fetch_all().await {
                Ok(list) => Msg::ListLoaded(list),
                Err(e) => failed(Operation::Load, e),
            }),
            Command::Create(employee) => Some(match self.proxy.create(&employee).await {
                Ok(created) => {
                    tracing::debug!(id = %created.id, "Employee created");
                    Msg::Created(created)
                }
                Err(e) => failed(Operation::Create, e),
            }),
            Command::Update(employee) => Some(match self.proxy.update(&employee).await {
                Ok(_) => Msg::Updated,
                Err(e) => failed(Operation::Update, e),
            }),
            Command::Confirm { id, prompt } => self
                .ui
                .confirm(&prompt)
                .then_some(Msg::DeleteConfirmed(id)),
            Command::Delete(id) => Some(match self.proxy.delete(&id).await {
                Ok(_) => Msg::Deleted(id),
                Err(e) => failed(Operation::Delete, e),
            }),
            Command::Notify(notice) => {
                self.ui.notify(&notice);
                None
            }
        }
    }

    pub async fn load(&mut self) {
        self.dispatch(Msg::Load).await;
    }

    /// Copy the listed record with `id` into the form; `false` if not listed
    pub fn select(&mut self, id: &str) -> bool {
        update(&mut self.state, Msg::Select(id.to_string()));
        self.state
            .employees()
            .iter()
            .any(|e| e.is_persisted() && e.id == id)
    }

    pub fn edit(&mut self, field: FormField) {
        update(&mut self.state, Msg::Edit(field));
    }

    pub fn reset(&mut self) {
        update(&mut self.state, Msg::ResetForm);
    }

    pub async fn submit(&mut self) {
        self.dispatch(Msg::Submit).await;
    }

    pub async fn delete(&mut self, id: impl Into<String>) {
        self.dispatch(Msg::RequestDelete(id.into())).await;
    }
}

fn failed(op: Operation, error: crate::ClientError) -> Msg {
    tracing::warn!(?op, error = %error, "Request failed");
    Msg::RequestFailed {
        op,
        message: error.to_string(),
    }
}
