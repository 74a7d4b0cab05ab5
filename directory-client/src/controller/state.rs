//! View state and its update function

use shared::models::Employee;

pub const MSG_CREATED: &str = "Saved successfully";
pub const MSG_UPDATED: &str = "Updated successfully";
pub const MSG_DELETED: &str = "Employee deleted";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this employee?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    IdleList,
    /// A record (possibly the blank one) is loaded into the form
    Editing,
}

/// Mutating request currently awaiting the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Name(String),
    Position(String),
    Office(String),
    Salary(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Failure,
}

/// User-facing notification (toast)
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Failure,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Fetch the list from the server
    Load,
    ListLoaded(Vec<Employee>),
    /// Copy the listed record with this id into the form
    Select(String),
    Edit(FormField),
    ResetForm,
    Submit,
    /// Create finished; carries the created record
    Created(Employee),
    Updated,
    RequestDelete(String),
    DeleteConfirmed(String),
    Deleted(String),
    RequestFailed { op: Operation, message: String },
}

/// Side effect requested by [`update`]
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchAll,
    Create(Employee),
    Update(Employee),
    /// Blocking yes/no gate; only a yes leads to `Msg::DeleteConfirmed`
    Confirm { id: String, prompt: String },
    Delete(String),
    Notify(Notice),
}

/// Everything the view renders
///
/// Only [`update`] changes it. The form always owns its record: selecting
/// copies out of the list, resetting swaps in a new blank record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    employees: Vec<Employee>,
    form: Employee,
    mode: Mode,
    pending: Option<Pending>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn form(&self) -> &Employee {
        &self.form
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// False while a create/update/delete is in flight
    pub fn can_submit(&self) -> bool {
        self.pending.is_none()
    }

    fn reset_form(&mut self) {
        self.form = Employee::default();
        self.mode = Mode::IdleList;
    }
}

/// Apply `msg` to `state` and return the side effects to run, in order
pub fn update(state: &mut ViewState, msg: Msg) -> Vec<Command> {
    match msg {
        Msg::Load => vec![Command::FetchAll],

        Msg::ListLoaded(employees) => {
            state.employees = employees;
            vec![]
        }

        Msg::Select(id) => {
            let listed = state
                .employees
                .iter()
                .find(|e| e.is_persisted() && e.id == id);
            if let Some(record) = listed {
                state.form = record.clone();
                state.mode = Mode::Editing;
            } else {
                tracing::debug!(id = %id, "Selected employee is not in the list");
            }
            vec![]
        }

        Msg::Edit(field) => {
            match field {
                FormField::Name(v) => state.form.name = v,
                FormField::Position(v) => state.form.position = v,
                FormField::Office(v) => state.form.office = v,
                FormField::Salary(v) => state.form.salary = v,
            }
            state.mode = Mode::Editing;
            vec![]
        }

        Msg::ResetForm => {
            state.reset_form();
            vec![]
        }

        Msg::Submit => {
            if !state.can_submit() {
                tracing::debug!(pending = ?state.pending, "Submit ignored while a request is in flight");
                return vec![];
            }
            if state.form.is_persisted() {
                state.pending = Some(Pending::Update);
                vec![Command::Update(state.form.clone())]
            } else {
                state.pending = Some(Pending::Create);
                vec![Command::Create(state.form.clone())]
            }
        }

        Msg::Created(_) | Msg::Updated => {
            let message = if matches!(msg, Msg::Updated) {
                MSG_UPDATED
            } else {
                MSG_CREATED
            };
            state.pending = None;
            state.reset_form();
            vec![Command::Notify(Notice::success(message)), Command::FetchAll]
        }

        Msg::RequestDelete(id) => {
            if !state.can_submit() {
                return vec![];
            }
            vec![Command::Confirm {
                id,
                prompt: DELETE_PROMPT.to_string(),
            }]
        }

        Msg::DeleteConfirmed(id) => {
            if !state.can_submit() {
                return vec![];
            }
            state.pending = Some(Pending::Delete);
            vec![Command::Delete(id)]
        }

        Msg::Deleted(id) => {
            state.pending = None;
            // A form still holding the deleted record would update a ghost
            if state.form.id == id {
                state.reset_form();
            }
            vec![Command::Notify(Notice::success(MSG_DELETED)), Command::FetchAll]
        }

        Msg::RequestFailed { op, message } => {
            if op != Operation::Load {
                state.pending = None;
            }
            let what = match op {
                Operation::Load => "Could not load employees",
                Operation::Create => "Could not save employee",
                Operation::Update => "Could not update employee",
                Operation::Delete => "Could not delete employee",
            };
            vec![Command::Notify(Notice::failure(format!("{what}: {message}")))]
        }
    }
}
