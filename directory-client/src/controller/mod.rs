//! UI Controller
//!
//! [`state`] holds the view state and the pure `update` function;
//! [`runtime`] executes the commands it emits against an [`EmployeeProxy`]
//! and a [`Ui`].
//!
//! [`EmployeeProxy`]: crate::EmployeeProxy

pub mod runtime;
pub mod state;

pub use runtime::{Controller, Ui};
pub use state::{
    Command, FormField, Mode, Msg, Notice, NoticeLevel, Operation, Pending, ViewState, update,
};
