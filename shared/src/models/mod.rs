//! Data models shared between server and client

pub mod employee;

pub use employee::{Employee, EmployeeCreate, EmployeeUpdate, NewEmployee};
