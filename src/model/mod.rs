pub mod employee;
pub mod role;
pub mod schedule;
pub mod session;
