//! Test doubles for running the application without a live API.

pub mod stubs;

pub use stubs::StubUserAdminService;
