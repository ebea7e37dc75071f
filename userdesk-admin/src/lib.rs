//! Desktop administration client for user records kept behind a REST API.
//!
//! The client lists users, shows one user's details, and creates, edits and
//! deletes users. State is split per screen under [`domains`]; remote calls go
//! through [`infra::services::UserAdminService`].

pub mod app;
pub mod common;
pub mod domains;
pub mod infra;
pub mod state;
pub mod update;
pub mod view;
