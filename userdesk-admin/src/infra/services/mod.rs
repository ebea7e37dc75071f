// Service abstractions the domains talk to instead of the raw HTTP client

pub mod user_management;

pub use user_management::{UserAdminApiAdapter, UserAdminService};
