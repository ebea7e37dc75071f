//! User record models shared by the Userdesk crates.
//!
//! The remote API exposes two projections of the same server-side record:
//! [`UserSummary`] for the collection endpoint and [`UserDetail`] for the
//! single-record endpoint. They are kept as separate types on purpose.

pub mod error;
pub mod ids;
pub mod routes;
pub mod user;

pub use error::ModelError;
pub use ids::UserId;
pub use user::{Address, NewUser, UserDetail, UserSummary};
