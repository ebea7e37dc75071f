//! Infrastructure: HTTP client, service adapters, request tracking and test
//! doubles.

pub mod api_client;
pub mod requests;
pub mod services;
pub mod testing;
