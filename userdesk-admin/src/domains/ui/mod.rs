//! Presentation layer: theme and per-screen views.

pub mod theme;
pub mod views;
