use std::sync::Arc;

use iced::{Size, Theme};
use thiserror::Error;

use crate::infra::api_client::ApiError;
use crate::state::State;
use crate::{update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create the user service: {0}")]
    Service(#[from] ApiError),

    #[error(transparent)]
    Iced(#[from] iced::Error),
}

/// Build the admin application from `config` and run it until the window
/// closes.
pub fn run(config: AppConfig) -> Result<(), AppError> {
    let service = bootstrap::build_service(&config)?;

    iced::application(
        move || bootstrap::boot(Arc::clone(&service)),
        update::update,
        view::view,
    )
    .title("User Management")
    .theme(app_theme)
    .window(iced::window::Settings {
        size: Size::new(1100.0, 720.0),
        resizable: true,
        decorations: true,
        ..Default::default()
    })
    .run()?;

    Ok(())
}

fn app_theme(_: &State) -> Theme {
    crate::domains::ui::theme::AdminTheme::theme()
}
