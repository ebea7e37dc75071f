use userdesk_admin::app::{self, AppConfig, AppError};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("userdesk_admin", LevelFilter::Debug)
        .init();
}

fn main() -> Result<(), AppError> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = AppConfig::from_environment();
    log::info!("Starting against {}", config.api_url());

    app::run(config)
}
