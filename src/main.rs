mod config;
mod state;
mod ui;

use anyhow::Context;
use config::AppConfig;
use env_logger::Env;
use state::{AppState, SystemClock};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = AppConfig::load_or_default().context("no se pudo cargar la configuración")?;
    let title = config.company_name().to_string();
    let state = AppState::from_config(config, Box::new(SystemClock))
        .map_err(config::ConfigError::from)
        .context("el menú de navegación no es válido")?;

    dashboard_shell::run(&title, move || Box::new(state))
        .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
