//! CLI command implementations

pub mod ports;
pub mod run;
pub mod save;
pub mod search;
pub mod select;
pub mod settings;
pub mod show;

use std::sync::Arc;

use anyhow::Result;

use crate::api::HttpBackend;
use crate::cli::args::{Cli, Commands};
use crate::config::AppConfig;
use crate::controller::{ConsoleState, DeviceConsole};
use crate::storage::FileStore;

/// Execute a CLI command
pub async fn execute_command(command: Commands, cli: &Cli) -> Result<()> {
    let console = build_console(cli)?;

    match command {
        Commands::Settings => settings::execute_settings_command(&console).await,
        Commands::Show { device_id } => {
            show::execute_show_command(&console, device_id.as_deref()).await
        }
        Commands::Save {
            device_id,
            name,
            port,
            baud,
            timeout,
            password,
            admin_password,
            codepage,
            max_attempt,
        } => {
            save::execute_save_command(
                &console,
                save::SaveArgs {
                    device_id,
                    name,
                    port,
                    baud,
                    timeout,
                    password,
                    admin_password,
                    codepage,
                    max_attempt,
                },
            )
            .await
        }
        Commands::Ports => ports::execute_ports_command(&console).await,
        Commands::Search => search::execute_search_command(&console).await,
        Commands::Run {
            command,
            params,
            device_id,
        } => run::execute_run_command(&console, &command, &params, device_id.as_deref()).await,
        Commands::Select { device_id } => {
            select::execute_select_command(&console, &device_id).await
        }
    }
}

fn build_console(cli: &Cli) -> Result<DeviceConsole> {
    let config = AppConfig::default();
    let server_url = cli
        .server_url
        .clone()
        .unwrap_or_else(|| config.server_url.clone());

    let backend = Arc::new(HttpBackend::new(&server_url)?);
    let store = Arc::new(FileStore::default_location()?);
    Ok(DeviceConsole::new(backend, store))
}

/// Print the notification banners an operation left behind
pub fn report_notifications(state: &ConsoleState) {
    if state.notifications.alert {
        println!("❌ {}", state.notifications.error_msg);
    }
    if state.notifications.success {
        println!("✅ {}", state.notifications.success_msg);
    }
}
