//! Settings command implementation

use anyhow::Result;

use super::report_notifications;
use crate::controller::DeviceConsole;

pub async fn execute_settings_command(console: &DeviceConsole) -> Result<()> {
    println!("🔄 Loading device registry...");
    console.load_settings().await;

    let state = console.state().await;
    report_notifications(&state);

    if state.registry.is_empty() {
        println!("📭 No devices configured");
        return Ok(());
    }

    println!("📋 Configured devices:");
    for id in state.registry.device_ids() {
        let marker = if *id == state.active_device {
            "▶"
        } else {
            " "
        };
        if let Some(profile) = state.registry.get(id) {
            println!(
                " {} {} - {} ({} @ {})",
                marker, id, profile.name, profile.port_config.name, profile.port_config.baud
            );
        }
    }

    if state.active_device.is_empty() {
        println!("⚠️  No active device selected");
    }

    Ok(())
}
