//! Select command implementation

use anyhow::Result;

use super::report_notifications;
use crate::controller::DeviceConsole;

pub async fn execute_select_command(console: &DeviceConsole, device_id: &str) -> Result<()> {
    console.load_settings().await;

    let state = console.state().await;
    if !state.registry.contains(device_id) {
        println!(
            "⚠️  Device '{}' is not in the registry - persisting the selection anyway",
            device_id
        );
    }

    console.select_active_device(device_id).await;

    let state = console.state().await;
    report_notifications(&state);
    println!("✅ Active device set to {}", device_id);
    Ok(())
}
