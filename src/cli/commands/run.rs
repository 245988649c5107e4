//! Run command implementation

use anyhow::Result;

use super::report_notifications;
use crate::controller::DeviceConsole;

pub async fn execute_run_command(
    console: &DeviceConsole,
    command: &str,
    params: &[i64],
    device_id: Option<&str>,
) -> Result<()> {
    console.load_settings().await;

    let state = console.state().await;
    let device = match device_id {
        Some(id) => id.to_string(),
        None => state.active_device.clone(),
    };
    if device.is_empty() {
        println!("⚠️  No active device - select one with 'kkmctl select <device-id>'");
        return Ok(());
    }

    println!("▶️  Running '{}' on {}...", command, device);
    console.run_command(&device, command, params).await;

    let state = console.state().await;
    report_notifications(&state);

    if !state.command_output.is_empty() {
        println!("{}", state.command_output);
    }
    if !state.kkm_error.is_empty() {
        println!("⚠️  Registrar reported: {}", state.kkm_error);
    }
    Ok(())
}
