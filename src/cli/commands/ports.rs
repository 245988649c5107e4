//! Ports command implementation

use anyhow::Result;

use super::report_notifications;
use crate::controller::DeviceConsole;

pub async fn execute_ports_command(console: &DeviceConsole) -> Result<()> {
    println!("🔍 Scanning serial ports...");
    console.discover_ports().await;

    let state = console.state().await;
    report_notifications(&state);

    if state.ports.is_empty() {
        return Ok(());
    }

    println!("🔌 Ports on the service host ({}):", state.platform);
    for port in &state.ports {
        println!("   {}", port);
    }
    Ok(())
}
