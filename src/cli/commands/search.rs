//! Search command implementation

use anyhow::Result;

use super::report_notifications;
use crate::controller::DeviceConsole;

pub async fn execute_search_command(console: &DeviceConsole) -> Result<()> {
    println!("🔍 Sweeping ports for registrar devices (this can take a while)...");
    console.discover_devices().await;

    let state = console.state().await;
    report_notifications(&state);

    for candidate in &state.found_devices {
        println!(
            "   📠 {} on {} @ {}",
            candidate.device, candidate.port, candidate.baud
        );
    }
    Ok(())
}
