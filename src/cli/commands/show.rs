//! Show command implementation

use anyhow::Result;

use super::report_notifications;
use crate::controller::DeviceConsole;

pub async fn execute_show_command(console: &DeviceConsole, device_id: Option<&str>) -> Result<()> {
    console.load_settings().await;

    let state = console.state().await;
    report_notifications(&state);

    let id = match device_id {
        Some(id) => id.to_string(),
        None => state.active_device.clone(),
    };
    if id.is_empty() {
        println!("⚠️  No device id given and no active device selected");
        return Ok(());
    }

    match console.get_profile(&id).await {
        Some(profile) => {
            println!("🧾 {} ({})", profile.name, profile.device_id);
            println!(
                "   port: {} @ {} (read timeout {} ms)",
                profile.port_config.name, profile.port_config.baud, profile.port_config.read_timeout
            );
            println!(
                "   timeout: {} ms, retries: {}, codepage: {}",
                profile.timeout, profile.max_attempt, profile.codepage
            );
            println!(
                "   passwords: operator {}, admin {}",
                profile.password, profile.admin_password
            );
            if !profile.kkm_param.serial_number.is_empty() {
                println!(
                    "   registration: serial {}, inn {}, {}",
                    profile.kkm_param.serial_number, profile.kkm_param.inn, profile.kkm_param.fname
                );
            }
        }
        None => println!("❓ Device '{}' is not configured", id),
    }

    Ok(())
}
