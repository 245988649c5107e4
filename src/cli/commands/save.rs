//! Save command implementation
//!
//! Builds a profile form from the existing profile (or the service
//! defaults for a new device), overlays the provided flags as raw text,
//! and lets the controller coerce and push it.

use anyhow::Result;

use super::report_notifications;
use crate::controller::DeviceConsole;
use crate::models::ProfileForm;

pub struct SaveArgs {
    pub device_id: Option<String>,
    pub name: Option<String>,
    pub port: Option<String>,
    pub baud: Option<String>,
    pub timeout: Option<String>,
    pub password: Option<String>,
    pub admin_password: Option<String>,
    pub codepage: Option<String>,
    pub max_attempt: Option<String>,
}

pub async fn execute_save_command(console: &DeviceConsole, args: SaveArgs) -> Result<()> {
    console.load_settings().await;

    let device_id = args
        .device_id
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let mut form = match console.get_profile(&device_id).await {
        Some(profile) => ProfileForm::from_profile(&profile),
        None => {
            println!("🆕 Creating new device profile {}", device_id);
            ProfileForm::with_defaults(&device_id)
        }
    };

    if let Some(name) = args.name {
        form.name = name;
    }
    if let Some(port) = args.port {
        form.port = port;
    }
    if let Some(baud) = args.baud {
        form.baud = baud;
    }
    if let Some(timeout) = args.timeout {
        form.timeout = timeout;
    }
    if let Some(password) = args.password {
        form.password = password;
    }
    if let Some(admin_password) = args.admin_password {
        form.admin_password = admin_password;
    }
    if let Some(codepage) = args.codepage {
        form.codepage = codepage;
    }
    if let Some(max_attempt) = args.max_attempt {
        form.max_attempt = max_attempt;
    }

    println!("💾 Saving device profile...");
    console.save_settings(form).await;

    let state = console.state().await;
    report_notifications(&state);
    Ok(())
}
