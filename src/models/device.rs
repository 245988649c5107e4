//! Registrar profile data models
//!
//! Wire field names follow the KKM service JSON (`deviceid`, `portconf`,
//! `kkmparam`, ...). Numeric fields may arrive as JSON strings when a
//! profile originates from an HTML form; deserialization accepts both,
//! and the serialized form sent to the service is always numeric.

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{KkmCtlError, Result};

/// Serial bit rates the service accepts for a registrar port
pub const STANDARD_BAUD_RATES: [i64; 10] = [
    2400, 4800, 9600, 19200, 38400, 57600, 115200, 230400, 460800, 921600,
];

/// Accept a JSON number or a numeric string (HTML form origin)
fn form_i64<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(i64),
        Str(String),
    }

    match NumOrStr::deserialize(deserializer)? {
        NumOrStr::Num(n) => Ok(n),
        NumOrStr::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// A configured registrar device profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Display label
    pub name: String,
    /// Stable unique identifier (UUID-shaped, opaque)
    #[serde(rename = "deviceid")]
    pub device_id: String,
    /// Serial line parameters
    #[serde(rename = "portconf")]
    pub port_config: PortConfig,
    /// Registrar exchange timeout, milliseconds
    #[serde(deserialize_with = "form_i64")]
    pub timeout: i64,
    /// Operator password
    #[serde(deserialize_with = "form_i64")]
    pub password: i64,
    /// Administrator password
    #[serde(rename = "adminpassword", deserialize_with = "form_i64")]
    pub admin_password: i64,
    /// Retry budget consumed by the service, not by this client
    #[serde(rename = "maxattempt", deserialize_with = "form_i64")]
    pub max_attempt: i64,
    /// Text codec identifier for the device
    pub codepage: String,
    /// Registration parameters, passed through to the service
    #[serde(rename = "kkmparam")]
    pub kkm_param: KkmParam,
}

/// Serial port configuration of a registrar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortConfig {
    /// Port name, e.g. `/dev/ttyUSB0` or `com3`
    pub name: String,
    /// Bit rate, one of [`STANDARD_BAUD_RATES`]
    #[serde(deserialize_with = "form_i64")]
    pub baud: i64,
    /// Per-byte read timeout, milliseconds
    #[serde(rename = "readtimeout", deserialize_with = "form_i64")]
    pub read_timeout: i64,
    /// Data bits
    #[serde(deserialize_with = "form_i64")]
    pub size: i64,
    /// Parity mode
    #[serde(deserialize_with = "form_i64")]
    pub parity: i64,
    /// Stop bits
    #[serde(rename = "stopbits", deserialize_with = "form_i64")]
    pub stop_bits: i64,
    /// Start bits; older service builds omit this field
    #[serde(rename = "startbits", default, deserialize_with = "form_i64")]
    pub start_bits: i64,
}

/// Registration record of a registrar (serial number, tax id, legal name).
/// Opaque to this client apart from numeric coercion of `lenline`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KkmParam {
    /// Registration number
    #[serde(rename = "kkmregnum")]
    pub reg_number: String,
    /// Factory serial number
    #[serde(rename = "kkmserialnum")]
    pub serial_number: String,
    /// Tax identifier
    pub inn: String,
    /// Legal entity name
    pub fname: String,
    /// Fiscal registration number
    pub rnm: String,
    /// Receipt line length, characters
    #[serde(rename = "lenline", deserialize_with = "form_i64")]
    pub len_line: i64,
}

impl DeviceProfile {
    /// New profile seeded with the service defaults
    pub fn with_defaults(device_id: &str) -> Self {
        Self {
            name: "new device".to_string(),
            device_id: device_id.to_string(),
            port_config: PortConfig {
                name: "/dev/ttyUSB0".to_string(),
                baud: 115200,
                read_timeout: 10,
                size: 8,
                parity: 0,
                stop_bits: 1,
                start_bits: 1,
            },
            timeout: 5000,
            password: 1,
            admin_password: 30,
            max_attempt: 12,
            codepage: "cp1251".to_string(),
            kkm_param: KkmParam {
                reg_number: String::new(),
                serial_number: String::new(),
                inn: String::new(),
                fname: String::new(),
                rnm: String::new(),
                len_line: 32,
            },
        }
    }
}

/// A device profile as it leaves an HTML-style form: every field text.
///
/// This is the coercion boundary required by the service — numeric fields
/// must be transmitted as numbers, so conversion to [`DeviceProfile`]
/// validates and parses each one.
#[derive(Debug, Clone)]
pub struct ProfileForm {
    pub name: String,
    pub device_id: String,
    pub admin_password: String,
    pub password: String,
    pub codepage: String,
    pub max_attempt: String,
    pub timeout: String,
    pub port: String,
    pub baud: String,
    pub read_timeout: String,
    pub size: String,
    pub parity: String,
    pub stop_bits: String,
    pub start_bits: String,
    pub reg_number: String,
    pub serial_number: String,
    pub inn: String,
    pub fname: String,
    pub rnm: String,
    pub len_line: String,
}

impl ProfileForm {
    /// Empty form pre-filled with the service defaults
    pub fn with_defaults(device_id: &str) -> Self {
        Self::from_profile(&DeviceProfile::with_defaults(device_id))
    }

    /// Form mirroring an existing profile
    pub fn from_profile(profile: &DeviceProfile) -> Self {
        Self {
            name: profile.name.clone(),
            device_id: profile.device_id.clone(),
            admin_password: profile.admin_password.to_string(),
            password: profile.password.to_string(),
            codepage: profile.codepage.clone(),
            max_attempt: profile.max_attempt.to_string(),
            timeout: profile.timeout.to_string(),
            port: profile.port_config.name.clone(),
            baud: profile.port_config.baud.to_string(),
            read_timeout: profile.port_config.read_timeout.to_string(),
            size: profile.port_config.size.to_string(),
            parity: profile.port_config.parity.to_string(),
            stop_bits: profile.port_config.stop_bits.to_string(),
            start_bits: profile.port_config.start_bits.to_string(),
            reg_number: profile.kkm_param.reg_number.clone(),
            serial_number: profile.kkm_param.serial_number.clone(),
            inn: profile.kkm_param.inn.clone(),
            fname: profile.kkm_param.fname.clone(),
            rnm: profile.kkm_param.rnm.clone(),
            len_line: profile.kkm_param.len_line.to_string(),
        }
    }

    /// Coerce every numeric field and build the typed profile.
    ///
    /// Fails with a configuration error on non-numeric text or a baud rate
    /// outside [`STANDARD_BAUD_RATES`].
    pub fn into_profile(self) -> Result<DeviceProfile> {
        let baud = parse_numeric("baud", &self.baud)?;
        if !STANDARD_BAUD_RATES.contains(&baud) {
            return Err(KkmCtlError::Config(format!(
                "baud {} is not a standard rate (expected one of {:?})",
                baud, STANDARD_BAUD_RATES
            )));
        }

        Ok(DeviceProfile {
            name: self.name,
            device_id: self.device_id,
            port_config: PortConfig {
                name: self.port,
                baud,
                read_timeout: parse_numeric("readtimeout", &self.read_timeout)?,
                size: parse_numeric("size", &self.size)?,
                parity: parse_numeric("parity", &self.parity)?,
                stop_bits: parse_numeric("stopbits", &self.stop_bits)?,
                start_bits: parse_numeric("startbits", &self.start_bits)?,
            },
            timeout: parse_numeric("timeout", &self.timeout)?,
            password: parse_numeric("password", &self.password)?,
            admin_password: parse_numeric("adminpassword", &self.admin_password)?,
            max_attempt: parse_numeric("maxattempt", &self.max_attempt)?,
            codepage: self.codepage,
            kkm_param: KkmParam {
                reg_number: self.reg_number,
                serial_number: self.serial_number,
                inn: self.inn,
                fname: self.fname,
                rnm: self.rnm,
                len_line: parse_numeric("lenline", &self.len_line)?,
            },
        })
    }
}

fn parse_numeric(field: &str, value: &str) -> Result<i64> {
    value.trim().parse().map_err(|_| {
        KkmCtlError::Config(format!("field '{}' must be numeric, got '{}'", field, value))
    })
}
