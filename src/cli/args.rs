//! Command line argument parsing

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "kkmctl")]
#[command(about = "🧾 Fiscal Registrar Management Console - configure and drive KKM devices through the management service")]
pub struct Cli {
    /// KKM service URL
    #[arg(
        long,
        global = true,
        help = "KKM service URL (default: http://localhost:8080)"
    )]
    pub server_url: Option<String>,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease logging verbosity (only errors)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Show the configured device registry and the active selection
    Settings,
    /// Show one device profile (defaults to the active device)
    Show {
        /// Device id to show
        device_id: Option<String>,
    },
    /// Create or update a device profile
    ///
    /// Numeric options are accepted as text and coerced before
    /// transmission, the way the service expects them.
    Save {
        /// Device id to update (a new id is generated when omitted)
        #[arg(long)]
        device_id: Option<String>,
        /// Display label
        #[arg(long)]
        name: Option<String>,
        /// Serial port name, e.g. /dev/ttyUSB0 or com3
        #[arg(long)]
        port: Option<String>,
        /// Serial bit rate (must be a standard rate)
        #[arg(long)]
        baud: Option<String>,
        /// Exchange timeout in milliseconds
        #[arg(long)]
        timeout: Option<String>,
        /// Operator password
        #[arg(long)]
        password: Option<String>,
        /// Administrator password
        #[arg(long)]
        admin_password: Option<String>,
        /// Device text codec, e.g. cp1251
        #[arg(long)]
        codepage: Option<String>,
        /// Retry budget used by the service
        #[arg(long)]
        max_attempt: Option<String>,
    },
    /// List serial ports known to the service
    Ports,
    /// Sweep ports for attached registrar devices
    Search,
    /// Run a registrar command on the active device
    Run {
        /// Command identifier understood by the service
        command: String,
        /// Positional command parameters
        #[arg(long, value_delimiter = ',', default_value = "30")]
        params: Vec<i64>,
        /// Run against this device instead of the active one
        #[arg(long)]
        device_id: Option<String>,
    },
    /// Select the active device and persist the choice
    Select {
        /// Device id to make active
        device_id: String,
    },
}
