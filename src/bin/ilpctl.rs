use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use ilpcontrol::{
    config::{ControllerConfig, DEFAULT_BASE_PATH, DEFAULT_PORT},
    controller::ControllerProxy,
    integration::Integration,
    protocol::{modes::HvacMode, transport::HttpTransport},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};


/// Send settings to a Mitsubishi ILP IR controller
///
/// Each given setting is applied in order and sends the full unit state,
/// the same way a UI change would. With no settings the default state is
/// sent once.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Host name or address of the controller
    #[arg(long, env = "ILP_HOST")]
    host: String,

    /// Controller port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Path prefix of the controller endpoints
    #[arg(long, default_value = DEFAULT_BASE_PATH)]
    base_path: String,

    /// Which integration to act as (ilp or airpump)
    #[arg(long, default_value = "ilp")]
    integration: Integration,

    /// Power mode: off, cool or heat
    #[arg(long)]
    mode: Option<HvacMode>,

    /// Target temperature in degrees Celsius
    #[arg(long, allow_negative_numbers = true)]
    temperature: Option<i32>,

    /// Fan speed label, e.g. "Medium"
    #[arg(long)]
    fan: Option<String>,

    /// Vertical vane label, e.g. "Middle Top"
    #[arg(long)]
    vertical: Option<String>,

    /// Horizontal vane label, e.g. "Not Set"
    #[arg(long)]
    horizontal: Option<String>,
}


#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let config = ControllerConfig {
        port: args.port,
        base_path: args.base_path,
    };

    let transport = Arc::new(HttpTransport::new());
    let mut proxy = ControllerProxy::new(args.integration, args.host, config, transport);
    let mut changed = false;

    if let Some(mode) = args.mode {
        proxy.set_power_mode(mode).await;
        changed = true;
    }

    if let Some(temperature) = args.temperature {
        proxy.set_target_temperature(temperature).await;
        changed = true;
    }

    if let Some(fan) = &args.fan {
        proxy.set_fan_speed(fan).await;
        changed = true;
    }

    if let Some(vertical) = &args.vertical {
        proxy.set_vertical_swing(vertical).await;
        changed = true;
    }

    if let Some(horizontal) = &args.horizontal {
        proxy.set_horizontal_swing(horizontal).await;
        changed = true;
    }

    if !changed {
        proxy.send_command().await;
    }

    info!(
        "{} at {}: mode={} temperature={}{} fan={}",
        proxy.name(),
        proxy.state().host(),
        proxy.hvac_mode(),
        proxy.target_temperature(),
        proxy.temperature_unit(),
        proxy.fan_mode()
    );

    Ok(())
}
