use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use chroma_core::commands::effect;
use chroma_core::{ChromaDevice, DriverConfig, LedTarget, StorageTarget};

#[derive(Parser, Debug)]
#[command(author, version, about = "Razer mouse lighting control (Pure Rust)", long_about = None)]
struct Args {
    /// Write the setting to on-device storage
    #[arg(long, global = true)]
    persist: bool,

    /// LED region to target (config file or logo when omitted)
    #[arg(long, global = true, value_enum)]
    led: Option<Led>,

    /// Load defaults from a TOML config file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show device type, firmware version, and serial
    Info,
    /// Set the logo lighting effect
    LogoEffect { effect: Effect },
    /// Set the logo to a static color, hex RRGGBB
    LogoRgb { rgb: String },
    /// Set LED brightness (0-255, config file value when omitted)
    Brightness { value: Option<u8> },
    /// Turn the LED on or off
    LedState { state: Switch },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Led {
    ScrollWheel,
    Battery,
    Logo,
    Backlight,
}

impl From<Led> for LedTarget {
    fn from(led: Led) -> Self {
        match led {
            Led::ScrollWheel => LedTarget::ScrollWheel,
            Led::Battery => LedTarget::Battery,
            Led::Logo => LedTarget::Logo,
            Led::Backlight => LedTarget::Backlight,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Effect {
    Static,
    Blinking,
    Breathing,
    Spectrum,
}

impl Effect {
    fn code(self) -> u8 {
        match self {
            Effect::Static => effect::STATIC,
            Effect::Blinking => effect::BLINKING,
            Effect::Breathing => effect::BREATHING,
            Effect::Spectrum => effect::SPECTRUM,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Switch {
    On,
    Off,
}

fn parse_rgb(hex: &str) -> anyhow::Result<[u8; 3]> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        bail!("expected 6 hex digits (RRGGBB), got {:?}", hex);
    }
    let mut rgb = [0u8; 3];
    for (i, byte) in rgb.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .with_context(|| format!("invalid hex color {hex:?}"))?;
    }
    Ok(rgb)
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => {
            DriverConfig::load_from_file(path).with_context(|| format!("loading {path}"))?
        }
        None => DriverConfig::default(),
    };

    let storage = if args.persist || config.persist {
        StorageTarget::VarStore
    } else {
        StorageTarget::NoStore
    };
    let led = args.led.map(LedTarget::from).unwrap_or(config.led);

    let mut device = ChromaDevice::open().context("no supported mouse found")?;
    if let Some(id) = config.transaction_id {
        device.set_transaction_id(id);
    }
    info!(device = device.device_type(), "connected");

    match args.command {
        Command::Info => {
            println!("Device:   {}", device.device_type());
            println!("Firmware: {}", device.firmware_version()?);
            println!("Serial:   {}", device.serial()?);
        }
        Command::LogoEffect { effect } => {
            device.set_led_effect(storage, led, effect.code())?;
        }
        Command::LogoRgb { rgb } => {
            let rgb = parse_rgb(&rgb)?;
            device.set_led_rgb(storage, led, &rgb)?;
        }
        Command::Brightness { value } => {
            let value = value
                .or(config.brightness)
                .context("no brightness given on the command line or in the config")?;
            device.set_led_brightness(storage, led, value)?;
        }
        Command::LedState { state } => {
            device.set_led_state(storage, led, matches!(state, Switch::On))?;
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(if args.verbose {
                    tracing::Level::DEBUG.into()
                } else {
                    tracing::Level::INFO.into()
                })
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    if let Err(e) = run(args) {
        error!("Error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_rgb("ff0080").unwrap(), [0xFF, 0x00, 0x80]);
        assert_eq!(parse_rgb("#00FF00").unwrap(), [0x00, 0xFF, 0x00]);
        assert!(parse_rgb("ff00").is_err());
        assert!(parse_rgb("gggggg").is_err());
    }
}
