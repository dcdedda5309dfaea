//! TOML driver configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::commands::{LedTarget, StorageTarget};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Defaults applied by `chromactl` when flags are not given.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Correlation byte for outgoing requests; the protocol default when
    /// absent.
    pub transaction_id: Option<u8>,
    /// Write settings to on-device varstore.
    #[serde(default)]
    pub persist: bool,
    /// LED region commands target by default.
    #[serde(default)]
    pub led: LedTarget,
    /// Default brightness when the command line gives none.
    pub brightness: Option<u8>,
}

impl DriverConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: DriverConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn storage(&self) -> StorageTarget {
        if self.persist {
            StorageTarget::VarStore
        } else {
            StorageTarget::NoStore
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip() {
        let config = DriverConfig {
            transaction_id: Some(0x1F),
            persist: true,
            led: LedTarget::Backlight,
            brightness: Some(0x80),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: DriverConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.transaction_id, Some(0x1F));
        assert!(parsed.persist);
        assert_eq!(parsed.led, LedTarget::Backlight);
        assert_eq!(parsed.brightness, Some(0x80));
    }

    #[test]
    fn test_missing_fields_default() {
        let parsed: DriverConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.transaction_id, None);
        assert!(!parsed.persist);
        assert_eq!(parsed.led, LedTarget::Logo);
        assert_eq!(parsed.storage(), StorageTarget::NoStore);
    }

    #[test]
    fn test_led_kebab_case_names() {
        let parsed: DriverConfig = toml::from_str("led = \"scroll-wheel\"").unwrap();
        assert_eq!(parsed.led, LedTarget::ScrollWheel);
    }
}
