//! Product id to display name lookup.

use crate::protocol::constants::pid;

pub const UNKNOWN_DEVICE: &str = "Unknown Device";

/// Whether a product id belongs to a mouse this crate knows how to drive.
pub fn is_known(product_id: u16) -> bool {
    device_name(product_id) != UNKNOWN_DEVICE
}

/// Marketing name for a product id.
pub fn device_name(product_id: u16) -> &'static str {
    match product_id {
        pid::OROCHI_2011 => "Razer Orochi 2011",
        pid::DEATHADDER_3_5G => "Razer DeathAdder 3.5G",
        pid::ABYSSUS_1800 => "Razer Abyssus 1800",
        pid::MAMBA_2012_WIRED => "Razer Mamba 2012 (Wired)",
        pid::MAMBA_2012_WIRELESS => "Razer Mamba 2012 (Wireless)",
        pid::NAGA_2012 => "Razer Naga 2012",
        pid::IMPERATOR => "Razer Imperator 2012",
        pid::OUROBOROS => "Razer Ouroboros",
        pid::TAIPAN => "Razer Taipan",
        pid::NAGA_HEX_RED => "Razer Naga Hex (Red)",
        pid::DEATHADDER_2013 => "Razer DeathAdder 2013",
        pid::DEATHADDER_1800 => "Razer Deathadder 1800",
        pid::OROCHI_2013 => "Razer Orochi 2013",
        pid::NAGA_2014 => "Razer Naga 2014",
        pid::NAGA_HEX => "Razer Naga Hex",
        pid::ABYSSUS => "Razer Abyssus 2014",
        pid::DEATHADDER_CHROMA => "Razer DeathAdder Chroma",
        pid::MAMBA_WIRED => "Razer Mamba (Wired)",
        pid::MAMBA_WIRELESS => "Razer Mamba (Wireless)",
        pid::MAMBA_TE_WIRED => "Razer Mamba Tournament Edition",
        pid::OROCHI_CHROMA => "Razer Orochi (Wired)",
        pid::DIAMONDBACK_CHROMA => "Razer Diamondback Chroma",
        pid::NAGA_HEX_V2 => "Razer Naga Hex V2",
        pid::NAGA_CHROMA => "Razer Naga Chroma",
        pid::DEATHADDER_3500 => "Razer DeathAdder 3500",
        pid::LANCEHEAD_WIRED => "Razer Lancehead (Wired)",
        pid::LANCEHEAD_WIRELESS => "Razer Lancehead (Wireless)",
        pid::ABYSSUS_V2 => "Razer Abyssus V2",
        pid::DEATHADDER_ELITE => "Razer DeathAdder Elite",
        pid::ABYSSUS_2000 => "Razer Abyssus 2000",
        pid::LANCEHEAD_TE_WIRED => "Razer Lancehead Tournament Edition",
        pid::BASILISK => "Razer Basilisk",
        pid::NAGA_TRINITY => "Razer Naga Trinity",
        pid::ABYSSUS_ELITE_DVA_EDITION => "Razer Abyssus Elite (D.Va Edition)",
        pid::ABYSSUS_ESSENTIAL => "Razer Abyssus Essential",
        pid::MAMBA_ELITE => "Razer Mamba Elite",
        pid::DEATHADDER_ESSENTIAL => "Razer Deathadder Essential",
        pid::LANCEHEAD_WIRELESS_RECEIVER => "Razer Lancehead Wireless (Receiver)",
        pid::LANCEHEAD_WIRELESS_WIRED => "Razer Lancehead Wireless (Wired)",
        pid::DEATHADDER_ESSENTIAL_WHITE_EDITION => "Razer DeathAdder Essential (White Edition)",
        pid::MAMBA_WIRELESS_RECEIVER => "Razer Mamba Wireless (Receiver)",
        pid::MAMBA_WIRELESS_WIRED => "Razer Mamba Wireless (Wired)",
        pid::VIPER => "Razer Viper",
        pid::VIPER_ULTIMATE_WIRED => "Razer Viper Ultimate (Wired)",
        pid::VIPER_ULTIMATE_WIRELESS => "Razer Viper Ultimate (Wireless)",
        pid::DEATHADDER_V2 => "Razer Deathadder V2",
        _ => UNKNOWN_DEVICE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(device_name(pid::VIPER), "Razer Viper");
        assert_eq!(
            device_name(pid::LANCEHEAD_WIRELESS_RECEIVER),
            "Razer Lancehead Wireless (Receiver)"
        );
        assert_eq!(device_name(pid::ABYSSUS), "Razer Abyssus 2014");
    }

    #[test]
    fn test_unknown_pid() {
        assert_eq!(device_name(0xFFFF), UNKNOWN_DEVICE);
        assert!(!is_known(0xFFFF));
        assert!(is_known(pid::BASILISK));
    }
}
