use bitflags::bitflags;
use serde::Serialize;
use strum_macros::{EnumIter, EnumString};


bitflags! {
    /// Climate features an entity exposes to the host platform.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SupportedFeatures: u32 {
        const TARGET_TEMPERATURE    = 0b0001;
        const FAN_MODE              = 0b0010;
        const SWING_MODE            = 0b0100;
        const SWING_HORIZONTAL_MODE = 0b1000;
    }
}


/// The two integrations built on the controller proxy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumString, EnumIter)]
pub enum Integration {
    /// Temperature and fan only. Both vanes are always sent as `middle`.
    #[strum(serialize = "mitsubishi_airpump", serialize = "airpump")]
    AirPump,

    /// Temperature, fan and both vanes.
    #[strum(serialize = "mitsubishi_ilp_ir_control", serialize = "ilp")]
    IlpIrControl,
}

impl Integration {
    pub fn domain(self) -> &'static str {
        match self {
            Integration::AirPump => "mitsubishi_airpump",
            Integration::IlpIrControl => "mitsubishi_ilp_ir_control",
        }
    }

    /// Entity name, also used as the config entry title.
    pub fn name(self) -> &'static str {
        match self {
            Integration::AirPump => "Mitsubishi Air Pump",
            Integration::IlpIrControl => "Mitsubishi ILP IR Control",
        }
    }

    pub fn manufacturer(self) -> &'static str {
        match self {
            Integration::AirPump => "Mitsubishi Electric, integration @anttitane",
            Integration::IlpIrControl => "@anttitane",
        }
    }

    pub fn supported_features(self) -> SupportedFeatures {
        match self {
            Integration::AirPump => {
                SupportedFeatures::TARGET_TEMPERATURE | SupportedFeatures::FAN_MODE
            },
            Integration::IlpIrControl => SupportedFeatures::all(),
        }
    }

    pub fn unique_id(self, host: &str) -> String {
        format!("{}_{host}", self.domain())
    }

    pub fn device_info(self, host: &str) -> DeviceInfo {
        DeviceInfo {
            identifiers: (self.domain(), host.to_owned()),
            name: self.name(),
            manufacturer: self.manufacturer(),
            model: "Smart AC",
            sw_version: "1.0",
        }
    }
}


/// Groups the entity under a device in the host's device registry.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DeviceInfo {
    pub identifiers: (&'static str, String),
    pub name: &'static str,
    pub manufacturer: &'static str,
    pub model: &'static str,
    pub sw_version: &'static str,
}


#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_features() {
        let air_pump = Integration::AirPump.supported_features();
        assert!(air_pump.contains(SupportedFeatures::FAN_MODE));
        assert!(!air_pump.intersects(
            SupportedFeatures::SWING_MODE | SupportedFeatures::SWING_HORIZONTAL_MODE
        ));

        let ilp = Integration::IlpIrControl.supported_features();
        assert!(ilp.contains(SupportedFeatures::SWING_HORIZONTAL_MODE));
    }

    #[test]
    fn test_device_info() {
        let info = Integration::IlpIrControl.device_info("10.0.0.5");

        assert_eq!(info.identifiers, ("mitsubishi_ilp_ir_control", "10.0.0.5".to_owned()));
        assert_eq!(info.name, "Mitsubishi ILP IR Control");
        assert_eq!(info.model, "Smart AC");
        assert_eq!(
            Integration::IlpIrControl.unique_id("10.0.0.5"),
            "mitsubishi_ilp_ir_control_10.0.0.5"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(Integration::from_str("ilp").unwrap(), Integration::IlpIrControl);
        assert_eq!(Integration::from_str("mitsubishi_airpump").unwrap(), Integration::AirPump);
        assert!(Integration::from_str("daikin").is_err());
    }
}
