use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::labels::labelled_enum;


/// Operating modes the host platform knows about.
///
/// Only `Off`, `Cool` and `Heat` are supported by the controller, see
/// [`SUPPORTED_HVAC_MODES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, EnumString, Display, AsRefStr, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HvacMode {
    Off,
    Heat,
    Cool,
    HeatCool,
    Auto,
    Dry,
    FanOnly
}

impl Default for HvacMode {
    fn default() -> Self {
        Self::Off
    }
}

pub const SUPPORTED_HVAC_MODES: [HvacMode; 3] = [HvacMode::Off, HvacMode::Cool, HvacMode::Heat];


labelled_enum! {
    /// Indoor unit fan speed.
    FanSpeed, fallback = Auto, default = Auto {
        Auto => ("Auto", "auto"),
        Low => ("Low", "low"),
        Medium => ("Medium", "med"),
        High => ("High", "high"),
    }
}

labelled_enum! {
    /// Vertical vane position.
    VerticalSwing, fallback = Auto, default = MiddleTop {
        Auto => ("Auto", "auto"),
        Top => ("Top", "top"),
        MiddleTop => ("Middle Top", "middle_top"),
        Middle => ("Middle", "middle"),
        MiddleBottom => ("Middle Bottom", "middle_bottom"),
        Bottom => ("Bottom", "bottom"),
        Swing => ("Swing", "swing"),
    }
}

labelled_enum! {
    /// Horizontal vane position.
    HorizontalSwing, fallback = NotSet, default = Middle {
        NotSet => ("Not Set", "not_set"),
        Left => ("Left", "left"),
        MiddleLeft => ("Middle Left", "middle_left"),
        Middle => ("Middle", "middle"),
        MiddleRight => ("Middle Right", "middle_right"),
        Right => ("Right", "right"),
        Swing => ("Swing", "swing"),
    }
}
