use crate::protocol::{
    command::CommandBody,
    modes::{FanSpeed, HorizontalSwing, HvacMode, VerticalSwing},
};


pub const DEFAULT_TARGET_TEMPERATURE: i32 = 21;


/// Desired settings of one remote unit.
///
/// This is only what was last asked for. Nothing is ever read back from
/// the controller, so it can differ from what the unit is actually doing.
/// Fields are only written by `ControllerProxy`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitState {
    host: String,

    /// Always one of `SUPPORTED_HVAC_MODES`.
    pub(crate) power_mode: HvacMode,

    /// Degrees Celsius, unbounded.
    pub(crate) target_temperature: i32,

    pub(crate) fan_speed: FanSpeed,

    pub(crate) vertical_swing: VerticalSwing,

    pub(crate) horizontal_swing: HorizontalSwing,
}

impl UnitState {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            power_mode: HvacMode::Off,
            target_temperature: DEFAULT_TARGET_TEMPERATURE,
            fan_speed: FanSpeed::default(),
            vertical_swing: VerticalSwing::default(),
            horizontal_swing: HorizontalSwing::default(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn power_mode(&self) -> HvacMode {
        self.power_mode
    }

    pub fn target_temperature(&self) -> i32 {
        self.target_temperature
    }

    pub fn fan_speed(&self) -> FanSpeed {
        self.fan_speed
    }

    pub fn vertical_swing(&self) -> VerticalSwing {
        self.vertical_swing
    }

    pub fn horizontal_swing(&self) -> HorizontalSwing {
        self.horizontal_swing
    }

    pub fn command_body(&self) -> CommandBody {
        CommandBody {
            temperature: self.target_temperature,
            fan_speed: self.fan_speed,
            vertical_mode: self.vertical_swing,
            horizontal_mode: self.horizontal_swing,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = UnitState::new("10.0.0.5");

        assert_eq!(state.host(), "10.0.0.5");
        assert_eq!(state.power_mode(), HvacMode::Off);
        assert_eq!(state.target_temperature(), 21);
        assert_eq!(state.fan_speed(), FanSpeed::Auto);
        assert_eq!(state.vertical_swing(), VerticalSwing::MiddleTop);
        assert_eq!(state.horizontal_swing(), HorizontalSwing::Middle);
    }

    #[test]
    fn test_command_body() {
        let mut state = UnitState::new("10.0.0.5");
        state.target_temperature = -3;
        state.fan_speed = FanSpeed::High;

        let body = serde_json::to_value(state.command_body()).unwrap();
        assert_eq!(body, serde_json::json!({
            "temperature": -3,
            "fan_speed": "high",
            "vertical_mode": "middle_top",
            "horizontal_mode": "middle"
        }));
    }
}
