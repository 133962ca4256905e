use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};

use crate::{
    config::ControllerConfig,
    error::Result,
    integration::{DeviceInfo, Integration, SupportedFeatures},
    protocol::{
        command::{command_url, CommandBody},
        labels::Labelled,
        modes::{FanSpeed, HorizontalSwing, HvacMode, VerticalSwing, SUPPORTED_HVAC_MODES},
        transport::Transport,
    },
    unit::UnitState,
};


pub const TEMPERATURE_UNIT: &str = "°C";


/// How a setter treats input it doesn't recognise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validation {
    /// Reject with a warning. State is left alone and nothing is sent.
    Strict,

    /// Substitute the field's fallback value.
    Lenient,
}

impl Validation {
    fn resolve<T: Labelled>(self, label: &str) -> Option<T> {
        match self {
            Validation::Strict => T::from_display(label),
            Validation::Lenient => Some(T::from_display_or_fallback(label)),
        }
    }

    /// Check `value` against the values a field accepts.
    fn accept<T: Copy + PartialEq>(self, value: T, supported: &[T], fallback: T) -> Option<T> {
        if supported.contains(&value) {
            return Some(value);
        }

        match self {
            Validation::Strict => None,
            Validation::Lenient => Some(fallback),
        }
    }
}

pub const POWER_MODE_VALIDATION: Validation = Validation::Strict;
pub const FAN_SPEED_VALIDATION: Validation = Validation::Lenient;
pub const SWING_VALIDATION: Validation = Validation::Lenient;


/// Holds the desired state of one remote unit and pushes the whole of it
/// to the controller after every accepted change.
///
/// Setters never fail. A rejected value is logged as a warning, a failed
/// delivery as an error, and in neither case is the state rolled back.
///
/// Setters take `&mut self`, so dispatches from one proxy never overlap.
/// Hosts sharing a proxy between tasks wrap it in a `tokio::sync::Mutex`
/// (see [`crate::setup::SharedController`]).
pub struct ControllerProxy {
    integration: Integration,
    config: ControllerConfig,
    state: UnitState,
    transport: Arc<dyn Transport>,
}

impl ControllerProxy {
    pub fn new(
        integration: Integration,
        host: impl Into<String>,
        config: ControllerConfig,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let state = UnitState::new(host);
        debug!("Initializing {} entity for {}", integration.name(), state.host());

        Self {
            integration,
            config,
            state,
            transport,
        }
    }

    pub fn state(&self) -> &UnitState {
        &self.state
    }

    pub fn integration(&self) -> Integration {
        self.integration
    }

    /// Modes outside `SUPPORTED_HVAC_MODES` are rejected.
    pub async fn set_power_mode(&mut self, mode: HvacMode) {
        let accepted = POWER_MODE_VALIDATION.accept(mode, &SUPPORTED_HVAC_MODES, HvacMode::Off);
        let Some(mode) = accepted else {
            warn!("Invalid HVAC mode: {mode}");
            return;
        };

        self.state.power_mode = mode;
        self.send_command().await;
    }

    pub async fn set_target_temperature(&mut self, value: i32) {
        self.state.target_temperature = value;
        self.send_command().await;
    }

    pub async fn set_fan_speed(&mut self, label: &str) {
        let Some(fan_speed) = FAN_SPEED_VALIDATION.resolve::<FanSpeed>(label) else {
            warn!("Invalid fan mode: {label}");
            return;
        };

        self.state.fan_speed = fan_speed;
        self.send_command().await;
    }

    pub async fn set_vertical_swing(&mut self, label: &str) {
        if !self.supports(SupportedFeatures::SWING_MODE) {
            warn!("{} does not support swing mode, ignoring {label}", self.integration.name());
            return;
        }

        let Some(swing) = SWING_VALIDATION.resolve::<VerticalSwing>(label) else {
            warn!("Invalid swing mode: {label}");
            return;
        };

        self.state.vertical_swing = swing;
        self.send_command().await;
    }

    pub async fn set_horizontal_swing(&mut self, label: &str) {
        if !self.supports(SupportedFeatures::SWING_HORIZONTAL_MODE) {
            warn!(
                "{} does not support horizontal swing mode, ignoring {label}",
                self.integration.name()
            );
            return;
        }

        let Some(swing) = SWING_VALIDATION.resolve::<HorizontalSwing>(label) else {
            warn!("Invalid swing horizontal mode: {label}");
            return;
        };

        self.state.horizontal_swing = swing;
        self.send_command().await;
    }

    /// Post the current state to the controller. Failures are logged and dropped.
    pub async fn send_command(&self) {
        match self.dispatch().await {
            Ok(reply) => info!("Sent command: {reply}"),
            Err(err) => error!("Error sending command: {err}"),
        }
    }

    async fn dispatch(&self) -> Result<Value> {
        let url = command_url(&self.config, self.state.host(), self.state.power_mode)?;
        let body = self.command_body();

        self.transport.post_json(&url, &body).await
    }

    /// Body for the next dispatch.
    pub fn command_body(&self) -> CommandBody {
        let mut body = self.state.command_body();

        if !self.supports(SupportedFeatures::SWING_MODE) {
            body.vertical_mode = VerticalSwing::Middle;
        }
        if !self.supports(SupportedFeatures::SWING_HORIZONTAL_MODE) {
            body.horizontal_mode = HorizontalSwing::Middle;
        }

        body
    }

    fn supports(&self, feature: SupportedFeatures) -> bool {
        self.supported_features().contains(feature)
    }

    // accessors read by the host when rendering the entity

    pub fn name(&self) -> &'static str {
        self.integration.name()
    }

    pub fn unique_id(&self) -> String {
        self.integration.unique_id(self.state.host())
    }

    pub fn device_info(&self) -> DeviceInfo {
        self.integration.device_info(self.state.host())
    }

    pub fn supported_features(&self) -> SupportedFeatures {
        self.integration.supported_features()
    }

    pub fn hvac_mode(&self) -> HvacMode {
        self.state.power_mode
    }

    pub fn hvac_modes(&self) -> &'static [HvacMode] {
        &SUPPORTED_HVAC_MODES
    }

    pub fn target_temperature(&self) -> i32 {
        self.state.target_temperature
    }

    pub fn temperature_unit(&self) -> &'static str {
        TEMPERATURE_UNIT
    }

    pub fn fan_mode(&self) -> &'static str {
        self.state.fan_speed.display()
    }

    pub fn fan_modes(&self) -> Vec<&'static str> {
        FanSpeed::display_labels()
    }

    pub fn swing_mode(&self) -> Option<&'static str> {
        self.supports(SupportedFeatures::SWING_MODE)
            .then(|| self.state.vertical_swing.display())
    }

    pub fn swing_modes(&self) -> Option<Vec<&'static str>> {
        self.supports(SupportedFeatures::SWING_MODE)
            .then(VerticalSwing::display_labels)
    }

    pub fn swing_horizontal_mode(&self) -> Option<&'static str> {
        self.supports(SupportedFeatures::SWING_HORIZONTAL_MODE)
            .then(|| self.state.horizontal_swing.display())
    }

    pub fn swing_horizontal_modes(&self) -> Option<Vec<&'static str>> {
        self.supports(SupportedFeatures::SWING_HORIZONTAL_MODE)
            .then(HorizontalSwing::display_labels)
    }

    pub fn extra_state_attributes(&self) -> Map<String, Value> {
        let mut attributes = Map::new();

        if let Some(swing) = self.swing_mode() {
            attributes.insert("swing_mode".to_owned(), swing.into());
        }
        if let Some(swing) = self.swing_horizontal_mode() {
            attributes.insert("swing_horizontal_mode".to_owned(), swing.into());
        }

        attributes
    }
}

impl std::fmt::Debug for ControllerProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerProxy")
            .field("integration", &self.integration)
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
