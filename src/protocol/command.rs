use serde::Serialize;
use url::Url;

use crate::{config::ControllerConfig, error::{Error, Result}};

use super::modes::{FanSpeed, HorizontalSwing, HvacMode, VerticalSwing};


/// JSON body posted to the controller on every dispatch.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandBody {
    pub temperature: i32,
    pub fan_speed: FanSpeed,
    pub vertical_mode: VerticalSwing,
    pub horizontal_mode: HorizontalSwing,
}


/// Endpoint suffix for a power mode.
///
/// Anything that isn't cooling or heating is sent to `off/`.
pub fn mode_path(mode: HvacMode) -> &'static str {
    match mode {
        HvacMode::Cool => "cool/",
        HvacMode::Heat => "heat/",
        _ => "off/",
    }
}

/// `http://{host}:{port}/{base_path}/{mode suffix}`, the base path segment
/// is left out when empty.
pub fn command_url(config: &ControllerConfig, host: &str, mode: HvacMode) -> Result<Url> {
    let mut path = String::from("/");

    let base_path = config.base_path.trim_matches('/');
    if !base_path.is_empty() {
        path.push_str(base_path);
        path.push('/');
    }
    path.push_str(mode_path(mode));

    let url = format!("http://{host}:{}{path}", config.port);

    Url::parse(&url)
        .map_err(|source| Error::InvalidHost { host: host.to_owned(), source })
}
