use serde::{Deserialize, Serialize};


pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_BASE_PATH: &str = "air_pump";


/// Where the controller listens, apart from its host.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ControllerConfig {
    pub port: u16,
    pub base_path: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            base_path: DEFAULT_BASE_PATH.to_owned(),
        }
    }
}


/// Data collected by the config flow.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryData {
    /// Network address of the controller, taken as-is.
    #[serde(default)]
    pub host: Option<String>,
}

impl EntryData {
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref().filter(|host| !host.is_empty())
    }
}


/// A configured instance of an integration, as handed over by the host platform.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ConfigEntry {
    pub entry_id: String,
    pub title: String,
    pub data: EntryData,

    #[serde(default)]
    pub controller: ControllerConfig,
}

impl ConfigEntry {
    pub fn new(
        entry_id: impl Into<String>,
        title: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            entry_id: entry_id.into(),
            title: title.into(),
            data: EntryData { host: Some(host.into()) },
            controller: ControllerConfig::default(),
        }
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_entry_from_json() {
        let entry: ConfigEntry = serde_json::from_value(json!({
            "entry_id": "abc123",
            "title": "Mitsubishi ILP IR Control",
            "data": { "host": "10.0.0.5" }
        })).unwrap();

        assert_eq!(entry.data.host(), Some("10.0.0.5"));
        assert_eq!(entry.controller, ControllerConfig::default());
        assert_eq!(entry.controller.port, 8000);
    }

    #[test]
    fn test_entry_missing_host() {
        let entry: ConfigEntry = serde_json::from_value(json!({
            "entry_id": "abc123",
            "title": "Mitsubishi Air Pump",
            "data": {}
        })).unwrap();
        assert_eq!(entry.data.host(), None);

        let empty = EntryData { host: Some(String::new()) };
        assert_eq!(empty.host(), None);
    }

    #[test]
    fn test_partial_controller_config() {
        let config: ControllerConfig = serde_json::from_value(json!({ "port": 9000 })).unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.base_path, "air_pump");
    }
}
