use std::collections::BTreeMap;

use serde::Serialize;

use crate::{config::EntryData, integration::Integration};


/// One field of a config flow form.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub required: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub enum FlowResult {
    /// Ask the user for input.
    ShowForm {
        step_id: &'static str,
        fields: Vec<FormField>,
        errors: BTreeMap<&'static str, &'static str>,
    },

    /// Input accepted, the host should store a new config entry.
    CreateEntry {
        title: &'static str,
        data: EntryData,
    },
}


/// Single step flow asking for the controller host.
#[derive(Clone, Copy, Debug)]
pub struct ConfigFlow {
    integration: Integration,
}

impl ConfigFlow {
    pub const VERSION: u32 = 1;

    pub fn new(integration: Integration) -> Self {
        Self { integration }
    }

    pub fn step_user(&self, user_input: Option<EntryData>) -> FlowResult {
        let mut errors = BTreeMap::new();

        if let Some(input) = user_input {
            if input.host().is_some() {
                return FlowResult::CreateEntry { title: self.integration.name(), data: input };
            }

            errors.insert("host", "required");
        }

        FlowResult::ShowForm {
            step_id: "user",
            fields: vec![FormField { name: "host", required: true }],
            errors,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_form() {
        let flow = ConfigFlow::new(Integration::IlpIrControl);

        match flow.step_user(None) {
            FlowResult::ShowForm { step_id, fields, errors } => {
                assert_eq!(step_id, "user");
                assert_eq!(fields, vec![FormField { name: "host", required: true }]);
                assert!(errors.is_empty());
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_create_entry() {
        let flow = ConfigFlow::new(Integration::AirPump);
        let input = EntryData { host: Some("10.0.0.5".to_owned()) };

        assert_eq!(
            flow.step_user(Some(input.clone())),
            FlowResult::CreateEntry { title: "Mitsubishi Air Pump", data: input }
        );
    }

    #[test]
    fn test_empty_host() {
        let flow = ConfigFlow::new(Integration::IlpIrControl);

        match flow.step_user(Some(EntryData::default())) {
            FlowResult::ShowForm { errors, .. } => {
                assert_eq!(errors.get("host"), Some(&"required"))
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
