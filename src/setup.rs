use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::{
    config::ConfigEntry,
    controller::ControllerProxy,
    error::Error,
    integration::Integration,
    protocol::transport::Transport,
};


/// A proxy shared between the host's tasks. The mutex keeps dispatches
/// from one proxy in order.
pub type SharedController = Arc<Mutex<ControllerProxy>>;


/// Entity registration, implemented by the host platform.
pub trait EntityRegistry {
    fn add_entities(&mut self, entities: Vec<SharedController>, update_before_add: bool);
}


/// Per-domain storage for set up entries, owned by the host.
#[derive(Default, Debug)]
pub struct DomainData {
    domains: HashMap<&'static str, HashMap<String, SharedController>>,
}

impl DomainData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&mut self, integration: Integration) -> &mut HashMap<String, SharedController> {
        self.domains.entry(integration.domain()).or_default()
    }

    pub fn get(&self, integration: Integration, entry_id: &str) -> Option<SharedController> {
        self.domains.get(integration.domain())?.get(entry_id).cloned()
    }
}


/// Create the climate entity for a config entry and hand it to the host.
///
/// Returns false, after logging, when the entry carries no host.
pub fn setup_entry<R: EntityRegistry>(
    integration: Integration,
    entry: &ConfigEntry,
    transport: Arc<dyn Transport>,
    registry: &mut R,
    data: &mut DomainData,
) -> bool {
    debug!("setup_entry called for {}", integration.name());

    let Some(host) = entry.data.host() else {
        error!("{}", Error::MissingHost(entry.entry_id.clone()));
        return false;
    };

    let proxy = ControllerProxy::new(integration, host, entry.controller.clone(), transport);
    debug!("Adding entity: {}", proxy.name());

    let proxy = Arc::new(Mutex::new(proxy));
    data.entries(integration).insert(entry.entry_id.clone(), proxy.clone());

    registry.add_entities(vec![proxy], true);

    true
}

pub fn unload_entry(integration: Integration, entry: &ConfigEntry, data: &mut DomainData) -> bool {
    data.entries(integration).remove(&entry.entry_id).is_some()
}
