//! # Forwarder Registry
//!
//! Per-network exchange deployments and the memoized order-fill handles
//! built from them. A handle is connected the first time a network is used
//! and reused for every later submit on that network.

use crate::core::error::{Result, WidgetError};
use crate::core::service::{ForwarderConnector, OrderFiller};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared::{Address, NetworkId};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Contract addresses deployed on one network. Fills are sent to the
/// forwarder, which settles them against the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwarderDeployment {
    pub exchange: Address,
    pub forwarder: Address,
}

/// Deployment set loaded from a JSON artifacts file:
///
/// ```json
/// { "networks": { "50": { "exchange": "0x..", "forwarder": "0x.." } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractArtifacts {
    pub networks: HashMap<NetworkId, ForwarderDeployment>,
}

impl ContractArtifacts {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            WidgetError::Internal(format!("cannot read artifacts {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    pub fn deployment(&self, network_id: NetworkId) -> Option<&ForwarderDeployment> {
        self.networks.get(&network_id)
    }
}

/// Resolves and caches one order-fill handle per network.
pub struct ForwarderRegistry {
    artifacts: ContractArtifacts,
    connector: Arc<dyn ForwarderConnector>,
    handles: RwLock<HashMap<NetworkId, Arc<dyn OrderFiller>>>,
}

impl ForwarderRegistry {
    pub fn new(artifacts: ContractArtifacts, connector: Arc<dyn ForwarderConnector>) -> Self {
        Self {
            artifacts,
            connector,
            handles: RwLock::new(HashMap::new()),
        }
    }

    /// Handle for `network_id`, connecting it on first use.
    pub fn resolve(&self, network_id: NetworkId) -> Result<Arc<dyn OrderFiller>> {
        if let Some(handle) = self.handles.read().get(&network_id) {
            return Ok(handle.clone());
        }

        let deployment = self
            .artifacts
            .deployment(network_id)
            .ok_or(WidgetError::UnsupportedNetwork(network_id))?;

        let mut handles = self.handles.write();
        // another caller may have connected while the read lock was released
        if let Some(handle) = handles.get(&network_id) {
            return Ok(handle.clone());
        }

        tracing::info!(
            network = %network_id,
            forwarder = %deployment.forwarder,
            "Connecting order-fill handle"
        );
        let handle = self.connector.connect(network_id, deployment)?;
        handles.insert(network_id, handle.clone());
        Ok(handle)
    }

    /// Number of networks with a connected handle
    pub fn connected(&self) -> usize {
        self.handles.read().len()
    }
}
