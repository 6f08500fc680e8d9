use crate::gateways::Subscription;
use poimap_core::gateways::ConnectivityGateway;
use std::cell::Cell;

/// A connectivity monitor whose state is toggled by the simulation
/// script.
#[derive(Debug)]
pub struct SimulatedConnectivityMonitor {
    online: Cell<bool>,
}

impl SimulatedConnectivityMonitor {
    pub fn new(online: bool) -> Self {
        Self {
            online: Cell::new(online),
        }
    }

    pub fn set_online(&self, online: bool) {
        self.online.set(online);
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription::new("connectivity changes")
    }
}

impl ConnectivityGateway for SimulatedConnectivityMonitor {
    fn is_online(&self) -> bool {
        self.online.get()
    }
}
