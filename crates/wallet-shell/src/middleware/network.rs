//! Network middleware
//!
//! Checks every connect-init against the network registry. A known network
//! is resolved to its endpoint and logged; an unknown one is recorded as a
//! connection error so the failure shows up in `net.error`. No connection is
//! ever opened here.

use wallet_config::NetworkRegistry;

use crate::actions::{connect, Action, NetAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::RootState;

pub struct NetworkMiddleware {
    registry: NetworkRegistry,
}

impl NetworkMiddleware {
    pub fn new(registry: NetworkRegistry) -> Self {
        Self { registry }
    }
}

impl Middleware for NetworkMiddleware {
    fn handle(&mut self, action: &Action, _state: &RootState, dispatcher: &Dispatcher) -> bool {
        if let Action::Net(NetAction::ConnectInit { network }) = action {
            match self.registry.resolve(network) {
                Ok(resolved) => {
                    log::info!(
                        "Network {} resolves to {} {} at {}",
                        network,
                        resolved.family_name,
                        resolved.subnetwork,
                        resolved.endpoint
                    );
                }
                Err(e) => {
                    log::warn!("Cannot resolve network {}: {}", network, e);
                    dispatcher.dispatch(connect::error(e));
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer_factory::Reducer;
    use crate::reducers::{RootReducer, RouterReducer};

    fn state() -> RootState {
        let reducer = RootReducer::new(Box::new(RouterReducer::new()));
        (*reducer.reduce(None, &Action::None)).clone()
    }

    #[test]
    fn test_known_network_passes_quietly() {
        let mut middleware = NetworkMiddleware::new(NetworkRegistry::builtin(None));
        let dispatcher = Dispatcher::new();
        assert!(middleware.handle(&connect::init("ropsten"), &state(), &dispatcher));
        assert_eq!(dispatcher.pending(), 0);
    }

    #[test]
    fn test_unknown_network_queues_error() {
        let mut middleware = NetworkMiddleware::new(NetworkRegistry::builtin(None));
        let dispatcher = Dispatcher::new();
        assert!(middleware.handle(&connect::init("kovan"), &state(), &dispatcher));
        assert_eq!(
            dispatcher.take_next(),
            Some(connect::error("unknown network `kovan`"))
        );
    }

    #[test]
    fn test_other_actions_ignored() {
        let mut middleware = NetworkMiddleware::new(NetworkRegistry::builtin(None));
        let dispatcher = Dispatcher::new();
        assert!(middleware.handle(&connect::start(), &state(), &dispatcher));
        assert_eq!(dispatcher.pending(), 0);
    }
}
