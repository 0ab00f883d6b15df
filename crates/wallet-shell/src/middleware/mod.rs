use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::RootState;

pub mod logging;
pub mod network;

pub use logging::LoggingMiddleware;
pub use network::NetworkMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// - `action`: The action to process
/// - `state`: Current state tree (read-only snapshot)
/// - `dispatcher`: Use to enqueue follow-up actions
///
/// Returns `true` to continue the chain, `false` to consume the action.
pub trait Middleware {
    fn handle(&mut self, action: &Action, state: &RootState, dispatcher: &Dispatcher) -> bool;
}
