use std::rc::Rc;

use crate::actions::Action;
use crate::reducer_factory::{Reducer, ReducerFactory};
use crate::reducers::{app_reducer, net_reducer};
use crate::state::{AppState, NetState, RootState, RoutingState};

/// Boxed reducer for the `routing` slice, supplied by the caller
pub type RoutingReducer = Box<dyn Reducer<Action, State = RoutingState>>;

/// Root reducer - combines every slice reducer into the state tree
///
/// Each slice reducer only sees its own slice. When all of them hand back
/// their previous `Rc`, the previous tree is returned as well.
pub struct RootReducer {
    routing: RoutingReducer,
    app: ReducerFactory<AppState, Action>,
    net: ReducerFactory<NetState, Action>,
}

impl RootReducer {
    pub fn new(routing: RoutingReducer) -> Self {
        Self {
            routing,
            app: app_reducer::reducer(),
            net: net_reducer::reducer(),
        }
    }
}

impl Reducer<Action> for RootReducer {
    type State = RootState;

    fn reduce(&self, state: Option<&Rc<RootState>>, action: &Action) -> Rc<RootState> {
        let routing = self.routing.reduce(state.map(|s| &s.routing), action);
        let app = self.app.reduce(state.map(|s| &s.app), action);
        let net = self.net.reduce(state.map(|s| &s.net), action);

        if let Some(prev) = state {
            if Rc::ptr_eq(&prev.routing, &routing)
                && Rc::ptr_eq(&prev.app, &app)
                && Rc::ptr_eq(&prev.net, &net)
            {
                return Rc::clone(prev);
            }
        }

        Rc::new(RootState { routing, app, net })
    }
}
