use std::rc::Rc;

use crate::actions::{Action, RoutingAction};
use crate::reducer_factory::Reducer;
use crate::state::RoutingState;

/// Router reducer, composed under the `routing` slice
///
/// Keeps the last location reported by history.
#[derive(Debug, Default)]
pub struct RouterReducer {
    default: Rc<RoutingState>,
}

impl RouterReducer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reducer<Action> for RouterReducer {
    type State = RoutingState;

    fn reduce(&self, state: Option<&Rc<RoutingState>>, action: &Action) -> Rc<RoutingState> {
        let state = state.unwrap_or(&self.default);

        match action {
            Action::Routing(RoutingAction::LocationChange(location)) => Rc::new(RoutingState {
                location_before_transitions: Some(location.clone()),
            }),
            _ => Rc::clone(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{loading, location, NavigationKind};

    #[test]
    fn test_default_has_no_location() {
        let state = RouterReducer::new().reduce(None, &Action::None);
        assert_eq!(*state, RoutingState::default());
        assert_eq!(state.pathname(), None);
    }

    #[test]
    fn test_location_change() {
        let reducer = RouterReducer::new();
        let state = reducer.reduce(None, &location::push("/start"));
        assert_eq!(state.pathname(), Some("/start"));

        let state = reducer.reduce(Some(&state), &location::replace("/"));
        let current = state.location_before_transitions.as_ref().unwrap();
        assert_eq!(current.pathname, "/");
        assert_eq!(current.action, NavigationKind::Replace);
    }

    #[test]
    fn test_foreign_action_keeps_reference() {
        let reducer = RouterReducer::new();
        let state = reducer.reduce(None, &location::push("/"));
        let next = reducer.reduce(Some(&state), &loading::toggle());
        assert!(Rc::ptr_eq(&state, &next));
    }
}
