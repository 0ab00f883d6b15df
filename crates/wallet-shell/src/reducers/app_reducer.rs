use crate::actions::{Action, AppAction};
use crate::reducer_factory::{ReducerFactory, Transition};
use crate::state::{AppPatch, AppState};

/// Reducer for the app chrome slice
pub fn reducer() -> ReducerFactory<AppState, Action> {
    ReducerFactory::new(AppState::default(), transition)
}

fn transition(state: &AppState, action: &Action) -> Transition<AppState> {
    let Action::App(action) = action else {
        return Transition::Ignore;
    };

    let loading = match action {
        AppAction::LoadingStart => true,
        AppAction::LoadingEnd => false,
        AppAction::LoadingToggle => !state.loading,
    };

    Transition::Patch(AppPatch {
        loading: Some(loading),
    })
}
