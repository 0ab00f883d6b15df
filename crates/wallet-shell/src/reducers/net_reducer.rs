use crate::actions::{Action, NetAction};
use crate::reducer_factory::{ReducerFactory, Transition};
use crate::state::{NetPatch, NetState};

/// Reducer for the network connection slice
pub fn reducer() -> ReducerFactory<NetState, Action> {
    ReducerFactory::new(NetState::default(), transition)
}

fn transition(_state: &NetState, action: &Action) -> Transition<NetState> {
    let Action::Net(action) = action else {
        return Transition::Ignore;
    };

    let patch = match action {
        NetAction::ConnectInit { network } => NetPatch {
            network: Some(Some(network.clone())),
            ..NetPatch::default()
        },
        NetAction::ConnectStart => NetPatch {
            connecting: Some(true),
            ..NetPatch::default()
        },
        NetAction::ConnectEnd => NetPatch {
            connecting: Some(false),
            ..NetPatch::default()
        },
        NetAction::ConnectError { error } => NetPatch {
            error: Some(Some(error.clone())),
            ..NetPatch::default()
        },
    };

    Transition::Patch(patch)
}
