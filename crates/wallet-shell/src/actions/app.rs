//! App actions
//!
//! Actions for the application chrome (the global loading indicator).

use super::{Action, ActionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    LoadingStart,
    LoadingEnd,
    LoadingToggle,
}

impl AppAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            AppAction::LoadingStart => ActionKind::AppLoadingStart,
            AppAction::LoadingEnd => ActionKind::AppLoadingEnd,
            AppAction::LoadingToggle => ActionKind::AppLoadingToggle,
        }
    }
}

/// Loading indicator action creators
pub mod loading {
    use super::{Action, AppAction};

    pub fn start() -> Action {
        Action::App(AppAction::LoadingStart)
    }

    pub fn end() -> Action {
        Action::App(AppAction::LoadingEnd)
    }

    pub fn toggle() -> Action {
        Action::App(AppAction::LoadingToggle)
    }
}
