//! App chrome state

use serde::Serialize;

use crate::reducer_factory::Slice;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppState {
    pub loading: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppPatch {
    pub loading: Option<bool>,
}

impl Slice for AppState {
    type Patch = AppPatch;

    fn merge(&self, patch: AppPatch) -> Self {
        Self {
            loading: patch.loading.unwrap_or(self.loading),
        }
    }
}
