//! Combined state tree

use serde::Serialize;
use std::rc::Rc;

use super::{AppState, NetState, RoutingState};

/// The combined state tree, one `Rc` per slice
///
/// Rebuilt on every dispatch; slices that did not change keep their `Rc`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootState {
    pub routing: Rc<RoutingState>,
    pub app: Rc<AppState>,
    pub net: Rc<NetState>,
}
