//! Application State Module
//!
//! One slice per reducer, combined into the [`RootState`] tree.

mod app;
mod net;
mod root;
mod routing;

pub use app::{AppPatch, AppState};
pub use net::{NetPatch, NetState};
pub use root::RootState;
pub use routing::RoutingState;
