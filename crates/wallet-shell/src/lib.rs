//! State kernel of the wallet shell
//!
//! A Redux-style loop: action creators build [`actions::Action`] values, the
//! [`store::Store`] runs them through middleware and the root reducer, and
//! subscribers are notified with the new [`state::RootState`].

pub mod actions;
pub mod dispatcher;
pub mod error;
pub mod logger;
pub mod middleware;
pub mod reducer_factory;
pub mod reducers;
pub mod state;
pub mod store;

pub use actions::{Action, ActionKind};
pub use error::StoreError;
pub use reducer_factory::{Reducer, ReducerFactory, Slice, Transition};
pub use state::RootState;
pub use store::{Store, Subscription};
