//! Reducers
//!
//! Domain reducers are built with the [`ReducerFactory`](crate::reducer_factory::ReducerFactory);
//! the routing reducer is a standalone [`Reducer`](crate::reducer_factory::Reducer)
//! that the root composes without looking inside.

pub mod app_reducer;
pub mod net_reducer;
pub mod root_reducer;
pub mod routing_reducer;

pub use root_reducer::RootReducer;
pub use routing_reducer::RouterReducer;
