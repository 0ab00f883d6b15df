use thiserror::Error;

use crate::actions::ActionKind;

/// Misuse of the store
///
/// Both variants are programming errors: the store is single-writer and
/// rejects any attempt to change it while a dispatch is running.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("cannot dispatch {kind} while another dispatch is in progress")]
    ReentrantDispatch { kind: ActionKind },

    #[error("cannot add middleware while a dispatch is in progress")]
    MiddlewareDuringDispatch,
}
