//! Dispatcher for middleware follow-up actions
//!
//! Middleware must not call [`Store::dispatch`](crate::store::Store::dispatch)
//! while the store is dispatching. Instead it enqueues follow-up actions here;
//! the store drains the queue once the current action is reduced, feeding
//! each queued action through the full middleware chain again.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::actions::Action;

/// Queue handle for actions dispatched from middleware
#[derive(Clone, Default)]
pub struct Dispatcher {
    queue: Rc<RefCell<VecDeque<Action>>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an action to be processed after the current one
    pub fn dispatch(&self, action: Action) {
        log::trace!("Dispatcher: queued {}", action.kind());
        self.queue.borrow_mut().push_back(action);
    }

    /// Take the next queued action, oldest first
    pub(crate) fn take_next(&self) -> Option<Action> {
        self.queue.borrow_mut().pop_front()
    }

    /// Drop every queued action, returning how many were dropped
    pub(crate) fn clear(&self) -> usize {
        let mut queue = self.queue.borrow_mut();
        let dropped = queue.len();
        queue.clear();
        dropped
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}
