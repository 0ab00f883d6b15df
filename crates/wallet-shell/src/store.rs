use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::error::StoreError;
use crate::middleware::Middleware;
use crate::reducer_factory::Reducer;
use crate::reducers::RootReducer;
use crate::state::RootState;

type Listener = Rc<dyn Fn(&RootState)>;

struct ListenerEntry {
    id: u64,
    listener: Listener,
}

struct Inner {
    state: RefCell<Rc<RootState>>,
    reducer: RootReducer,
    middleware: RefCell<Vec<Box<dyn Middleware>>>,
    listeners: RefCell<Vec<ListenerEntry>>,
    next_listener_id: Cell<u64>,
    dispatching: Cell<bool>,
    dispatcher: Dispatcher,
}

/// Store - holds the state tree and runs the dispatch loop
///
/// The store is a cheap handle; clones share the same state. It is
/// single-threaded: one dispatch runs at a time and a dispatch issued while
/// another is in progress is rejected with [`StoreError::ReentrantDispatch`].
#[derive(Clone)]
pub struct Store {
    inner: Rc<Inner>,
}

impl Store {
    /// Create a store, initializing every slice with its default state
    pub fn new(reducer: RootReducer) -> Self {
        let state = reducer.reduce(None, &Action::None);

        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(state),
                reducer,
                middleware: RefCell::new(Vec::new()),
                listeners: RefCell::new(Vec::new()),
                next_listener_id: Cell::new(0),
                dispatching: Cell::new(false),
                dispatcher: Dispatcher::new(),
            }),
        }
    }

    /// Add middleware to the store; middleware runs in registration order
    pub fn add_middleware(&self, middleware: Box<dyn Middleware>) -> Result<(), StoreError> {
        if self.inner.dispatching.get() {
            return Err(StoreError::MiddlewareDuringDispatch);
        }
        self.inner.middleware.borrow_mut().push(middleware);
        Ok(())
    }

    /// Get the current state tree
    pub fn state(&self) -> Rc<RootState> {
        self.inner.state.borrow().clone()
    }

    /// Register a listener called after every reduction, in subscription order
    ///
    /// Listeners added or removed while a dispatch is notifying take effect
    /// from the next notification.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&RootState) + 'static,
    {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner.listeners.borrow_mut().push(ListenerEntry {
            id,
            listener: Rc::new(listener),
        });

        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    /// Process an action through the middleware chain and the root reducer
    ///
    /// Actions enqueued on the [`Dispatcher`] by middleware are processed
    /// afterwards, within this call.
    pub fn dispatch(&self, action: Action) -> Result<(), StoreError> {
        if self.inner.dispatching.get() {
            let kind = action.kind();
            log::error!("Rejected re-entrant dispatch of {}", kind);
            return Err(StoreError::ReentrantDispatch { kind });
        }

        let _guard = DispatchGuard::enter(&self.inner.dispatching, &self.inner.dispatcher);

        self.process(action);
        while let Some(action) = self.inner.dispatcher.take_next() {
            self.process(action);
        }

        Ok(())
    }

    fn process(&self, action: Action) {
        let state = self.state();

        // Pass through middleware chain
        let should_reduce = self
            .inner
            .middleware
            .borrow_mut()
            .iter_mut()
            .all(|middleware| middleware.handle(&action, &state, &self.inner.dispatcher));

        if !should_reduce {
            log::debug!("Action {} consumed by middleware", action.kind());
            return;
        }

        let next = self.inner.reducer.reduce(Some(&state), &action);
        *self.inner.state.borrow_mut() = Rc::clone(&next);

        self.notify(&next);
    }

    fn notify(&self, state: &RootState) {
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|entry| Rc::clone(&entry.listener))
            .collect();

        for listener in listeners {
            listener(state);
        }
    }
}

/// Handle returned by [`Store::subscribe`]
pub struct Subscription {
    id: u64,
    store: Weak<Inner>,
}

impl Subscription {
    /// Remove the listener; a no-op when the store is gone
    pub fn unsubscribe(self) {
        if let Some(inner) = self.store.upgrade() {
            inner.listeners.borrow_mut().retain(|entry| entry.id != self.id);
        }
    }
}

/// Marks the store as dispatching until dropped, also on unwind
///
/// Follow-ups still queued when the guard drops belong to a dispatch that
/// panicked; they are discarded so they never leak into the next dispatch.
struct DispatchGuard<'a> {
    flag: &'a Cell<bool>,
    queue: &'a Dispatcher,
}

impl<'a> DispatchGuard<'a> {
    fn enter(flag: &'a Cell<bool>, queue: &'a Dispatcher) -> Self {
        flag.set(true);
        Self { flag, queue }
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        let dropped = self.queue.clear();
        if dropped > 0 {
            log::error!("Discarded {} queued actions of an aborted dispatch", dropped);
        }
        self.flag.set(false);
    }
}
