//! Reducer factory
//!
//! Turns a default state and a transition handler into a [`Reducer`].
//!
//! A reducer maps `(previous slice, action)` to the next slice. Slices are
//! shared through `Rc` so that "nothing changed" can be observed by identity:
//! when the handler does not recognize an action, the reducer hands back the
//! very same `Rc` it was given and subscribers comparing with `Rc::ptr_eq`
//! can skip work.
//!
//! Handlers return a [`Transition`]: either a partial update ([`Slice::Patch`])
//! that is shallow-merged into a fresh copy of the previous slice, or a full
//! replacement. Nested values are never deep-merged.

use std::rc::Rc;

/// A pure `(state, action) -> state` function
///
/// `state` is `None` before the first reduction; implementations must then
/// start from their default state.
pub trait Reducer<A> {
    type State;

    fn reduce(&self, state: Option<&Rc<Self::State>>, action: &A) -> Rc<Self::State>;
}

/// A state slice that accepts partial updates
pub trait Slice: Clone {
    /// Partial update where every field is optional
    type Patch;

    /// Copy of `self` with every field present in `patch` overwritten
    fn merge(&self, patch: Self::Patch) -> Self;
}

/// What a handler wants done with the slice for a given action
pub enum Transition<S: Slice> {
    /// The action is not meant for this slice
    Ignore,
    /// Shallow-merge these fields into the previous slice
    Patch(S::Patch),
    /// Replace the slice wholesale
    Replace(S),
}

/// Transition handler: inspects the current slice and the action
pub type Handler<S, A> = fn(&S, &A) -> Transition<S>;

/// Reducer built from a default state and a handler
pub struct ReducerFactory<S: Slice, A> {
    default: Rc<S>,
    handler: Handler<S, A>,
}

impl<S: Slice, A> ReducerFactory<S, A> {
    pub fn new(default: S, handler: Handler<S, A>) -> Self {
        Self {
            default: Rc::new(default),
            handler,
        }
    }

    pub fn default_state(&self) -> Rc<S> {
        Rc::clone(&self.default)
    }
}

impl<S: Slice, A> Reducer<A> for ReducerFactory<S, A> {
    type State = S;

    fn reduce(&self, state: Option<&Rc<S>>, action: &A) -> Rc<S> {
        let state = state.unwrap_or(&self.default);

        match (self.handler)(state, action) {
            Transition::Ignore => Rc::clone(state),
            Transition::Patch(patch) => Rc::new(state.merge(patch)),
            Transition::Replace(next) => Rc::new(next),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Counter {
        count: u32,
        label: String,
        tags: Vec<String>,
    }

    #[derive(Default)]
    struct CounterPatch {
        count: Option<u32>,
        label: Option<String>,
        tags: Option<Vec<String>>,
    }

    impl Slice for Counter {
        type Patch = CounterPatch;

        fn merge(&self, patch: CounterPatch) -> Self {
            Self {
                count: patch.count.unwrap_or(self.count),
                label: patch.label.unwrap_or_else(|| self.label.clone()),
                tags: patch.tags.unwrap_or_else(|| self.tags.clone()),
            }
        }
    }

    enum Op {
        Increment,
        Rename(&'static str),
        Tag(&'static str),
        Reset,
        Unrelated,
    }

    fn handle(state: &Counter, op: &Op) -> Transition<Counter> {
        match op {
            Op::Increment => Transition::Patch(CounterPatch {
                count: Some(state.count + 1),
                ..CounterPatch::default()
            }),
            Op::Rename(label) => Transition::Patch(CounterPatch {
                label: Some(label.to_string()),
                ..CounterPatch::default()
            }),
            Op::Tag(tag) => {
                let mut tags = state.tags.clone();
                tags.push(tag.to_string());
                Transition::Patch(CounterPatch {
                    tags: Some(tags),
                    ..CounterPatch::default()
                })
            }
            Op::Reset => Transition::Replace(initial()),
            Op::Unrelated => Transition::Ignore,
        }
    }

    fn initial() -> Counter {
        Counter {
            count: 0,
            label: "counter".to_string(),
            tags: Vec::new(),
        }
    }

    fn reducer() -> ReducerFactory<Counter, Op> {
        ReducerFactory::new(initial(), handle)
    }

    #[test]
    fn test_undefined_state_yields_default() {
        let reducer = reducer();
        let state = reducer.reduce(None, &Op::Unrelated);
        assert_eq!(*state, initial());
        assert!(Rc::ptr_eq(&state, &reducer.default_state()));
    }

    #[test]
    fn test_undefined_state_is_reduced_from_default() {
        let state = reducer().reduce(None, &Op::Increment);
        assert_eq!(state.count, 1);
    }

    #[test]
    fn test_unknown_action_keeps_reference() {
        let reducer = reducer();
        let state = reducer.reduce(None, &Op::Increment);
        let next = reducer.reduce(Some(&state), &Op::Unrelated);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_patch_preserves_other_fields() {
        let reducer = reducer();
        let state = reducer.reduce(None, &Op::Rename("clicks"));
        let next = reducer.reduce(Some(&state), &Op::Increment);
        assert_eq!(next.count, 1);
        assert_eq!(next.label, "clicks");
    }

    #[test]
    fn test_handled_action_never_mutates_input() {
        let reducer = reducer();
        let state = reducer.reduce(None, &Op::Increment);
        let next = reducer.reduce(Some(&state), &Op::Tag("a"));
        assert!(!Rc::ptr_eq(&state, &next));
        assert!(state.tags.is_empty());
        assert_eq!(next.tags, vec!["a".to_string()]);
    }

    #[test]
    fn test_handled_action_allocates_even_when_equal() {
        let reducer = reducer();
        let state = reducer.default_state();
        let next = reducer.reduce(Some(&state), &Op::Rename("counter"));
        assert_eq!(*state, *next);
        assert!(!Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_replace() {
        let reducer = reducer();
        let state = reducer.reduce(None, &Op::Tag("x"));
        let state = reducer.reduce(Some(&state), &Op::Increment);
        let next = reducer.reduce(Some(&state), &Op::Reset);
        assert_eq!(*next, initial());
    }
}
