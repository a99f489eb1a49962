//! Builder for constructing stores.

use crate::builder::error::BuildError;
use crate::core::ActionKind;
use crate::store::{Listener, Store};

/// Builder for constructing a [`Store`] with a fluent API.
///
/// Subscriptions added here are registered in the order given, before the
/// store is handed out.
pub struct StoreBuilder<S: Clone> {
    initial: Option<S>,
    subscriptions: Vec<(Listener<S>, Option<ActionKind>)>,
}

impl<S: Clone> StoreBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            subscriptions: Vec::new(),
        }
    }

    /// Create a builder whose initial state is `S::default()`.
    pub fn with_default() -> Self
    where
        S: Default,
    {
        Self::new().initial(S::default())
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add an unfiltered subscription.
    pub fn subscribe(mut self, listener: Listener<S>) -> Self {
        self.subscriptions.push((listener, None));
        self
    }

    /// Add a subscription filtered to `kind`.
    pub fn subscribe_to(mut self, kind: impl Into<ActionKind>, listener: Listener<S>) -> Self {
        self.subscriptions.push((listener, Some(kind.into())));
        self
    }

    /// Build the store.
    /// Returns an error if no initial state was given.
    pub fn build(self) -> Result<Store<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let store = Store::new(initial);
        for (listener, filter) in self.subscriptions {
            match filter {
                Some(kind) => store.subscribe_to(kind, listener),
                None => store.subscribe(listener),
            }
        }

        Ok(store)
    }
}

impl<S: Clone> Default for StoreBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{from_fn, Action};
    use crate::store::listener;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Todos {
        items: Vec<String>,
    }

    fn add(item: &'static str) -> impl Action<Todos> {
        from_fn("todo/add", move |s: &Rc<Todos>| {
            let mut items = s.items.clone();
            items.push(item.to_string());
            Ok(Rc::new(Todos { items }))
        })
    }

    #[test]
    fn builder_requires_initial_state() {
        let result = StoreBuilder::<Todos>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn with_default_uses_default_state() {
        let store = StoreBuilder::<Todos>::with_default().build().unwrap();

        assert_eq!(store.snapshot(), Todos::default());
    }

    #[test]
    fn fluent_api_registers_subscriptions_in_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let first = {
            let calls = Rc::clone(&calls);
            listener(move |_: &Todos| {
                calls.borrow_mut().push("first");
                Ok(())
            })
        };
        let second = {
            let calls = Rc::clone(&calls);
            listener(move |_: &Todos| {
                calls.borrow_mut().push("second");
                Ok(())
            })
        };
        let unrelated = {
            let calls = Rc::clone(&calls);
            listener(move |_: &Todos| {
                calls.borrow_mut().push("unrelated");
                Ok(())
            })
        };

        let store = StoreBuilder::new()
            .initial(Todos::default())
            .subscribe(first)
            .subscribe_to("todo/add", second)
            .subscribe_to("todo/clear", unrelated)
            .build()
            .unwrap();

        store.dispatch(&add("milk")).unwrap();

        assert_eq!(store.subscriber_count(), 3);
        assert_eq!(*calls.borrow(), vec!["first", "second"]);
        assert_eq!(store.snapshot().items, vec!["milk".to_string()]);
    }
}
