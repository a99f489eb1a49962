//! Counter demo: dispatch a few actions and print what listeners see.
//!
//! Run with `RUST_LOG=unistore=trace cargo run --example counter` to see the
//! store's own log output.

use std::rc::Rc;
use unistore::{listener, Action, ActionError, ActionKind, StoreBuilder};

#[derive(Clone, Debug, Default, PartialEq)]
struct Counter {
    count: i64,
}

#[derive(Debug)]
enum CounterAction {
    Increment,
    Decrement,
    Set(i64),
}

impl Action<Counter> for CounterAction {
    fn kind(&self) -> ActionKind {
        match self {
            Self::Increment => ActionKind::new("counter/increment"),
            Self::Decrement => ActionKind::new("counter/decrement"),
            Self::Set(_) => ActionKind::new("counter/set"),
        }
    }

    fn apply(&self, state: &Rc<Counter>) -> Result<Rc<Counter>, ActionError> {
        let count = match self {
            Self::Increment => state.count + 1,
            Self::Decrement if state.count == 0 => {
                return Err(ActionError::rejected("counter is already at zero"))
            }
            Self::Decrement => state.count - 1,
            Self::Set(n) if *n == state.count => return Ok(Rc::clone(state)),
            Self::Set(n) => *n,
        };
        Ok(Rc::new(Counter { count }))
    }
}

fn main() {
    env_logger::init();

    let render = listener(|s: &Counter| {
        println!("render: count = {}", s.count);
        Ok(())
    });
    let audit = listener(|s: &Counter| {
        println!("audit: counter was set to {}", s.count);
        Ok(())
    });

    let store = match StoreBuilder::with_default()
        .subscribe(Rc::clone(&render))
        .subscribe_to("counter/set", audit)
        .build()
    {
        Ok(store) => store,
        Err(e) => {
            eprintln!("failed to build store: {e}");
            return;
        }
    };

    let actions = [
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Set(2),
        CounterAction::Set(10),
        CounterAction::Decrement,
    ];

    for action in &actions {
        match store.dispatch(action) {
            Ok(outcome) => println!("{:?} -> {:?}", action, outcome),
            Err(e) => println!("{:?} failed: {}", action, e),
        }
    }

    store.unsubscribe(&render);
    store.dispatch(&CounterAction::Set(0)).ok();
    for _ in 0..2 {
        if let Err(e) = store.dispatch(&CounterAction::Decrement) {
            println!("{}", e);
        }
    }

    println!("final: {:?}", store.snapshot());
    println!("stats: {:?}", store.stats());
}
