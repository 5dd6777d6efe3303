//! Instrumented value type shared by the integration tests.
//!
//! Every `Tracked` reports its constructions, destructions and
//! copy-assignments into a `Ledger`, so a test can check that a sequence of
//! box operations neither leaks nor double-drops.

#![allow(dead_code)]

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Lifetime counters for one test.
#[derive(Default)]
pub struct Ledger {
    constructed: Cell<usize>,
    destroyed: Cell<usize>,
    clone_assigned: Cell<usize>,
}

impl Ledger {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn constructed(&self) -> usize {
        self.constructed.get()
    }

    pub fn destroyed(&self) -> usize {
        self.destroyed.get()
    }

    pub fn clone_assigned(&self) -> usize {
        self.clone_assigned.get()
    }

    /// Values currently alive.
    pub fn live(&self) -> usize {
        self.constructed() - self.destroyed()
    }

    /// `(constructed, destroyed)`
    pub fn counts(&self) -> (usize, usize) {
        (self.constructed(), self.destroyed())
    }

    fn bump(counter: &Cell<usize>) {
        counter.set(counter.get() + 1);
    }
}

/// An `i32` that records its own lifetime in a `Ledger`.
pub struct Tracked {
    value: i32,
    panic_on_clone: bool,
    ledger: Rc<Ledger>,
}

impl Tracked {
    pub fn new(value: i32, ledger: &Rc<Ledger>) -> Self {
        Ledger::bump(&ledger.constructed);
        Self {
            value,
            panic_on_clone: false,
            ledger: Rc::clone(ledger),
        }
    }

    /// A value whose `clone` and `clone_from` panic before touching anything.
    pub fn fragile(value: i32, ledger: &Rc<Ledger>) -> Self {
        let mut tracked = Self::new(value, ledger);
        tracked.panic_on_clone = true;
        tracked
    }

    pub fn get(&self) -> i32 {
        self.value
    }

    pub fn set(&mut self, value: i32) {
        self.value = value;
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        assert!(!self.panic_on_clone, "Tracked::clone failed");
        Self::new(self.value, &self.ledger)
    }

    fn clone_from(&mut self, source: &Self) {
        assert!(!source.panic_on_clone, "Tracked::clone_from failed");
        self.value = source.value;
        Ledger::bump(&self.ledger.clone_assigned);
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        Ledger::bump(&self.ledger.destroyed);
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}
