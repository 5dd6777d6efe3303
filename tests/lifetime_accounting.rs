//! Construction/destruction bookkeeping across whole sequences of operations.

mod support;

use std::panic::{catch_unwind, AssertUnwindSafe};

use optbox::OptionalBox;
use support::{Ledger, Tracked};

#[test]
fn test_mixed_sequence_balances() {
    let ledger = Ledger::new();
    {
        let mut a = OptionalBox::with_value(Tracked::new(1, &ledger));
        let mut b = a.clone();
        let mut c = OptionalBox::from_ref(&Tracked::new(2, &ledger));

        b.assign(Tracked::new(3, &ledger));
        c.clone_from(&b);
        a.reset();
        a.assign_ref(&Tracked::new(4, &ledger));
        b.assign_from(&mut a);
        let mut d = c.take();
        d.emplace(Tracked::new(5, &ledger));
        c.clone_from(&d);
        let _ = d.take_value();
        b.reset();
        b.reset();

        assert!(ledger.live() > 0);
    }
    assert_eq!(ledger.constructed(), ledger.destroyed());
}

#[test]
fn test_reset_is_idempotent() {
    let ledger = Ledger::new();
    let mut b = OptionalBox::with_value(Tracked::new(1, &ledger));

    b.reset();
    let after_one = ledger.counts();
    b.reset();

    assert!(!b.has_value());
    assert_eq!(ledger.counts(), after_one);
    assert_eq!(after_one, (1, 1));
    drop(b);
    assert_eq!(ledger.destroyed(), 1);
}

#[test]
fn test_clone_is_independent() {
    let ledger = Ledger::new();
    let mut original = OptionalBox::with_value(Tracked::new(10, &ledger));
    let copy = original.clone();

    original.value_mut().unwrap().set(11);

    assert_eq!(copy.value().map(Tracked::get), Ok(10));
    assert_eq!(original.value().map(Tracked::get), Ok(11));
    assert_ne!(copy.as_ptr(), original.as_ptr());
}

#[test]
fn test_clone_of_empty_is_empty() {
    let ledger = Ledger::new();
    let empty: OptionalBox<Tracked> = OptionalBox::new();
    let copy = empty.clone();

    assert!(!copy.has_value());
    assert_eq!(ledger.counts(), (0, 0));
}

#[test]
fn test_take_leaves_source_empty() {
    let ledger = Ledger::new();
    let mut source = OptionalBox::with_value(Tracked::new(4, &ledger));

    let moved = source.take();

    assert!(!source.has_value());
    assert_eq!(moved.value().map(Tracked::get), Ok(4));
    drop(source);
    drop(moved);
    assert_eq!(ledger.counts(), (1, 1));
}

#[test]
fn test_native_move_does_not_double_drop() {
    let ledger = Ledger::new();
    let source = OptionalBox::with_value(Tracked::new(4, &ledger));
    let boxes = vec![source];

    drop(boxes);
    assert_eq!(ledger.counts(), (1, 1));
}

#[test]
fn test_panicking_clone_leaves_no_value() {
    let ledger = Ledger::new();
    let source = OptionalBox::with_value(Tracked::fragile(1, &ledger));

    let result = catch_unwind(AssertUnwindSafe(|| source.clone()));
    assert!(result.is_err());

    let mut target = OptionalBox::new();
    let result = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
    assert!(result.is_err());
    assert!(!target.has_value());

    let result = catch_unwind(AssertUnwindSafe(|| OptionalBox::from_ref(source.value().unwrap())));
    assert!(result.is_err());

    drop(target);
    drop(source);
    assert_eq!(ledger.counts(), (1, 1));
}

#[test]
fn test_panicking_clone_from_keeps_presence() {
    let ledger = Ledger::new();
    let source = OptionalBox::with_value(Tracked::fragile(1, &ledger));
    let mut target = OptionalBox::with_value(Tracked::new(2, &ledger));

    let result = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));

    assert!(result.is_err());
    assert_eq!(target.value().map(Tracked::get), Ok(2));
    drop(target);
    drop(source);
    assert_eq!(ledger.counts(), (2, 2));
}

#[test]
fn test_panicking_initializer_leaves_box_empty() {
    let mut b: OptionalBox<Tracked> = OptionalBox::new();

    let result = catch_unwind(AssertUnwindSafe(|| {
        b.get_or_insert_with(|| panic!("initializer failed"));
    }));

    assert!(result.is_err());
    assert!(!b.has_value());
}

#[test]
fn test_panicking_destructor_runs_once() {
    use std::cell::Cell;

    struct Bomb<'a>(&'a Cell<usize>);
    impl Drop for Bomb<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
            panic!("Bomb dropped");
        }
    }

    let drops = Cell::new(0);
    let mut b = OptionalBox::with_value(Bomb(&drops));

    let result = catch_unwind(AssertUnwindSafe(|| b.reset()));

    assert!(result.is_err());
    assert!(!b.has_value());
    drop(b);
    assert_eq!(drops.get(), 1);
}
