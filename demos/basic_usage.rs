//! Walks through the `OptionalBox` API: construction, assignment in all its
//! forms, checked and unchecked access, and the empty-access error.

use anyhow::{Context, Result};
use optbox::{EmptyAccessError, OptionalBox};

#[derive(Debug, Clone)]
struct Cat {
    name: String,
    age: u32,
}

impl Cat {
    fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_owned(),
            age,
        }
    }
}

fn describe(label: &str, cat: &OptionalBox<Cat>) {
    match cat.get() {
        Some(c) => println!("{label}: {} ({} years)", c.name, c.age),
        None => println!("{label}: <empty>"),
    }
}

fn main() -> Result<()> {
    let mut luna = OptionalBox::with_value(Cat::new("Luna", 1));
    let mut spare: OptionalBox<Cat> = OptionalBox::new();
    describe("luna", &luna);
    describe("spare", &spare);

    // Copy-assign from another box, then mutate the original.
    spare.clone_from(&luna);
    luna.value_mut()?.age += 1;
    describe("luna", &luna);
    describe("spare", &spare);

    // Move-assign: the source ends up empty.
    spare.assign_from(&mut luna);
    describe("luna", &luna);
    describe("spare", &spare);

    match luna.value() {
        Ok(cat) => println!("unexpected cat: {cat:?}"),
        Err(EmptyAccessError) => println!("luna.value(): {}", EmptyAccessError),
    }

    // Assign from a bare value never empties.
    luna.assign(Cat::new("Murka", 4));
    if luna.has_value() {
        // SAFETY: checked just above.
        let murka = unsafe { luna.get_unchecked() };
        println!("unchecked: {}", murka.name);
    }

    luna.reset();
    luna.reset();
    let age = luna
        .value()
        .map(|c| c.age)
        .context("reading age from an empty box");
    println!("{age:?}");

    println!("size_of::<OptionalBox<Cat>>() = {}", std::mem::size_of::<OptionalBox<Cat>>());
    Ok(())
}
