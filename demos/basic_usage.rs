//! Optional Usage Examples
//!
//! Walks through the lifecycle of an inline `Optional<T>`.

use inline_optional::{EmptyAccessError, Optional};

fn main() -> anyhow::Result<()> {
    println!("Optional Usage Examples");
    println!("=======================");

    // Example 1: empty, defaults, emplace
    println!("\n1. Empty and Emplace:");
    let mut count: Optional<i32> = Optional::new();
    println!("  has_value: {}", count.has_value());
    println!("  get(42): {}", count.get(&42));
    count.emplace(7);
    println!("  after emplace(7): {:?}, get(42): {}", count, count.get(&42));

    // Example 2: copies are independent
    println!("\n2. Clone Independence:");
    let mut greeting = Optional::from_value(String::from("hello"));
    let copy = greeting.clone();
    greeting.reset();
    println!("  original after reset: {greeting:?}");
    println!("  copy: {copy:?}");

    // Example 3: element-wise move keeps the source present
    println!("\n3. Element-wise Move:");
    let mut source = Optional::from_value(vec![1, 2, 3]);
    let moved = Optional::move_from(&mut source);
    println!("  moved: {moved:?}");
    println!("  source: {source:?} (still present)");

    // Example 4: checked access
    println!("\n4. Checked Access:");
    let empty: Optional<u8> = Optional::new();
    match empty.try_value() {
        Ok(v) => println!("  value: {v}"),
        Err(EmptyAccessError) => println!("  empty access reported: {EmptyAccessError}"),
    }
    let answer = Optional::from_value(42_u8);
    println!("  value: {}", answer.try_value()?);

    Ok(())
}
