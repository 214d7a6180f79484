use std::mem::{align_of, size_of};

use inline_optional::Optional;

fn row<T>(name: &str) {
    println!(
        "{name:<28} payload {:>3} B  Optional {:>3} B  Option {:>3} B  align {}",
        size_of::<T>(),
        size_of::<Optional<T>>(),
        size_of::<Option<T>>(),
        align_of::<Optional<T>>(),
    );
}

fn main() {
    println!("Memory sizes:");
    row::<()>("()");
    row::<u8>("u8");
    row::<u32>("u32");
    row::<u64>("u64");
    row::<[u8; 3]>("[u8; 3]");
    row::<String>("String");
    row::<Vec<u64>>("Vec<u64>");
    row::<Box<u64>>("Box<u64>");
}
