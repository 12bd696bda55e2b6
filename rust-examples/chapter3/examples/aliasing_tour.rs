//! Aliasing tour: views, in-place appends and reallocation
//!
//! Shows when two sequences observe each other's writes and the exact moment
//! an append severs that link.
//!
//! Run with: cargo run -p basics-chapter3 --example aliasing_tour

use basics_chapter3::{Sequence, SequenceError};

fn show(label: &str, seq: &Sequence<i32>) {
    let rendered = seq.to_string();
    println!("  {label:<8} {rendered:<24} len={} cap={}", seq.len(), seq.cap());
}

fn main() -> Result<(), SequenceError> {
    println!("=== Views share the backing store ===\n");
    let seq = Sequence::from_vec(vec![1, 2, 3, 4, 5]);
    let view = seq.slice(1, 3)?;
    show("seq", &seq);
    show("view", &view);

    seq.set(1, 99)?;
    println!("\nafter seq.set(1, 99):");
    show("seq", &seq);
    show("view", &view);

    println!("\n=== Appending within capacity writes in place ===\n");
    let extended = view.append([42]);
    show("extended", &extended);
    show("seq", &seq);

    println!("\n=== Appending past capacity reallocates ===\n");
    let grown = seq.append([6]);
    show("grown", &grown);
    println!("  grown shares store with seq: {}", grown.shares_storage(&seq));

    grown.set(0, -1)?;
    println!("\nafter grown.set(0, -1):");
    show("grown", &grown);
    show("seq", &seq);

    println!("\n=== Out-of-range access is an error ===\n");
    match seq.get(seq.len()) {
        Ok(value) => println!("  unexpected value {value}"),
        Err(err) => println!("  seq.get({}) -> {err}", seq.len()),
    }

    Ok(())
}
