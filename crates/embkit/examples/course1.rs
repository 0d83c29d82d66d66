//! Course 1 walkthrough: every embkit utility on the course data set.
//!
//! Demonstrates:
//!   1. Printing the 40-value data set and its statistics
//!   2. Printing the data set again, now sorted by the median query
//!   3. Round-tripping integers through ASCII in several bases
//!   4. Overlap-safe moves, reversal and zeroing on a scratch buffer
//!   5. Allocating, filling and releasing a word block
//!
//! Run with:
//!   cargo run --example course1

use embkit::prelude::*;
use embkit_test_utils::COURSE_DATA_SET;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== embkit Course 1 ===\n");

    // 1. Statistics over the course data set.
    let mut sample = COURSE_DATA_SET;
    println!("Data set (unsorted):");
    println!("{}\n", SampleDisplay(&sample));
    let summary = StatsSummary::compute(&mut sample)?;
    println!("{summary}\n");

    // 2. The summary sorted the sample in place.
    println!("Data set (sorted):");
    println!("{}\n", SampleDisplay(&sample));

    // 3. Radix round trips.
    println!("Radix conversion:");
    for &(value, base) in &[(0, 10), (-42, 10), (1234, 16), (-1, 16), (37, 2)] {
        let text = AsciiBuf::format(value, base)?;
        let back = ascii_to_integer(text.as_bytes(), text.digit_count(), base)?;
        println!("  {value:>6} base {base:>2} -> {text:>10} -> {back}");
    }
    match ascii_to_integer(b"12G4", 4, 16) {
        Ok(v) => println!("  unexpected parse: {v}"),
        Err(e) => println!("  \"12G4\" base 16 rejected: {e}"),
    }
    println!();

    // 4. Byte primitives on one scratch buffer.
    let mut buf = [1, 2, 3, 4, 5, 0, 0, 0];
    println!("Memory:");
    println!("  start            {buf:?}");
    move_within(&mut buf, 0, 2, 5)?;
    println!("  move 0->2 (5)    {buf:?}");
    reverse(&mut buf[..5]);
    println!("  reverse [..5]    {buf:?}");
    zero(&mut buf[5..]);
    println!("  zero [5..]       {buf:?}\n");

    // 5. A word block lives until it is released.
    let mut block = allocate_words(buf.len() / 4)?;
    for (word, chunk) in block.iter_mut().zip(buf.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    println!(
        "Word block: {} words ({} bytes) = {:08X?}",
        block.len(),
        block.memory_bytes(),
        block.as_slice()
    );
    release_words(block);

    println!("\nDone.");
    Ok(())
}
