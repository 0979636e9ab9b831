//! Runs the classic bean machine experiment and draws the distribution.
//!
//! ```text
//! cargo run --example bean_machine
//! ```
//!
//! Drops 100,000 balls from the center of a 50-slot board through 50 peg
//! rows, then prints each slot's share of the landings as a bar.

use std::error::Error;

use numlab_galton::bean_machine;

fn main() -> Result<(), Box<dyn Error>> {
    let histogram = bean_machine(50, 50, 100_000)?;

    let peak = histogram.counts().iter().copied().max().unwrap_or(0).max(1);
    for (slot, count) in histogram.counts().iter().enumerate() {
        let bar = "#".repeat(count * 60 / peak);
        println!("{slot:>2} {count:>6} {bar}");
    }
    println!("total: {}", histogram.total());

    Ok(())
}
