//! Searches for the oscillator's ground-state energy, printing each
//! iteration on the way down.
//!
//! ```text
//! cargo run --example ground_state
//! ```

use std::error::Error;

use numlab_numerov::search::{self, Config, Event};
use uom::{fmt::DisplayStyle, si::energy::megaelectronvolt};

fn main() -> Result<(), Box<dyn Error>> {
    let mut last_step = None;

    let observer = |event: &Event| {
        if last_step.is_some_and(|step| event.step < step) {
            println!(
                "refining by {}",
                event
                    .step
                    .into_format_args(megaelectronvolt, DisplayStyle::Abbreviation)
            );
        }
        last_step = Some(event.step);

        println!(
            "iter {:>3}  psi {:>13.6e}  at {}",
            event.iter,
            event.psi,
            event
                .energy
                .into_format_args(megaelectronvolt, DisplayStyle::Abbreviation),
        );
        None
    };

    let solution = search::solve(&Config::default(), observer)?;

    println!(
        "ground state: {} after {} iterations",
        solution
            .energy
            .into_format_args(megaelectronvolt, DisplayStyle::Abbreviation),
        solution.iters,
    );

    Ok(())
}
