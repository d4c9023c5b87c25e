//! Reads `n/d` values from stdin, then prints how often each one appeared and some totals.
use std::io::Read;

use log::{info, warn};
use rational::{parsing::RationalStream, tally::Tally, Rational};

/// Formats a total that may not fit in a `Rational`.
fn or_overflow(value: Option<Rational>) -> String {
    match value {
        Some(r) => r.to_string(),
        None => "overflow".to_owned(),
    }
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let mut stream = RationalStream::new(&input);
    let mut tally = Tally::new();
    for value in stream.by_ref() {
        match value {
            Ok(r) => {
                tally.insert(r);
            }
            Err(e) => warn!("Skipping value: {}", e),
        }
    }

    if !stream.is_exhausted() {
        warn!(
            "Stopped reading at {:?}",
            stream.remaining().chars().take(20).collect::<String>()
        );
    }
    info!("Read {} values", tally.total());

    if tally.is_empty() {
        println!("No values read.");
        return Ok(());
    }

    println!("{}\n", tally.table());
    println!("count:    {}", tally.total());
    println!("distinct: {}", tally.distinct());
    println!("sum:      {}", or_overflow(tally.sum()));
    println!("product:  {}", or_overflow(tally.product()));
    if let (Some(min), Some(max)) = (tally.min(), tally.max()) {
        println!("min:      {}", min);
        println!("max:      {}", max);
    }
    println!("mean:     {}", or_overflow(tally.mean()));

    Ok(())
}
