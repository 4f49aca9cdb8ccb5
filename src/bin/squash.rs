use anyhow::Result;
use revsquash::domain::squash::{squash, KeyMode};
use revsquash::json;

const INPUT: &str = "revenues.json";
const OUTPUT: &str = "squashed_revenues.json";

fn main() -> Result<()> {
    let revenues = json::read(INPUT)?;
    let squashed = squash(revenues, KeyMode::DateClient);
    json::write(OUTPUT, &squashed)?;

    println!("Revenues have been squashed and saved to {OUTPUT}");
    Ok(())
}
