use anyhow::Result;
use revsquash::domain::squash::{squash, KeyMode};
use revsquash::json;

const INPUT: &str = "revenues.json";

fn main() -> Result<()> {
    let revenues = json::read(INPUT)?;
    let squashed = squash(revenues, KeyMode::DateClientType);
    json::write_with_backup(INPUT, &squashed)?;

    println!("Revenues have been squashed in {INPUT}; previous file kept at {INPUT}.bak");
    Ok(())
}
