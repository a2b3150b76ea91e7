use chrono::{TimeZone, Utc};
use cyberflake::CyberFlake;

fn main() -> cyberflake::Result<()> {
    // One generator per process, shared by every record constructor
    let generator = CyberFlake::new();

    let id1 = generator.generate()?;
    let id2 = generator.generate()?;
    let backdated = generator.generate_at(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap())?;

    println!("Generated IDs:");
    print_id(&id1, &generator)?;
    print_id(&id2, &generator)?;
    print_id(&backdated, &generator)?;

    println!(
        "\nDuration between {id1} and {backdated}: {} ms",
        generator.extract.duration(&id1, &backdated)?
    );

    match generator.generate_at("not-a-date") {
        Ok(id) => println!("unexpected id {id}"),
        Err(e) => println!("Rejected: {e}"),
    }
    Ok(())
}

fn print_id(id: &str, generator: &CyberFlake) -> cyberflake::Result<()> {
    let parts = generator.extract.deconstruct(id)?;
    println!(
        "  ID: {id}, Timestamp: {}, Human date: {}, Node ID: {}, Process ID: {}, Sequence: {}\n      {}",
        parts.timestamp,
        parts.date(),
        parts.node_id,
        parts.process_id,
        parts.sequence,
        parts.binary
    );
    Ok(())
}
