//! Fills an empty database with a handful of Heidelberg coffee spots.
//!
//! ```bash
//! cargo run -p campus-db --bin seed -- --db ./data/campus.db --reset
//! ```

use std::env;

use anyhow::Context;
use campus_core::{CampusType, Pos, PosType};
use campus_db::{Database, DbConfig};
use chrono::{DateTime, Utc};

/// (name, description, type, campus, street, house number, postal code)
const POS_DATA: &[(&str, &str, PosType, CampusType, &str, &str, u32)] = &[
    (
        "Schmelzpunkt",
        "Great waffles",
        PosType::Cafe,
        CampusType::Altstadt,
        "Hauptstraße",
        "90",
        69117,
    ),
    (
        "Bäcker Görtz",
        "Bakery with coffee to go",
        PosType::Bakery,
        CampusType::Inf,
        "Berliner Str.",
        "43",
        69120,
    ),
    (
        "Café Botanik",
        "Campus cafeteria next to the botanical garden",
        PosType::Cafeteria,
        CampusType::Inf,
        "Im Neuenheimer Feld",
        "304",
        69120,
    ),
    (
        "Crazy Sheep",
        "Specialty coffee roastery",
        PosType::Cafe,
        CampusType::Altstadt,
        "Untere Straße",
        "24",
        69117,
    ),
    (
        "Automat Zeughaus",
        "Vending machine in the Zeughaus mensa",
        PosType::VendingMachine,
        CampusType::Altstadt,
        "Marstallhof",
        "3",
        69117,
    ),
    (
        "Bergheimer Café",
        "Coffee bar at the social sciences campus",
        PosType::Cafe,
        CampusType::Bergheim,
        "Bergheimer Str.",
        "58",
        69115,
    ),
    (
        "Café am Neckar",
        "Riverside coffee near the Theodor-Heuss bridge",
        PosType::Cafe,
        CampusType::Neuenheim,
        "Brückenstraße",
        "2",
        69120,
    ),
];

const USAGE: &str = "\
Usage: seed [--db <PATH>] [--reset]

  --db <PATH>   SQLite file (default: ./campus_coffee.db)
  --reset       Delete all POS before seeding";

struct Args {
    db_path: String,
    reset: bool,
}

/// `None` when only help was requested.
fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Option<Args>> {
    let mut parsed = Args {
        db_path: "./campus_coffee.db".to_string(),
        reset: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--db" | "-d" => {
                parsed.db_path = args.next().context("--db needs a path")?;
            }
            "--reset" | "-r" => parsed.reset = true,
            "--help" | "-h" => return Ok(None),
            other => anyhow::bail!("unknown argument {other}\n\n{USAGE}"),
        }
    }

    Ok(Some(parsed))
}

fn seed_pos(now: DateTime<Utc>) -> impl Iterator<Item = Pos> {
    POS_DATA.iter().map(
        move |&(name, description, pos_type, campus, street, house_number, postal_code)| Pos {
            id: None,
            created_at: Some(now),
            updated_at: Some(now),
            name: name.to_string(),
            description: description.to_string(),
            pos_type,
            campus,
            street: street.to_string(),
            house_number: house_number.to_string(),
            postal_code,
            city: "Heidelberg".to_string(),
            osm_node_id: None,
        },
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Some(args) = parse_args(env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };

    let db = Database::new(DbConfig::new(&args.db_path))
        .await
        .with_context(|| format!("opening {}", args.db_path))?;
    let repo = db.pos();
    println!("Seeding {}", args.db_path);

    if args.reset {
        repo.delete_all().await?;
        println!("  existing POS deleted");
    }

    let existing = repo.count().await?;
    if existing > 0 {
        println!("  {existing} POS already present, nothing to do (use --reset)");
        db.close().await;
        return Ok(());
    }

    let mut inserted = 0;
    for pos in seed_pos(Utc::now()) {
        let saved = repo
            .insert(&pos)
            .await
            .with_context(|| format!("inserting {}", pos.name))?;
        inserted += 1;
        println!("  + [{}] {} ({})", saved.id.unwrap_or_default(), saved.name, saved.campus);
    }

    db.close().await;
    println!("Seeded {inserted} POS");
    Ok(())
}
