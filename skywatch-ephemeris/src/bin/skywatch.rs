use chrono::{DateTime, Duration, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use skywatch_core::{LatitudePole, LongitudePole, Observatory, Place};
use skywatch_ephemeris::{moon, planets, stars, sun};
use skywatch_ephemeris::{MoonPosition, PlanetPosition, StarPosition, SunPosition};

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "skywatch")]
#[command(about = "Topocentric ephemeris tables for Sun, Moon, planets, and bright stars")]
struct Cli {
    /// Site latitude magnitude, degrees
    #[arg(long, default_value = "13.0068")]
    latitude: f64,

    /// Latitude hemisphere
    #[arg(long, value_enum, default_value = "north")]
    latitude_pole: PoleNorthSouth,

    /// Site longitude magnitude, degrees
    #[arg(long, default_value = "76.0996")]
    longitude: f64,

    /// Longitude hemisphere
    #[arg(long, value_enum, default_value = "east")]
    longitude_pole: PoleEastWest,

    /// Site name, for the table caption
    #[arg(long, default_value = "Hassan")]
    site: String,

    /// IANA time zone of the site (presentation only; times stay UTC)
    #[arg(long, default_value = "Asia/Calcutta")]
    time_zone: String,

    /// Start of the span, RFC 3339 UTC (e.g. 2017-11-07T00:00:00Z)
    #[arg(long, default_value = "2017-11-07T00:00:00Z")]
    start: DateTime<Utc>,

    /// End of the span, RFC 3339 UTC; defaults to start + 1 hour
    #[arg(long)]
    end: Option<DateTime<Utc>>,

    /// Sampling step in minutes
    #[arg(long, default_value = "10")]
    step: u32,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum PoleNorthSouth {
    North,
    South,
}

#[derive(Clone, ValueEnum)]
enum PoleEastWest {
    East,
    West,
}

#[derive(Subcommand)]
enum Commands {
    /// Sun ephemeris
    Sun,
    /// Moon ephemeris with distance and phase
    Moon,
    /// Planet ephemeris
    Planet {
        /// Planet name, e.g. Mars
        name: String,
    },
    /// Star ephemeris
    Star {
        /// Star identifier, e.g. Sirius
        id: String,
        /// Constellation, e.g. "Canis Major"
        constellation: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let place = Place::new(
        &cli.site,
        cli.latitude,
        match cli.latitude_pole {
            PoleNorthSouth::North => LatitudePole::North,
            PoleNorthSouth::South => LatitudePole::South,
        },
        cli.longitude,
        match cli.longitude_pole {
            PoleEastWest::East => LongitudePole::East,
            PoleEastWest::West => LongitudePole::West,
        },
        &cli.time_zone,
        "",
    )?;

    let start = cli.start;
    let end = cli.end.unwrap_or(start + Duration::hours(1));
    let observatory = Observatory::new(place, start);

    match &cli.command {
        Commands::Sun => {
            let records = sun::ephemeris(&observatory, start, end, cli.step)?;
            match cli.format {
                OutputFormat::Table => {
                    print_caption("Sun", &observatory);
                    print_table(SunPosition::header(), &records);
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
            }
        }
        Commands::Moon => {
            let records = moon::ephemeris(&observatory, start, end, cli.step)?;
            match cli.format {
                OutputFormat::Table => {
                    print_caption("Moon", &observatory);
                    print_table(MoonPosition::header(), &records);
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
            }
        }
        Commands::Planet { name } => {
            let records = planets::ephemeris_by_name(name, &observatory, start, end, cli.step)?;
            match cli.format {
                OutputFormat::Table => {
                    print_caption(name, &observatory);
                    print_table(PlanetPosition::header(), &records);
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
            }
        }
        Commands::Star { id, constellation } => {
            let records =
                stars::ephemeris_by_id(id, constellation, &observatory, start, end, cli.step)?;
            match cli.format {
                OutputFormat::Table => {
                    print_caption(&format!("{id} ({constellation})"), &observatory);
                    print_table(StarPosition::header(), &records);
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
            }
        }
    }

    Ok(())
}

fn print_caption(body: &str, observatory: &Observatory) {
    let place = observatory.place();
    println!(
        "{} as seen from {} ({}, {})",
        body,
        place.name(),
        skywatch_core::angle::latitude_string(place.latitude()),
        skywatch_core::angle::longitude_string(place.longitude()),
    );
}

fn print_table<R: std::fmt::Display>(header: &str, records: &[R]) {
    println!("{header}");
    for record in records {
        println!("{record}");
    }
    println!("\nTotal samples: {}", records.len());
}
