use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use jataka_rs::{
    AnalyticEphemeris, BirthDetails, Chart, ChartConfig, KnowledgeBase, compute_chart,
    load_knowledge, nakshatra_from_longitude, rashi_from_longitude,
};
use jataka_time::datetime_to_jd_utc;

#[derive(Parser)]
#[command(name = "jataka", about = "Sidereal birth chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full birth chart with dashas, yogas, doshas and strengths
    Chart {
        /// Label for the chart
        #[arg(long, default_value = "")]
        name: String,
        /// Local birth date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Local wall-clock time (HH:MM or HH:MM:SS)
        #[arg(long)]
        time: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// UTC offset in hours at the birthplace (e.g. 5.5, -5)
        #[arg(long, allow_hyphen_values = true)]
        tz: f64,
        /// Reference instant for current dasha and Sade Sati (RFC 3339, default now)
        #[arg(long)]
        as_of: Option<DateTime<Utc>>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// TOML chart configuration
        #[arg(long)]
        config: Option<PathBuf>,
        /// JSON knowledge base replacing the built-in catalog
        #[arg(long)]
        knowledge: Option<PathBuf>,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Ayanamsha at 0h UTC on a date
    Ayanamsha {
        /// UTC date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// TOML chart configuration
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>) -> ChartConfig {
    match path {
        Some(p) => ChartConfig::from_file(p).unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        }),
        None => ChartConfig::default(),
    }
}

fn print_chart(chart: &Chart) {
    let d1 = &chart.d1;
    let asc = &d1.ascendant;
    println!("{} ({} UTC, JD {:.5})", chart.birth.name, chart.utc, chart.jd_utc);
    println!("Ayanamsha: {:.4} deg", d1.ayanamsha_deg);
    println!(
        "Lagna: {} {:.4} deg - {} pada {}",
        asc.rashi.name(),
        asc.degrees_in_rashi,
        asc.nakshatra.name(),
        asc.pada
    );
    println!();
    println!("Planets:");
    for p in &d1.planets {
        println!(
            "  {:<8} {:<10} {:>8.4} deg  house {:>2}  {:<20} pada {}{}",
            p.english_name,
            p.rashi.name(),
            p.degrees_in_rashi,
            p.house,
            p.nakshatra.name(),
            p.pada,
            if p.retrograde { "  (R)" } else { "" }
        );
    }
    println!();
    println!("Navamsa:");
    for p in &chart.d9.planets {
        println!("  {:<8} {}", p.graha.english_name(), p.rashi.name());
    }
    println!();
    println!("Vimshottari:");
    for d in &chart.dashas {
        println!(
            "  {:<8} {} .. {}{}",
            d.lord_name,
            d.start.format("%Y-%m-%d"),
            d.end.format("%Y-%m-%d"),
            if d.is_current { "  <- current" } else { "" }
        );
    }
    println!();
    println!("Yogas:");
    if chart.yogas.is_empty() {
        println!("  (none)");
    }
    for y in &chart.yogas {
        println!("  {} - {}", y.name, y.description);
    }
    println!();
    println!("Doshas:");
    for d in &chart.doshas {
        let status = if d.present {
            format!("{:?}", d.severity)
        } else {
            "absent".to_string()
        };
        println!("  {:<16} {:<8} {}", d.name, status, d.explanation);
    }
    println!();
    println!("Strength:");
    for s in &chart.strengths {
        println!(
            "  {:<8} {:>3}  {}",
            s.graha.english_name(),
            s.score,
            s.status.label()
        );
    }
    if !chart.outer_planets.is_empty() {
        println!();
        println!("Outer planets:");
    }
    for o in &chart.outer_planets {
        println!(
            "  {:<8} {:<10} {:>8.4} deg{}",
            o.body.name(),
            o.rashi.name(),
            o.degrees_in_rashi,
            if o.retrograde { "  (R)" } else { "" }
        );
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            name,
            date,
            time,
            lat,
            lon,
            tz,
            as_of,
            json,
            config,
            knowledge,
        } => {
            let config = load_config(config.as_ref());
            let knowledge = match knowledge {
                Some(p) => load_knowledge(&p).unwrap_or_else(|e| {
                    eprintln!("{e}");
                    std::process::exit(1);
                }),
                None => KnowledgeBase::classical(),
            };
            let birth = BirthDetails {
                name,
                date,
                time,
                latitude: lat,
                longitude: lon,
                utc_offset_hours: tz,
            };
            let as_of = as_of.unwrap_or_else(Utc::now);
            let chart = compute_chart(
                &birth,
                &AnalyticEphemeris::new(),
                &knowledge,
                &config,
                as_of,
            )
            .unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            if json {
                match chart.to_json() {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("{e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print_chart(&chart);
            }
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            let dms = info.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {}, lord {} ({:.4} deg in nakshatra)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.lord.english_name(),
                info.degrees_in_nakshatra
            );
        }

        Commands::Ayanamsha { date, config } => {
            let config = load_config(config.as_ref());
            let midnight = date.and_time(chrono::NaiveTime::MIN).and_utc();
            let jd = datetime_to_jd_utc(&midnight);
            println!(
                "{} (JD {:.1}): {:.6} deg",
                date,
                jd,
                config.ayanamsha.at(jd)
            );
        }
    }
}
