use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use jyoti_config::EphemerisConfig;
use jyoti_core::{Ephemeris, Observation, SunParams};
use jyoti_math::{deg_to_dms, dms_to_deg};
use jyoti_search::{Almanac, TamilCalendarConfig, kali_year, saka_date, tamil_date};
use jyoti_time::{EastWest, NorthSouth};
use jyoti_vedic_base::{
    bhava_sandhis, compute_lagna, house_cusps, nakshatra_from_longitude, navamsa_rashi,
    rashi_from_longitude,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jyoti", about = "Traditional Tamil ephemeris CLI")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// JSON file overriding the ephemeris constants
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// JSON file overriding the calendar search limits
    #[arg(long, global = true)]
    calendar_config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

/// Civil instant and place shared by every position command.
#[derive(Args, Clone)]
struct ObservationArgs {
    /// Civil date-time (YYYY-MM-DD HH:MM[:SS])
    #[arg(long, default_value = "2014-09-12 17:30", value_parser = parse_civil)]
    date: NaiveDateTime,
    /// Zone offset magnitude in seconds
    #[arg(long, default_value_t = 19_800.0)]
    offset: f64,
    /// Longitude magnitude in degrees
    #[arg(long, default_value_t = 78.2)]
    lon: f64,
    /// Latitude magnitude in degrees
    #[arg(long, default_value_t = 11.66)]
    lat: f64,
    /// Longitude (and zone offset) is west of Greenwich
    #[arg(long)]
    west: bool,
    /// Latitude is south of the equator
    #[arg(long)]
    south: bool,
}

impl ObservationArgs {
    fn observation(&self) -> Observation {
        let lon_dir = if self.west {
            EastWest::West
        } else {
            EastWest::East
        };
        let lat_dir = if self.south {
            NorthSouth::South
        } else {
            NorthSouth::North
        };
        Observation::new(
            self.date,
            self.offset,
            self.lon,
            lon_dir,
            self.lat,
            lat_dir,
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Solar longitude, sunrise and sunset
    Sun {
        #[command(flatten)]
        obs: ObservationArgs,
    },
    /// Lunar longitude and nodes
    Moon {
        #[command(flatten)]
        obs: ObservationArgs,
    },
    /// Geocentric positions of the seven planets
    Planets {
        #[command(flatten)]
        obs: ObservationArgs,
    },
    /// Ascendant and the twelve house cusps
    Houses {
        #[command(flatten)]
        obs: ObservationArgs,
    },
    /// Tamil solar calendar date
    TamilDate {
        #[command(flatten)]
        obs: ObservationArgs,
    },
    /// Saka-era date and Kali year for a civil date
    Saka {
        /// Civil date-time (YYYY-MM-DD HH:MM[:SS])
        #[arg(long, default_value = "2014-09-12 17:30", value_parser = parse_civil)]
        date: NaiveDateTime,
    },
    /// Full almanac for one observation
    Almanac {
        #[command(flatten)]
        obs: ObservationArgs,
    },
    /// Convert between decimal degrees and DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
        /// Arc minutes added to the degrees
        #[arg(long, default_value_t = 0.0)]
        minutes: f64,
        /// Arc seconds added to the degrees
        #[arg(long, default_value_t = 0.0)]
        seconds: f64,
    },
    /// Print the effective configuration as JSON
    Config,
}

fn parse_civil(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| format!("expected YYYY-MM-DD HH:MM[:SS], got {s}: {e}"))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn load_engine(path: Option<&Path>) -> Ephemeris {
    let config = match path {
        Some(p) => EphemerisConfig::from_json_file(p).unwrap_or_else(|e| exit_with(e)),
        None => EphemerisConfig::default(),
    };
    Ephemeris::new(config).unwrap_or_else(|e| exit_with(e))
}

fn load_calendar(path: Option<&Path>) -> TamilCalendarConfig {
    let Some(p) = path else {
        return TamilCalendarConfig::default();
    };
    let text = std::fs::read_to_string(p).unwrap_or_else(|e| exit_with(e));
    serde_json::from_str(&text).unwrap_or_else(|e| exit_with(e))
}

fn solve_sun(eph: &Ephemeris, obs: &Observation) -> SunParams {
    eph.sun(obs).unwrap_or_else(|e| exit_with(e))
}

fn print_sun(sun: &SunParams) {
    println!("Reference time:   {}", sun.reference_time);
    println!("Local mean time:  {}", sun.local_time);
    println!("Years elapsed:    {:.6}", sun.years_since_epoch);
    println!("Days elapsed:     {:.6}", sun.days_since_epoch);
    println!("Precession:       {}", deg_to_dms(sun.precession_deg));
    println!("Mean longitude:   {}", deg_to_dms(sun.mean_longitude_deg));
    println!("Apse:             {}", deg_to_dms(sun.apse_deg));
    println!("Mandaphalam:      {:.2}\"", sun.mandaphalam_arcsec);
    println!(
        "True longitude:   {} ({:.6} deg)",
        deg_to_dms(sun.true_longitude_deg),
        sun.true_longitude_deg
    );
    println!("Tropical:         {}", deg_to_dms(sun.tropical_longitude_deg));
    println!("Radius vector:    {:.6}", sun.radius_vector);
    println!("Charam:           {:.6} deg", sun.charam_deg);
    println!("Pranam:           {:.6} deg", sun.pranam_deg);
    if sun.latitude_clamped {
        println!("Hour angle:       {:.6} deg (latitude clamped)", sun.hour_angle_deg);
    } else {
        println!("Hour angle:       {:.6} deg", sun.hour_angle_deg);
    }
    println!("Sunrise:          {}", sun.sunrise);
    println!("Sunset:           {}", sun.sunset);
}

fn print_almanac(a: &Almanac) {
    print_sun(&a.sun);
    println!();
    let sun_rashi = a.sun_rashi();
    let moon_rashi = a.moon_rashi();
    let star = a.moon_nakshatra();
    println!(
        "Sun:     {} in {} ({})",
        deg_to_dms(a.sun.true_longitude_deg),
        sun_rashi.rashi.name(),
        sun_rashi.rashi.tamil_name()
    );
    println!(
        "Moon:    {} in {} ({}), {} pada {}",
        deg_to_dms(a.moon.true_longitude_deg),
        moon_rashi.rashi.name(),
        moon_rashi.rashi.tamil_name(),
        star.nakshatra.tamil_name(),
        star.pada
    );
    println!("Rahu:    {}", deg_to_dms(a.moon.rahu_deg));
    println!("Ketu:    {}", deg_to_dms(a.moon.ketu_deg));
    for p in a.planets.iter() {
        let info = a.planet_rashi(p.planet);
        let bhava = a
            .bhava_of(p.true_longitude_deg)
            .map(|b| (b + 1).to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<8} {} in {}, bhava {}, navamsa {}",
            format!("{}:", p.planet.name()),
            deg_to_dms(p.true_longitude_deg),
            info.rashi.name(),
            bhava,
            a.planet_navamsa(p.planet) + 1
        );
    }
    println!();
    println!("Lagna:          {}", deg_to_dms(a.houses.lagna()));
    println!("Culmination:    {}", deg_to_dms(a.houses.culmination()));
    println!(
        "Thithi:         {} ({} {})",
        a.panchanga.thithi.name(),
        a.panchanga.thithi.paksha.name(),
        a.panchanga.thithi.in_paksha
    );
    println!("Yogam:          {}", a.panchanga.yogam.name());
    println!("Karanam:        {}", a.panchanga.karanam.name());
    println!("Tamil date:     {}", a.tamil_date);
    println!("Saka date:      {}", a.saka_date);
    println!("Kali year:      {}", a.kali_year);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config_path = cli.config.as_deref();
    let calendar_path = cli.calendar_config.as_deref();

    match cli.command {
        Commands::Sun { obs } => {
            let eph = load_engine(config_path);
            let sun = solve_sun(&eph, &obs.observation());
            print_sun(&sun);
        }

        Commands::Moon { obs } => {
            let eph = load_engine(config_path);
            let sun = solve_sun(&eph, &obs.observation());
            let moon = eph.moon(&sun);
            let star = nakshatra_from_longitude(moon.true_longitude_deg);
            println!("Mean longitude:  {}", deg_to_dms(moon.mean_longitude_deg));
            println!("Apse:            {}", deg_to_dms(moon.apse_deg));
            println!("Mandaphalam:     {:.2}\"", moon.mandaphalam_arcsec);
            println!(
                "True longitude:  {} ({:.6} deg)",
                deg_to_dms(moon.true_longitude_deg),
                moon.true_longitude_deg
            );
            println!(
                "Nakshatra:       {} ({}) pada {}",
                star.nakshatra.name(),
                star.nakshatra.tamil_name(),
                star.pada
            );
            println!("Rahu:            {}", deg_to_dms(moon.rahu_deg));
            println!("Ketu:            {}", deg_to_dms(moon.ketu_deg));
        }

        Commands::Planets { obs } => {
            let eph = load_engine(config_path);
            let sun = solve_sun(&eph, &obs.observation());
            let moon = eph.moon(&sun);
            let planets = eph.planets(&sun, &moon);
            println!(
                "{:<8} {:>14} {:>10} {:>14} {:>10} {:>8}",
                "Planet", "Longitude", "Latitude", "Heliocentric", "Velocity", "Radius"
            );
            for p in planets.iter() {
                println!(
                    "{:<8} {:>14} {:>10.4} {:>14} {:>10.6} {:>8.4}",
                    p.planet.name(),
                    deg_to_dms(p.true_longitude_deg).to_string(),
                    p.latitude_deg,
                    deg_to_dms(p.heliocentric_longitude_deg).to_string(),
                    p.geo_velocity_deg,
                    p.radius_vector
                );
            }
        }

        Commands::Houses { obs } => {
            let eph = load_engine(config_path);
            let observation = obs.observation();
            let sun = solve_sun(&eph, &observation);
            let lagna =
                compute_lagna(eph.config(), &observation, &sun).unwrap_or_else(|e| exit_with(e));
            let houses = house_cusps(
                &lagna,
                observation.latitude_deg,
                eph.config().obliquity_rad(),
                sun.precession_deg,
            );
            let sandhis = bhava_sandhis(&houses);
            println!("Time correction: {:.6} deg", lagna.local_time_correction_deg);
            println!("RAMC:            {}", deg_to_dms(lagna.ramc_deg));
            if houses.polar {
                println!("(intermediate cusps from the polar branch)");
            }
            for (i, (cusp, sandhi)) in houses.iter().zip(sandhis.iter()).enumerate() {
                let info = rashi_from_longitude(*cusp);
                println!(
                    "House {:>2}: {} {:<10} sandhi {} .. {}",
                    i + 1,
                    deg_to_dms(*cusp),
                    info.rashi.name(),
                    deg_to_dms(sandhi.start_deg),
                    deg_to_dms(sandhi.end_deg)
                );
            }
        }

        Commands::TamilDate { obs } => {
            let eph = load_engine(config_path);
            let calendar = load_calendar(calendar_path);
            let date =
                tamil_date(&eph, &obs.observation(), &calendar).unwrap_or_else(|e| exit_with(e));
            println!("{date}");
            println!("Month began:  {}", date.crossing);
            println!("Month sign:   {}", date.month.rashi().name());
            println!("Cycle year:   {} of 60", date.year_index() + 1);
        }

        Commands::Saka { date } => {
            let saka = saka_date(date.date());
            println!("{saka}");
            println!("Kali year: {}", kali_year(saka.year));
        }

        Commands::Almanac { obs } => {
            let eph = load_engine(config_path);
            let calendar = load_calendar(calendar_path);
            let almanac = Almanac::compute(&eph, &obs.observation(), &calendar)
                .unwrap_or_else(|e| exit_with(e));
            print_almanac(&almanac);
        }

        Commands::Dms {
            deg,
            minutes,
            seconds,
        } => {
            let total = dms_to_deg(deg, minutes, seconds);
            let info = rashi_from_longitude(total);
            println!("{} ({total:.6} deg)", deg_to_dms(total));
            println!(
                "{} {} (navamsa {})",
                info.rashi.name(),
                info.dms,
                navamsa_rashi(total).name()
            );
        }

        Commands::Config => {
            let eph = load_engine(config_path);
            let calendar = load_calendar(calendar_path);
            let doc = serde_json::json!({
                "ephemeris": eph.config(),
                "calendar": calendar,
            });
            match serde_json::to_string_pretty(&doc) {
                Ok(text) => println!("{text}"),
                Err(e) => exit_with(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn civil_formats() {
        let a = parse_civil("2014-09-12 17:30").unwrap();
        let b = parse_civil("2014-09-12 17:30:00").unwrap();
        let c = parse_civil("2014-09-12T17:30:00").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert!(parse_civil("12/09/2014").is_err());
    }

    #[test]
    fn defaults_reproduce_example() {
        let cli = Cli::try_parse_from(["jyoti", "sun"]).unwrap();
        let Commands::Sun { obs } = cli.command else {
            panic!("expected sun");
        };
        let o = obs.observation();
        assert_eq!(o.civil, parse_civil("2014-09-12 17:30").unwrap());
        assert_eq!(o.meridian_offset_s, 19_800.0);
        assert_eq!(o.longitude_dir, EastWest::East);
        assert_eq!(o.latitude_dir, NorthSouth::North);
        assert!((o.latitude_deg - 11.66).abs() < 1e-12);
    }

    #[test]
    fn hemisphere_flags() {
        let cli = Cli::try_parse_from([
            "jyoti", "-vv", "houses", "--lon", "43.2", "--lat", "22.9", "--west", "--south",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Houses { obs } = cli.command else {
            panic!("expected houses");
        };
        let o = obs.observation();
        assert_eq!(o.longitude_dir, EastWest::West);
        assert!(o.is_south());
        assert!((o.signed_longitude() + 43.2).abs() < 1e-12);
    }
}
