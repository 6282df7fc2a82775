mod render;

use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use saat_base::{Element, Language, align, guidance_for};
use saat_config::SaatConfig;
use saat_search::{
    DayHours, HourClock, compute_hours, day_outlook, hours_containing,
    resolve_current, window_for_day,
};
use saat_solar::GeoLocation;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saat", about = "Planetary hours and element alignment", version)]
struct Cli {
    #[command(flatten)]
    common: Common,
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand. Flags override config and environment.
#[derive(Args)]
struct Common {
    /// Path to a saat.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Latitude in degrees (north positive)
    #[arg(long, global = true, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees (east positive)
    #[arg(long, global = true, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// UTC datetime (YYYY-MM-DDThh:mm:ssZ) or calendar date (YYYY-MM-DD); default now
    #[arg(long, global = true)]
    date: Option<String>,
    /// Your element: fire, water, air or earth
    #[arg(long, global = true)]
    element: Option<String>,
    /// Display language: en, ar or fr
    #[arg(long, global = true)]
    lang: Option<String>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the 24 planetary hours of a day
    Hours,
    /// Show the current hour, its alignment and guidance
    Current,
    /// Alignment of your element with an hour element
    Align {
        /// Element of the hour
        hour_element: String,
    },
    /// Time left in the current hour and the next matching window
    Window,
    /// Day outlook: harmony summary and rest-day flag
    Outlook,
    /// Re-print the current hour on a fixed interval
    Watch {
        /// Seconds between refreshes (default from config, 60)
        #[arg(long)]
        interval: Option<u64>,
        /// Stop after this many refreshes
        #[arg(long)]
        count: Option<u64>,
    },
}

/// Point in time requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
enum When {
    Instant(DateTime<Utc>),
    Date(NaiveDate),
}

fn parse_when(s: &str) -> Result<When> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(When::Instant(dt.to_utc()));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(When::Date(d));
    }
    bail!("invalid date {s:?}: expected YYYY-MM-DDThh:mm:ssZ or YYYY-MM-DD")
}

/// Resolved runtime settings.
struct Session {
    config: SaatConfig,
    location: GeoLocation,
    element: Element,
    lang: Language,
    now: DateTime<Utc>,
    date: Option<NaiveDate>,
    json: bool,
}

impl Session {
    fn from_args(common: &Common) -> Result<Self> {
        let mut config =
            SaatConfig::load_or_default(common.config.as_deref()).context("loading configuration")?;
        config.apply_env().context("applying SAAT_* environment overrides")?;
        config
            .apply_overrides(|key| match key {
                "SAAT_LATITUDE" => common.lat.map(|v| v.to_string()),
                "SAAT_LONGITUDE" => common.lon.map(|v| v.to_string()),
                "SAAT_ELEMENT" => common.element.clone(),
                "SAAT_LANG" => common.lang.clone(),
                _ => None,
            })
            .context("applying command-line options")?;

        let location = config.location()?;
        if !location.is_accurate {
            info!(city = %location.city_name, "no location configured, using default");
        }
        let (now, date) = match common.date.as_deref().map(parse_when).transpose()? {
            Some(When::Instant(t)) => (t, None),
            Some(When::Date(d)) => (Utc::now(), Some(d)),
            None => (Utc::now(), None),
        };
        Ok(Self {
            element: config.user_element()?,
            lang: config.language()?,
            location: location.coordinates,
            config,
            now,
            date,
            json: common.json,
        })
    }

    fn day(&self) -> Result<DayHours> {
        let provider = self.config.provider();
        let hours = self.config.hours_config()?;
        let day = match self.date {
            Some(d) => compute_hours(&provider, d, &self.location, self.now, &hours)?,
            None => hours_containing(&provider, self.now, &self.location, &hours)?,
        };
        Ok(day)
    }

    fn offset(&self) -> Result<chrono::FixedOffset> {
        Ok(self.config.hours_config()?.local_offset(&self.location))
    }

    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            print!("{}", text());
        }
        Ok(())
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let session = Session::from_args(&cli.common)?;
    let offset = session.offset()?;
    let lang = session.lang;

    match cli.command {
        Commands::Hours => {
            let day = session.day()?;
            session.emit(&day, || render::day(&day, &offset, lang))?;
        }

        Commands::Current => {
            let day = session.day()?;
            let Some(hour) = resolve_current(day.hours()).copied() else {
                bail!("no planetary hour contains {}", session.now);
            };
            let alignment = align(session.element, hour.element());
            let guidance = guidance_for(alignment.quality, lang);

            #[derive(Serialize)]
            struct Current {
                hour: saat_search::PlanetaryHour,
                alignment: saat_base::ElementAlignment,
                guidance: saat_base::Guidance,
            }
            let current = Current { hour, alignment, guidance };
            session.emit(&current, || {
                format!(
                    "{}\n{}\n{}",
                    render::hour_line(&hour, &offset, lang),
                    render::alignment(&alignment, lang),
                    render::guidance(&guidance)
                )
            })?;
        }

        Commands::Align { hour_element } => {
            let hour: Element = hour_element
                .parse()
                .with_context(|| format!("hour element {hour_element:?}"))?;
            let alignment = align(session.element, hour);
            session.emit(&alignment, || format!("{}\n", render::alignment(&alignment, lang)))?;
        }

        Commands::Window => {
            let day = session.day()?;
            let provider = session.config.provider();
            let window = window_for_day(
                &provider,
                &day,
                &session.location,
                session.element,
                session.now,
                &session.config.hours_config()?,
                &session.config.window_thresholds(),
            )?;
            session.emit(&window, || render::window(&window, &offset, lang))?;
        }

        Commands::Outlook => {
            let day = match session.date {
                Some(_) => session.day()?,
                None => {
                    let hours = session.config.hours_config()?;
                    let date = hours.local_date(session.now, &session.location);
                    compute_hours(
                        &session.config.provider(),
                        date,
                        &session.location,
                        session.now,
                        &hours,
                    )?
                }
            };
            let policy = session.config.rest_day_policy();
            let outlook = day_outlook(day.hours(), session.element, &policy);
            session.emit(&outlook, || render::outlook(&outlook))?;
        }

        Commands::Watch { interval, count } => {
            let interval = interval
                .map(std::time::Duration::from_secs)
                .unwrap_or_else(|| session.config.refresh_interval());
            if interval.is_zero() {
                bail!("--interval must be positive");
            }
            let mut clock = HourClock::new(
                session.config.provider(),
                session.location,
                session.element,
                session.config.clock_config()?,
            )?;
            let mut ticks = 0u64;
            loop {
                let snapshot = clock.tick(Utc::now())?;
                session.emit(&snapshot, || render::snapshot(&snapshot, &offset, lang))?;
                ticks += 1;
                if count.is_some_and(|n| ticks >= n) {
                    break;
                }
                thread::sleep(interval);
            }
        }
    }

    Ok(())
}
