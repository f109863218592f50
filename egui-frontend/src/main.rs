use button_calendar_core::CalendarDate;
use button_calendar_egui::{ButtonCalendar, CalendarConfig};
use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Pick dates on a six-week button calendar and print them as JSON.
#[derive(Parser, Debug)]
#[command(name = "button-calendar")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Month to open on and date to pre-select (YYYY-MM-DD); defaults to today
    seed_date: Option<CalendarDate>,

    /// YAML file with palette, font and window settings
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CalendarConfig::load(path)?,
        None => CalendarConfig::default(),
    };
    if cli.seed_date.is_some() {
        config.seed_date = cli.seed_date;
    }

    info!("Starting button calendar");
    let selected = ButtonCalendar::standalone(config)?.run()?;

    println!("{}", serde_json::to_string(&selected)?);
    info!("Done.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_and_config() {
        let cli = Cli::try_parse_from(["button-calendar", "2024-03-15", "--config", "calendar.yaml"]).unwrap();
        assert_eq!(cli.seed_date, Some("2024-03-15".parse().unwrap()));
        assert_eq!(cli.config, Some(PathBuf::from("calendar.yaml")));
    }

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::try_parse_from(["button-calendar"]).unwrap();
        assert!(cli.seed_date.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Cli::try_parse_from(["button-calendar", "2024-02-30"]).is_err());
        assert!(Cli::try_parse_from(["button-calendar", "--config"]).is_err());
        assert!(Cli::try_parse_from(["button-calendar", "--verbose"]).is_err());
        assert!(Cli::try_parse_from(["button-calendar", "2024-03-15", "2024-03-16"]).is_err());
    }
}
