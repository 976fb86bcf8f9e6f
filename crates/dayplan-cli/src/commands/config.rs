//! Configuration management commands.

use clap::Subcommand;
use dayplan_core::config::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the first day of week for the week strip
    SetFirstWeekday {
        /// Weekday name ("sun", "monday", ...)
        day: String,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::SetFirstWeekday { day } => {
            let mut config = Config::load_or_default();
            config.calendar.first_weekday = day;
            // Reject unparseable weekdays before they reach disk.
            config.calendar_rules()?;
            config.save()?;
            println!("first weekday updated");
        }
    }
    Ok(())
}
