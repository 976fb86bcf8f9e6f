//! Agenda view commands.
//!
//! This is the presentation layer over the core store: it reads the
//! published state and renders it, nothing more.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use clap::Subcommand;
use dayplan_core::calendar::{self, CalendarRules};
use dayplan_core::config::Config;
use dayplan_core::store::AgendaStore;
use dayplan_core::task::SeedTasks;

#[derive(Subcommand)]
pub enum AgendaAction {
    /// Show the week strip and the tasks for the selected day
    Show {
        /// Day to select (YYYY-MM-DD, default: today)
        #[arg(long)]
        day: Option<NaiveDate>,
        /// Print the raw snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the week strip only
    Week {
        /// Print the strip as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: AgendaAction) -> Result<(), Box<dyn std::error::Error>> {
    let rules = load_rules();
    let runtime = tokio::runtime::Runtime::new()?;

    match action {
        AgendaAction::Show { day, json } => {
            let now = Utc::now();
            let store = runtime.block_on(async {
                let mut store = AgendaStore::new(&SeedTasks, rules, now);
                if let Some(day) = day {
                    store.select_day(day);
                }
                store.settle().await;
                store
            });

            if json {
                println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
            } else {
                print_strip(&store);
                print_tasks(&store, now);
            }
        }
        AgendaAction::Week { json } => {
            let store = runtime.block_on(async { AgendaStore::new(&SeedTasks, rules, Utc::now()) });
            if json {
                println!("{}", serde_json::to_string_pretty(store.week())?);
            } else {
                print_strip(&store);
            }
        }
    }
    Ok(())
}

/// Configured rules, falling back to defaults when the config carries an
/// unparseable weekday. A malformed calendar degrades the strip, it never
/// aborts the screen.
fn load_rules() -> CalendarRules {
    let config = Config::load_or_default();
    match config.calendar_rules() {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("warning: {e}; using default week convention");
            CalendarRules::default()
        }
    }
}

fn print_strip(store: &AgendaStore) {
    if store.week().is_empty() {
        println!("(no week available)");
        return;
    }
    let cells: Vec<String> = store
        .week()
        .iter()
        .map(|d| {
            let cell = format!("{} {:02}", d.format("%a"), d.day());
            if calendar::is_selected_day(*d, store.reference_day()) {
                format!("[{cell}]")
            } else {
                format!(" {cell} ")
            }
        })
        .collect();
    println!("{}", cells.join(" "));
}

fn print_tasks(store: &AgendaStore, now: DateTime<Utc>) {
    match store.filtered() {
        None => println!("computing..."),
        Some([]) => println!("No tasks found"),
        Some(tasks) => {
            for task in tasks {
                let marker = if calendar::is_current_hour(task.date, now) {
                    ">"
                } else {
                    " "
                };
                println!(
                    "{marker} {}  {}  {}",
                    task.date.format("%H:%M"),
                    task.title,
                    task.description
                );
            }
        }
    }
}
