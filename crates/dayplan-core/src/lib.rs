//! # Dayplan Core Library
//!
//! State engine for a single-screen weekly agenda: the current week as a
//! strip of selectable days, and the task list for the selected day,
//! ordered chronologically. Rendering lives elsewhere; this crate owns
//! the logic and publishes state for a presentation layer to consume.
//!
//! ## Architecture
//!
//! - **Week strip**: computed once at startup from the startup instant;
//!   day selection never recomputes it
//! - **Filter passes**: pure filter-and-sort over an immutable task
//!   snapshot, run off the owning thread; results whose day tag no
//!   longer matches the selection are discarded, never published
//! - **Tri-state result**: unset (pass in flight), empty (no matches),
//!   populated
//!
//! ## Key Components
//!
//! - [`AgendaStore`]: owns the selected day, the week strip and the
//!   filtered list; publishes [`AgendaEvent`]s
//! - [`filter_and_sort`]: the pure filter/sort engine
//! - [`week_strip`] and the time predicates in [`calendar`]
//! - [`Config`]: calendar conventions (first day of week)

pub mod calendar;
pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod store;
pub mod task;


pub use calendar::{is_current_hour, is_same_day, is_selected_day, week_strip, CalendarRules};
pub use config::Config;
pub use error::ConfigError;
pub use events::{AgendaEvent, AgendaSnapshot};
pub use filter::filter_and_sort;
pub use store::AgendaStore;
pub use task::{SeedTasks, Task, TaskSource};
