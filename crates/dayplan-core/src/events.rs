//! Published agenda events.
//!
//! Every state change in the store produces an event. The presentation
//! layer subscribes and re-renders on each publish, or pulls the full
//! [`AgendaSnapshot`] instead.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::Task;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AgendaEvent {
    /// A filter pass started; the filtered list is unset until it lands.
    Recomputing { day: NaiveDate },
    /// A filter pass finished for the currently selected day and its
    /// result is now the published list.
    Published { day: NaiveDate, tasks: Vec<Task> },
}

/// Pull-style view of the whole agenda state.
///
/// `tasks` is tri-state: `None` while a pass is in flight, `Some` of an
/// empty vector when the day has no tasks, `Some` non-empty otherwise.
/// The presentation layer shows a loading indicator for the first and an
/// empty-state message for the second.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaSnapshot {
    pub reference_day: NaiveDate,
    pub week: Vec<NaiveDate>,
    pub tasks: Option<Vec<Task>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serialization_is_tagged() {
        let event = AgendaEvent::Recomputing {
            day: "2024-02-08".parse().unwrap(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "Recomputing");
        assert_eq!(json["day"], "2024-02-08");
    }
}
