//! Task model and the source that supplies tasks at startup.
//!
//! The task set is immutable after load: the agenda selects and orders
//! tasks, it never creates, edits, or deletes them. [`TaskSource`] is the
//! seam for whatever provides the initial set -- seed data today, a
//! persistent store later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scheduled item on the agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Assigned once at creation and never reused. The presentation layer
    /// keys list identity and diffing off this.
    pub id: String,
    pub title: String,
    pub description: String,
    /// The scheduled instant. Day and hour membership are derived from
    /// this, never stored separately.
    pub date: DateTime<Utc>,
}

impl Task {
    /// Create a task with a fresh UUID v4 id.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            date,
        }
    }
}

/// Supplies the initial ordered task set at store construction.
pub trait TaskSource {
    /// Load every task, in presentation order. Ties in the sorted agenda
    /// keep this order.
    fn load(&self) -> Vec<Task>;
}

/// Fixed in-memory seed list used until a real task provider exists.
pub struct SeedTasks;

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

impl TaskSource for SeedTasks {
    fn load(&self) -> Vec<Task> {
        vec![
            Task::new("Meeting", "Discuss team task for the day", at(1_707_357_257)),
            Task::new(
                "Icon set",
                "Edit icons for team task for next week",
                at(1_707_357_257),
            ),
            Task::new("Prototype", "Make and send prototype", at(1_707_357_257)),
            Task::new("Check asset", "Start checking the assets", at(1_707_237_257)),
            Task::new("Team party", "Make fun with team mates", at(1_707_237_257)),
            Task::new("Client Meeting", "Explain project to client", at(1_707_270_257)),
            Task::new("Next Project", "Discuss next project with team", at(1_707_270_257)),
            Task::new("App Proposal", "Meet client for next App Proposal", at(1_707_257_257)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_serialization() {
        let task = Task::new("Meeting", "Discuss team task for the day", at(1_707_357_257));
        let json = serde_json::to_string(&task).unwrap();
        let decoded: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, task);
    }

    #[test]
    fn ids_are_unique() {
        let tasks = SeedTasks.load();
        for (i, a) in tasks.iter().enumerate() {
            for b in &tasks[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn seed_list_is_eight_tasks_in_presentation_order() {
        let tasks = SeedTasks.load();
        assert_eq!(tasks.len(), 8);
        assert_eq!(tasks[0].title, "Meeting");
        assert_eq!(tasks[7].title, "App Proposal");
    }
}
