//! Agenda state store.
//!
//! Single source of truth for the agenda screen: the selected day, the
//! week strip, and the (possibly still computing) filtered task list.
//!
//! Filter passes run on the blocking worker pool over an immutable task
//! snapshot. Completions come back over a channel that only the store
//! owner drains, so published state is written from one place. Each pass
//! carries the day it was requested for; a completion whose day no longer
//! matches the current selection is discarded, which keeps a slow stale
//! pass from clobbering a fresher one.
//!
//! The store never reads the wall clock. Construction takes `now`
//! explicitly and the week strip is computed exactly once from it; day
//! selection never recomputes the strip.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::calendar::{self, CalendarRules};
use crate::events::{AgendaEvent, AgendaSnapshot};
use crate::filter;
use crate::task::{Task, TaskSource};

/// Completed filter pass, tagged with the day it was computed for.
struct PassOutcome {
    day: NaiveDate,
    tasks: Vec<Task>,
}

/// Owns all published agenda state and orchestrates recomputation.
pub struct AgendaStore {
    tasks: Arc<[Task]>,
    reference_day: NaiveDate,
    week: Vec<NaiveDate>,
    /// `None` while a pass is in flight, `Some` once one has published.
    filtered: Option<Vec<Task>>,
    in_flight: usize,
    outcome_tx: UnboundedSender<PassOutcome>,
    outcome_rx: UnboundedReceiver<PassOutcome>,
    subscribers: Vec<UnboundedSender<AgendaEvent>>,
}

impl AgendaStore {
    /// Build the store and start the first filter pass.
    ///
    /// Loads the task source, computes the week strip once and selects
    /// the day containing `now`. The filtered list stays unset until the
    /// first pass lands; call [`settle`](Self::settle) or
    /// [`poll`](Self::poll) to drain it.
    ///
    /// Must be called from within a Tokio runtime: filter passes are
    /// submitted to the blocking worker pool.
    pub fn new(source: &dyn TaskSource, rules: CalendarRules, now: DateTime<Utc>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let mut store = Self {
            tasks: source.load().into(),
            reference_day: now.date_naive(),
            week: calendar::week_strip(now, rules),
            filtered: None,
            in_flight: 0,
            outcome_tx,
            outcome_rx,
            subscribers: Vec::new(),
        };
        store.start_pass();
        store
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn reference_day(&self) -> NaiveDate {
        self.reference_day
    }

    /// The 7-date week strip. Empty when the calendar could not produce
    /// a week interval for the startup instant.
    pub fn week(&self) -> &[NaiveDate] {
        &self.week
    }

    /// Tri-state filtered list: `None` while a pass is in flight,
    /// `Some` of an empty slice when the selected day has no tasks.
    pub fn filtered(&self) -> Option<&[Task]> {
        self.filtered.as_deref()
    }

    /// Full task set, in load order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> AgendaSnapshot {
        AgendaSnapshot {
            reference_day: self.reference_day,
            week: self.week.clone(),
            tasks: self.filtered.clone(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Select `day` and start a fresh filter pass for it.
    ///
    /// The week strip is left untouched. A pass still in flight is
    /// superseded, not aborted: its result fails the day check when it
    /// completes and is dropped.
    pub fn select_day(&mut self, day: NaiveDate) {
        self.reference_day = day;
        self.filtered = None;
        self.start_pass();
    }

    /// Subscribe to published events. Dropped receivers are pruned on the
    /// next publish.
    pub fn subscribe(&mut self) -> UnboundedReceiver<AgendaEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    // ── Pass lifecycle ───────────────────────────────────────────────

    fn start_pass(&mut self) {
        let tasks = Arc::clone(&self.tasks);
        let day = self.reference_day;
        let tx = self.outcome_tx.clone();
        self.in_flight += 1;
        tokio::task::spawn_blocking(move || {
            let tasks = filter::filter_and_sort(&tasks, day);
            // A send failure only means the store is gone.
            let _ = tx.send(PassOutcome { day, tasks });
        });
        self.publish(AgendaEvent::Recomputing { day });
    }

    /// Drain completions until no pass is in flight.
    ///
    /// Completions are applied in arrival order; see
    /// [`poll`](Self::poll) for the non-blocking variant.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.outcome_rx.recv().await {
                Some(outcome) => {
                    self.apply(outcome);
                }
                None => break,
            }
        }
    }

    /// Drain whatever completions are ready, without waiting. Returns
    /// true when a result was published. Poll-style hosts call this once
    /// per frame.
    pub fn poll(&mut self) -> bool {
        let mut published = false;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            published |= self.apply(outcome);
        }
        published
    }

    fn apply(&mut self, outcome: PassOutcome) -> bool {
        self.in_flight -= 1;
        if outcome.day != self.reference_day {
            // Superseded by a newer selection; never published.
            return false;
        }
        self.filtered = Some(outcome.tasks.clone());
        self.publish(AgendaEvent::Published {
            day: outcome.day,
            tasks: outcome.tasks,
        });
        true
    }

    fn publish(&mut self, event: AgendaEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
