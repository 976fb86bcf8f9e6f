//! Day filtering and chronological ordering of the task list.

use chrono::NaiveDate;

use crate::calendar;
use crate::task::Task;

/// Select the tasks scheduled on `day`, ordered by time ascending.
///
/// The sort is stable, so tasks sharing an instant keep their load order.
/// Empty input and an empty selection are normal results, not errors.
/// Pure over its inputs; safe to run on a worker thread.
pub fn filter_and_sort(tasks: &[Task], day: NaiveDate) -> Vec<Task> {
    let mut selected: Vec<Task> = tasks
        .iter()
        .filter(|task| calendar::is_same_day(task.date, day))
        .cloned()
        .collect();
    selected.sort_by(|a, b| a.date.cmp(&b.date));
    selected
}
