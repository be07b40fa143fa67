//! Dashboard counters over the task list.

use crate::models::task::Task;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub due_today: usize,
    pub overdue: usize,
}

impl TaskStats {
    /// Done tasks count as completed only; open tasks are due today or
    /// overdue according to their due date.
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        let mut stats = TaskStats {
            total: tasks.len(),
            ..Default::default()
        };
        for task in tasks {
            if task.is_done() {
                stats.completed += 1;
                continue;
            }
            match task.due_date {
                Some(due) if due == today => stats.due_today += 1,
                Some(due) if due < today => stats.overdue += 1,
                _ => {}
            }
        }
        stats
    }
}
