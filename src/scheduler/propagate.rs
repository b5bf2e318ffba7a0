//! Completion-time propagation.
//!
//! `completion[i] = duration[i] + max(completion[d] for d in dependencies[i])`,
//! or `duration[i]` for a task without dependencies. Walking a topological
//! order guarantees every dependency is resolved before its dependents, so
//! each completion time is computed exactly once.
//!
//! # Complexity
//! O(V + E).

use tracing::trace;

use super::graph::TopologicalOrder;
use crate::error::{Result, ScheduleError};

/// Computes every task's completion time, indexed like the input list.
///
/// # Errors
/// [`ScheduleError::DurationOverflow`] if a chain's summed duration does
/// not fit in `u64`.
pub fn completion_times(order: &TopologicalOrder<'_>) -> Result<Vec<u64>> {
    let tasks = order.tasks();
    let mut memo: Vec<Option<u64>> = vec![None; tasks.len()];

    for i in order.iter() {
        let task = &tasks[i];
        // Dependencies precede `i` in the order, so all are memoized.
        let ready = task
            .dependencies
            .iter()
            .filter_map(|&d| memo[d])
            .max()
            .unwrap_or(0);
        let completion = ready
            .checked_add(task.duration)
            .ok_or(ScheduleError::DurationOverflow { task: i })?;
        trace!(task = i, ready, completion, "completion time");
        memo[i] = Some(completion);
    }

    Ok(memo.into_iter().map(Option::unwrap_or_default).collect())
}
