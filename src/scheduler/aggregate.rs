//! Reductions over per-task completion times.
//!
//! - makespan: the latest completion time across all tasks
//! - critical path: a dependency chain whose summed duration is the makespan
//! - latest finish: backward pass giving how late each task may finish
//!   without delaying the makespan
//!
//! Tasks are assumed to run with unlimited parallelism, bounded only by
//! dependency ordering.
//!
//! # Reference
//! Kelley & Walker (1959), "Critical-Path Planning and Scheduling"

use super::graph::TopologicalOrder;
use crate::models::Task;

/// Latest completion time, or `0` when there are no tasks.
pub fn makespan(completion: &[u64]) -> u64 {
    completion.iter().copied().max().unwrap_or(0)
}

/// One longest dependency chain, first task to execute first.
///
/// Starts from the earliest-listed task with the maximum completion time and
/// follows, at each step, the earliest-listed dependency that finishes last.
pub fn critical_path(tasks: &[Task], completion: &[u64]) -> Vec<usize> {
    let Some(mut current) = first_max(0..completion.len(), completion) else {
        return Vec::new();
    };

    let mut path = vec![current];
    while let Some(prev) = first_max(tasks[current].dependencies.iter().copied(), completion) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

/// Latest finish time of every task that keeps the overall finish at
/// `makespan`.
///
/// Tasks nothing depends on may finish as late as `makespan`; any other task
/// must finish before its tightest dependent has to start.
pub fn latest_finish_times(order: &TopologicalOrder<'_>, makespan: u64) -> Vec<u64> {
    let tasks = order.tasks();
    let mut latest = vec![makespan; tasks.len()];

    // Dependents come later in the order, so walking backwards settles
    // each task before it constrains its dependencies.
    for i in order.iter().rev() {
        let latest_start = latest[i].saturating_sub(tasks[i].duration);
        for &dep in &tasks[i].dependencies {
            latest[dep] = latest[dep].min(latest_start);
        }
    }
    latest
}

fn first_max(candidates: impl Iterator<Item = usize>, completion: &[u64]) -> Option<usize> {
    candidates.fold(None, |best, i| match best {
        Some(b) if completion[b] >= completion[i] => Some(b),
        _ => Some(i),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{completion_times, detect_cycles, TaskGraph};

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("A", 10),
            Task::new("B", 5).with_dependency(0),
            Task::new("C", 7).with_dependency(0),
            Task::new("A", 3).with_dependencies([1, 2]),
            Task::new("B", 8).with_dependency(3),
            Task::new("C", 4).with_dependency(4),
        ]
    }

    #[test]
    fn test_makespan() {
        assert_eq!(makespan(&[10, 5, 7]), 10);
        assert_eq!(makespan(&[]), 0);
    }

    #[test]
    fn test_critical_path_follows_longest_branch() {
        let tasks = sample_tasks();
        let completion = vec![10, 15, 17, 20, 28, 32];
        assert_eq!(critical_path(&tasks, &completion), vec![0, 2, 3, 4, 5]);
    }

    #[test]
    fn test_critical_path_ties_prefer_earlier_tasks() {
        let tasks = vec![
            Task::new("A", 5),
            Task::new("B", 5),
            Task::new("C", 1).with_dependencies([1, 0]),
            Task::new("D", 6),
        ];
        let completion = vec![5, 5, 6, 6];
        // 2 and 3 tie at 6; 2 is listed first. Its dependencies tie at 5; 1 is listed first.
        assert_eq!(critical_path(&tasks, &completion), vec![1, 2]);
    }

    #[test]
    fn test_critical_path_empty() {
        assert!(critical_path(&[], &[]).is_empty());
    }

    #[test]
    fn test_latest_finish_times() {
        let tasks = sample_tasks();
        let graph = TaskGraph::new(&tasks).unwrap();
        let order = detect_cycles(&graph).unwrap();
        let completion = completion_times(&order).unwrap();

        let latest = latest_finish_times(&order, makespan(&completion));
        // Task 1 (B, 5) finishes at 15 but task 3 need not start before 17.
        assert_eq!(latest, vec![10, 17, 17, 20, 28, 32]);
    }

    #[test]
    fn test_latest_finish_independent_tasks() {
        let tasks = vec![Task::new("A", 10), Task::new("B", 5)];
        let graph = TaskGraph::new(&tasks).unwrap();
        let order = detect_cycles(&graph).unwrap();
        assert_eq!(latest_finish_times(&order, 10), vec![10, 10]);
    }
}
