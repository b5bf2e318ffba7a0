//! Production plan (solution) model.
//!
//! A plan records when every task starts and finishes under unlimited
//! parallelism, how much each task may slip, and one longest chain
//! through the dependency graph.
//!
//! # Reference
//! Kelley & Walker (1959), "Critical-Path Planning and Scheduling"

use serde::{Deserialize, Serialize};

/// Timing of one task within a plan.
///
/// All times are absolute, i.e. already offset by the plan's start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTiming {
    /// Position of the task in the input list.
    pub index: usize,
    /// Task label (copied from the input).
    pub name: String,
    /// Earliest start time.
    pub start: u64,
    /// Earliest finish time (the task's completion time).
    pub finish: u64,
    /// Latest finish that does not delay the overall finish.
    pub latest_finish: u64,
    /// `latest_finish - finish`.
    pub slack: u64,
}

impl TaskTiming {
    /// Own duration of the task.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.finish - self.start
    }

    /// Whether delaying this task delays the whole plan.
    #[inline]
    pub fn is_critical(&self) -> bool {
        self.slack == 0
    }
}

/// A complete production plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionPlan {
    /// Time the first task may start.
    pub start_time: u64,
    /// Total production time, measured from `start_time`.
    pub makespan: u64,
    /// Per-task timings in input order.
    pub timings: Vec<TaskTiming>,
    /// One longest dependency chain, first task to execute first.
    pub critical_path: Vec<usize>,
}

impl ProductionPlan {
    /// An empty plan (no tasks, zero makespan).
    pub fn empty(start_time: u64) -> Self {
        Self {
            start_time,
            ..Self::default()
        }
    }

    /// Absolute time at which the last task finishes.
    pub fn finish_time(&self) -> u64 {
        self.start_time + self.makespan
    }

    /// Timing of the task at `index`.
    pub fn timing(&self, index: usize) -> Option<&TaskTiming> {
        self.timings.get(index)
    }

    /// Completion time of the task at `index`, relative to `start_time`.
    pub fn completion_time(&self, index: usize) -> Option<u64> {
        self.timing(index).map(|t| t.finish - self.start_time)
    }

    /// Tasks with zero slack, in input order.
    pub fn critical_tasks(&self) -> impl Iterator<Item = &TaskTiming> {
        self.timings.iter().filter(|t| t.is_critical())
    }

    /// Number of tasks in the plan.
    pub fn task_count(&self) -> usize {
        self.timings.len()
    }

    /// Whether the plan has no tasks.
    pub fn is_empty(&self) -> bool {
        self.timings.is_empty()
    }
}
