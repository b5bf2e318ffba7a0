//! Production-time calculator.
//!
//! # Pipeline
//!
//! 1. Validate the task list (field types, dependency ranges).
//! 2. Detect cycles and derive a topological order.
//! 3. Propagate completion times along that order.
//! 4. Aggregate completion times into the makespan.
//!
//! Each stage is a pure function of the task list; nothing is shared
//! between calls, so independent calls may run concurrently.
//!
//! # Complexity
//! O(V + E) where V=tasks, E=dependency edges.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::aggregate::{critical_path, latest_finish_times, makespan};
use super::cycle::detect_cycles;
use super::graph::TaskGraph;
use super::propagate::completion_times;
use crate::error::{Result, ScheduleError};
use crate::models::{ProductionPlan, Task, TaskTiming};
use crate::validation::parse_tasks;

/// Scheduler settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Time at which tasks without dependencies may start.
    pub start_time: u64,
}

/// Dependency-ordered production scheduler.
///
/// Assumes unlimited parallelism: every task starts as soon as all of its
/// dependencies have finished.
///
/// # Example
///
/// ```
/// use production_schedule::models::Task;
/// use production_schedule::scheduler::ProductionScheduler;
///
/// let tasks = vec![
///     Task::new("cut", 4),
///     Task::new("paint", 3).with_dependency(0),
///     Task::new("pack", 1).with_dependency(1),
/// ];
/// let scheduler = ProductionScheduler::new().with_start_time(100);
///
/// assert_eq!(scheduler.total_time(&tasks).unwrap(), 8);
/// let plan = scheduler.plan(&tasks).unwrap();
/// assert_eq!(plan.finish_time(), 108);
/// assert_eq!(plan.critical_path, vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProductionScheduler {
    config: SchedulerConfig,
}

impl ProductionScheduler {
    /// Creates a scheduler starting at time 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler from settings.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Sets the start time.
    pub fn with_start_time(mut self, start_time: u64) -> Self {
        self.config.start_time = start_time;
        self
    }

    /// Current settings.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Total production time of `tasks`, measured from the start time.
    pub fn total_time(&self, tasks: &[Task]) -> Result<u64> {
        let graph = TaskGraph::new(tasks)?;
        if graph.is_empty() {
            return Ok(0);
        }
        debug!(tasks = graph.len(), edges = graph.edge_count(), "validated task list");

        let order = detect_cycles(&graph)?;
        let completion = completion_times(&order)?;
        let total = makespan(&completion);
        debug!(total, "computed production time");
        Ok(total)
    }

    /// Full plan for `tasks`: per-task timings, slack and critical path.
    pub fn plan(&self, tasks: &[Task]) -> Result<ProductionPlan> {
        let start_time = self.config.start_time;
        let graph = TaskGraph::new(tasks)?;
        if graph.is_empty() {
            return Ok(ProductionPlan::empty(start_time));
        }
        debug!(tasks = graph.len(), edges = graph.edge_count(), "validated task list");

        let order = detect_cycles(&graph)?;
        let completion = completion_times(&order)?;
        let total = makespan(&completion);
        let latest = latest_finish_times(&order, total);

        let offset = |task: usize, t: u64| {
            start_time
                .checked_add(t)
                .ok_or(ScheduleError::DurationOverflow { task })
        };

        let timings = tasks
            .iter()
            .enumerate()
            .map(|(i, task)| {
                Ok(TaskTiming {
                    index: i,
                    name: task.name.clone(),
                    start: offset(i, completion[i] - task.duration)?,
                    finish: offset(i, completion[i])?,
                    latest_finish: offset(i, latest[i])?,
                    slack: latest[i].saturating_sub(completion[i]),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let critical_path = critical_path(tasks, &completion);
        debug!(total, critical = critical_path.len(), "built production plan");

        Ok(ProductionPlan {
            start_time,
            makespan: total,
            timings,
            critical_path,
        })
    }

    /// Parses a JSON task list and computes its total production time.
    pub fn total_time_json(&self, value: &Value) -> Result<u64> {
        self.total_time(&parse_tasks(value)?)
    }

    /// Parses a JSON task list and builds its plan.
    pub fn plan_json(&self, value: &Value) -> Result<ProductionPlan> {
        self.plan(&parse_tasks(value)?)
    }
}

/// Total production time of `tasks`.
///
/// Shorthand for `ProductionScheduler::new().total_time(tasks)`.
pub fn calculate_production_time(tasks: &[Task]) -> Result<u64> {
    ProductionScheduler::new().total_time(tasks)
}

/// Total production time of a loosely-typed JSON task list.
pub fn calculate_production_time_json(value: &Value) -> Result<u64> {
    ProductionScheduler::new().total_time_json(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use serde_json::json;

    fn branching_tasks() -> Vec<Task> {
        vec![
            Task::new("A", 10),
            Task::new("B", 5).with_dependency(0),
            Task::new("C", 7).with_dependency(0),
            Task::new("A", 3).with_dependencies([1, 2]),
            Task::new("B", 8).with_dependency(3),
            Task::new("C", 4).with_dependency(4),
        ]
    }

    /// Random DAG: every dependency points at a lower index.
    fn random_dag(rng: &mut SmallRng, n: usize) -> Vec<Task> {
        (0..n)
            .map(|i| {
                let mut task = Task::new(format!("T{i}"), rng.random_range(0..20));
                for d in 0..i {
                    if rng.random_bool(0.2) {
                        task = task.with_dependency(d);
                    }
                }
                task
            })
            .collect()
    }

    #[test]
    fn test_branching_chain_total() {
        assert_eq!(calculate_production_time(&branching_tasks()).unwrap(), 32);
    }

    #[test]
    fn test_no_dependencies_total_is_max_duration() {
        let tasks = vec![Task::new("A", 10), Task::new("B", 5), Task::new("C", 7)];
        assert_eq!(calculate_production_time(&tasks).unwrap(), 10);
    }

    #[test]
    fn test_single_task() {
        assert_eq!(calculate_production_time(&[Task::new("A", 12)]).unwrap(), 12);
    }

    #[test]
    fn test_mutual_cycle() {
        let tasks = vec![
            Task::new("A", 10).with_dependency(1),
            Task::new("B", 5).with_dependency(0),
        ];
        let err = calculate_production_time(&tasks).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CyclicDependency);
    }

    #[test]
    fn test_missing_dependencies_json() {
        let value = json!([
            {"name": "A", "duration": 10},
            {"name": "B", "duration": 5, "dependencies": []},
        ]);
        let err = calculate_production_time_json(&value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(calculate_production_time(&[]).unwrap(), 0);
        assert_eq!(calculate_production_time_json(&json!([])).unwrap(), 0);
    }

    #[test]
    fn test_validation_precedes_cycle_detection() {
        // Cycle between 0 and 1, plus an out-of-range index in task 2.
        let tasks = vec![
            Task::new("A", 1).with_dependency(1),
            Task::new("B", 1).with_dependency(0),
            Task::new("C", 1).with_dependency(9),
        ];
        let err = calculate_production_time(&tasks).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_json_legacy_records() {
        let value = json!([
            {"type": "A", "days": 10, "dependency": []},
            {"type": "B", "days": 5, "dependency": [0]},
            {"type": "C", "days": 7, "dependency": [0]},
            {"type": "A", "days": 3, "dependency": [1, 2]},
            {"type": "B", "days": 8, "dependency": [3]},
            {"type": "C", "days": 4, "dependency": [4]},
        ]);
        assert_eq!(calculate_production_time_json(&value).unwrap(), 32);
    }

    #[test]
    fn test_plan_timings() {
        let plan = ProductionScheduler::new().plan(&branching_tasks()).unwrap();

        assert_eq!(plan.makespan, 32);
        assert_eq!(plan.critical_path, vec![0, 2, 3, 4, 5]);

        let b = plan.timing(1).unwrap();
        assert_eq!((b.start, b.finish, b.latest_finish, b.slack), (10, 15, 17, 2));
        assert!(!b.is_critical());

        let critical: Vec<usize> = plan.critical_tasks().map(|t| t.index).collect();
        assert_eq!(critical, vec![0, 2, 3, 4, 5]);
    }

    #[test]
    fn test_plan_start_time_offset() {
        let scheduler = ProductionScheduler::new().with_start_time(1000);
        let plan = scheduler.plan(&branching_tasks()).unwrap();

        assert_eq!(plan.makespan, 32);
        assert_eq!(plan.finish_time(), 1032);
        assert_eq!(plan.timing(0).unwrap().start, 1000);
        assert_eq!(plan.completion_time(5), Some(32));
        // Total time does not depend on the start time.
        assert_eq!(scheduler.total_time(&branching_tasks()).unwrap(), 32);
    }

    #[test]
    fn test_plan_offset_overflow() {
        let scheduler = ProductionScheduler::new().with_start_time(u64::MAX);
        let err = scheduler.plan(&[Task::new("A", 1)]).unwrap_err();
        assert_eq!(err, ScheduleError::DurationOverflow { task: 0 });
    }

    #[test]
    fn test_plan_empty() {
        let plan = ProductionScheduler::new().with_start_time(7).plan(&[]).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.start_time, 7);
    }

    #[test]
    fn test_plan_json_rejects_cycle() {
        let value = json!([{"name": "A", "duration": 1, "dependencies": [0]}]);
        let err = ProductionScheduler::new().plan_json(&value).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::CyclicDependency {
                cycle: vec![0, 0]
            }
        );
    }

    #[test]
    fn test_config_from_json() {
        let config: SchedulerConfig = serde_json::from_value(json!({"start_time": 5})).unwrap();
        let scheduler = ProductionScheduler::with_config(config);
        assert_eq!(scheduler.config().start_time, 5);

        let defaulted: SchedulerConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(defaulted, SchedulerConfig::default());
    }

    #[test]
    fn test_random_dags_respect_bounds() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let n = rng.random_range(1..40);
            let tasks = random_dag(&mut rng, n);
            let plan = ProductionScheduler::new().plan(&tasks).unwrap();
            let total = calculate_production_time(&tasks).unwrap();

            assert_eq!(plan.makespan, total);
            for (i, task) in tasks.iter().enumerate() {
                let timing = plan.timing(i).unwrap();
                assert!(total >= task.duration);
                assert!(timing.latest_finish <= total);
                for &d in &task.dependencies {
                    assert!(plan.timing(d).unwrap().finish <= timing.start);
                }
            }

            let path_sum: u64 = plan.critical_path.iter().map(|&i| tasks[i].duration).sum();
            assert_eq!(path_sum, total);
            for pair in plan.critical_path.windows(2) {
                assert!(tasks[pair[1]].dependencies.contains(&pair[0]));
            }
        }
    }

    #[test]
    fn test_random_dags_without_edges_use_max_duration() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..20 {
            let tasks: Vec<Task> = (0..rng.random_range(1..30))
                .map(|i| Task::new(format!("T{i}"), rng.random_range(0..100)))
                .collect();
            let expected = tasks.iter().map(|t| t.duration).max().unwrap_or(0);
            assert_eq!(calculate_production_time(&tasks).unwrap(), expected);
        }
    }

    #[test]
    fn test_random_cycles_detected() {
        let mut rng = SmallRng::seed_from_u64(1234);
        for _ in 0..30 {
            let n = rng.random_range(1..25);
            let mut tasks = random_dag(&mut rng, n);
            // Close a back edge: a low index now depends on a higher (or equal) one
            // that transitively depends on it.
            let hi = rng.random_range(0..n);
            tasks[0].dependencies.push(hi);
            for i in 1..=hi {
                if !tasks[i].dependencies.contains(&(i - 1)) {
                    tasks[i].dependencies.push(i - 1);
                }
            }
            let err = calculate_production_time(&tasks).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::CyclicDependency);
        }
    }

    #[test]
    fn test_idempotent() {
        let tasks = branching_tasks();
        let scheduler = ProductionScheduler::new();
        assert_eq!(scheduler.plan(&tasks).unwrap(), scheduler.plan(&tasks).unwrap());
        assert_eq!(
            calculate_production_time(&tasks).unwrap(),
            calculate_production_time(&tasks).unwrap()
        );
    }
}
