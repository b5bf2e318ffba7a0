//! Production plan metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Total Work | Sum of all task durations |
//! | Parallelism | Total work / makespan |
//! | Critical Path Length | Tasks on the reported critical path |
//! | Critical Task Count | Tasks with zero slack |

use crate::models::ProductionPlan;

/// Production plan indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanKpi {
    /// Total production time.
    pub makespan: u64,
    /// Sum of every task's own duration.
    pub total_work: u64,
    /// Average number of tasks in progress (0.0 for an empty plan).
    pub parallelism: f64,
    /// Number of tasks on the critical path.
    pub critical_path_length: usize,
    /// Number of tasks with zero slack.
    pub critical_task_count: usize,
}

impl PlanKpi {
    /// Computes KPIs from a plan.
    pub fn calculate(plan: &ProductionPlan) -> Self {
        let total_work = plan
            .timings
            .iter()
            .fold(0u64, |acc, t| acc.saturating_add(t.duration()));

        let parallelism = if plan.makespan == 0 {
            0.0
        } else {
            total_work as f64 / plan.makespan as f64
        };

        Self {
            makespan: plan.makespan,
            total_work,
            parallelism,
            critical_path_length: plan.critical_path.len(),
            critical_task_count: plan.critical_tasks().count(),
        }
    }

    /// Whether the plan finishes within `deadline` time units of its start.
    pub fn meets_deadline(&self, deadline: u64) -> bool {
        self.makespan <= deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use crate::scheduler::ProductionScheduler;

    #[test]
    fn test_kpi_basic() {
        let tasks = vec![
            Task::new("A", 10),
            Task::new("B", 5).with_dependency(0),
            Task::new("C", 7).with_dependency(0),
            Task::new("A", 3).with_dependencies([1, 2]),
        ];
        let plan = ProductionScheduler::new().plan(&tasks).unwrap();
        let kpi = PlanKpi::calculate(&plan);

        assert_eq!(kpi.makespan, 20);
        assert_eq!(kpi.total_work, 25);
        assert!((kpi.parallelism - 1.25).abs() < 1e-10);
        assert_eq!(kpi.critical_path_length, 3); // A -> C -> A
        assert_eq!(kpi.critical_task_count, 3);
    }

    #[test]
    fn test_kpi_independent_tasks() {
        let tasks = vec![Task::new("A", 10), Task::new("B", 10)];
        let plan = ProductionScheduler::new().plan(&tasks).unwrap();
        let kpi = PlanKpi::calculate(&plan);

        assert!((kpi.parallelism - 2.0).abs() < 1e-10);
        assert_eq!(kpi.critical_task_count, 2);
        assert_eq!(kpi.critical_path_length, 1);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = PlanKpi::calculate(&ProductionPlan::empty(0));
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.total_work, 0);
        assert!((kpi.parallelism - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_deadline() {
        let plan = ProductionScheduler::new()
            .with_start_time(500)
            .plan(&[Task::new("A", 10)])
            .unwrap();
        let kpi = PlanKpi::calculate(&plan);
        assert!(kpi.meets_deadline(10));
        assert!(!kpi.meets_deadline(9));
    }
}
