//! Dependency-ordered production scheduling.
//!
//! Computes when every task can finish given that all of its dependencies
//! must finish first, and the overall production time (makespan).
//!
//! # Algorithm
//!
//! Validate → detect cycles (three-colour DFS) → propagate completion
//! times in topological order → aggregate to the makespan. A backward pass
//! over the same order yields latest finish times and slack.
//!
//! # KPI
//!
//! `PlanKpi` summarizes a plan: makespan, total work, parallelism and
//! critical path size.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"

mod aggregate;
mod cycle;
mod graph;
mod kpi;
mod production;
mod propagate;

pub use aggregate::{critical_path, latest_finish_times, makespan};
pub use cycle::detect_cycles;
pub use graph::{TaskGraph, TopologicalOrder};
pub use kpi::PlanKpi;
pub use production::{
    calculate_production_time, calculate_production_time_json, ProductionScheduler,
    SchedulerConfig,
};
pub use propagate::completion_times;
