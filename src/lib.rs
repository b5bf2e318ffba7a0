//! Dependency-ordered production time calculator.
//!
//! Given a list of production tasks, each with a duration and a list of
//! prerequisite tasks (by index), computes when every task can finish and
//! the total production time: the moment the last task finishes when
//! independent tasks run in parallel.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `ProductionPlan`, `TaskTiming`
//! - **`validation`**: Input checks (field types, dependency ranges) and
//!   JSON parsing of loosely-typed task records
//! - **`scheduler`**: Cycle detection, completion-time propagation,
//!   makespan, critical path, slack, and plan KPIs
//! - **`error`**: `ScheduleError` outcomes (`InvalidInput`,
//!   `CyclicDependency`, `DurationOverflow`)
//!
//! # Example
//!
//! ```
//! use production_schedule::{calculate_production_time, ErrorKind, Task};
//!
//! let tasks = vec![
//!     Task::new("A", 10),
//!     Task::new("B", 5).with_dependency(0),
//!     Task::new("C", 7).with_dependency(0),
//!     Task::new("A", 3).with_dependencies([1, 2]),
//!     Task::new("B", 8).with_dependency(3),
//!     Task::new("C", 4).with_dependency(4),
//! ];
//! assert_eq!(calculate_production_time(&tasks).unwrap(), 32);
//!
//! let cyclic = vec![
//!     Task::new("A", 10).with_dependency(1),
//!     Task::new("B", 5).with_dependency(0),
//! ];
//! let err = calculate_production_time(&cyclic).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::CyclicDependency);
//! ```
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{ErrorKind, InvalidReason, Result, ScheduleError};
pub use models::{ProductionPlan, Task, TaskTiming};
pub use scheduler::{
    calculate_production_time, calculate_production_time_json, PlanKpi, ProductionScheduler,
    SchedulerConfig,
};
