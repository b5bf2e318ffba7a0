//! Production scheduling domain models.
//!
//! Provides the input record (`Task`) and the output of a successful
//! planning run (`ProductionPlan`, `TaskTiming`).
//!
//! # Domain Mappings
//!
//! | production-schedule | Manufacturing | Software Build | Project |
//! |---------------------|---------------|----------------|---------|
//! | Task | Production step | Build target | Activity |
//! | Dependency | Input part | Required target | Predecessor |
//! | Makespan | Lead time | Build wall time | Project duration |

mod plan;
mod task;

pub use plan::{ProductionPlan, TaskTiming};
pub use task::Task;
