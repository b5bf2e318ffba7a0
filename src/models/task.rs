//! Production task model.
//!
//! A task is one production step: a label, the time it takes once all of
//! its prerequisites are finished, and the prerequisites themselves,
//! referenced by position in the task list.

use serde::{Deserialize, Serialize};

/// A production step.
///
/// Dependencies are indices into the enclosing task list. A task list is
/// supplied wholesale to one calculation and never mutated by it.
///
/// # Time Representation
/// Durations are abstract, non-negative time units (days, shifts, ms).
/// The consumer decides what one unit means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Label. Not required to be unique.
    #[serde(alias = "type")]
    pub name: String,
    /// Time units this task takes once its dependencies have finished.
    #[serde(alias = "days")]
    pub duration: u64,
    /// Indices of tasks that must finish before this one starts.
    #[serde(alias = "dependency")]
    pub dependencies: Vec<usize>,
}

impl Task {
    /// Creates a task with no dependencies.
    pub fn new(name: impl Into<String>, duration: u64) -> Self {
        Self {
            name: name.into(),
            duration,
            dependencies: Vec::new(),
        }
    }

    /// Adds a dependency on the task at `index`.
    pub fn with_dependency(mut self, index: usize) -> Self {
        self.dependencies.push(index);
        self
    }

    /// Adds several dependencies, keeping their order.
    pub fn with_dependencies(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.dependencies.extend(indices);
        self
    }

    /// Whether this task can start immediately.
    pub fn is_root(&self) -> bool {
        self.dependencies.is_empty()
    }
}
