//! Validated dependency graph views over a task list.

use crate::error::Result;
use crate::models::Task;
use crate::validation::validate_tasks;

/// A task list whose dependency indices are known to be in range.
///
/// Nodes are task indices; edges point from a task to each of its
/// prerequisites. The graph borrows the caller's snapshot and never
/// mutates it.
#[derive(Debug, Clone, Copy)]
pub struct TaskGraph<'t> {
    tasks: &'t [Task],
}

impl<'t> TaskGraph<'t> {
    /// Validates `tasks` and wraps them as a graph.
    pub fn new(tasks: &'t [Task]) -> Result<Self> {
        validate_tasks(tasks)?;
        Ok(Self { tasks })
    }

    /// The underlying task list.
    pub fn tasks(&self) -> &'t [Task] {
        self.tasks
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of dependency edges (duplicates counted).
    pub fn edge_count(&self) -> usize {
        self.tasks.iter().map(|t| t.dependencies.len()).sum()
    }
}

/// Task indices ordered so that every task comes after all of its
/// dependencies.
///
/// Only produced by [`detect_cycles`](super::detect_cycles), so holding
/// one proves the graph is acyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalOrder<'t> {
    pub(super) tasks: &'t [Task],
    pub(super) order: Vec<usize>,
}

impl<'t> TopologicalOrder<'t> {
    /// The task list this order was computed for.
    pub fn tasks(&self) -> &'t [Task] {
        self.tasks
    }

    /// Indices, dependencies first.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Iterates indices, dependencies first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.order.iter().copied()
    }
}
