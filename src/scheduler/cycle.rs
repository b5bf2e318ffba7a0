//! Cycle detection over the dependency graph.
//!
//! # Algorithm
//! Depth-first search with three-colour marking. Roots are visited in
//! task-list order and dependencies in the order they are listed. Reaching
//! a node that is still on the current path (gray) is a back edge, i.e. a
//! cycle. The DFS post-order is returned as a topological order.
//!
//! The traversal keeps its own stack of `(node, next dependency)` frames,
//! so chain length is bounded by heap, not by the call stack.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.3-22.4

use tracing::debug;

use super::graph::{TaskGraph, TopologicalOrder};
use crate::error::{Result, ScheduleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// Not visited yet.
    White,
    /// On the current DFS path.
    Gray,
    /// Fully processed.
    Black,
}

/// Rejects cyclic graphs and orders acyclic ones.
///
/// # Returns
/// A topological order (dependencies first), or
/// [`ScheduleError::CyclicDependency`] carrying the first cycle found.
pub fn detect_cycles<'t>(graph: &TaskGraph<'t>) -> Result<TopologicalOrder<'t>> {
    let tasks = graph.tasks();
    let mut marks = vec![Mark::White; tasks.len()];
    let mut order = Vec::with_capacity(tasks.len());
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..tasks.len() {
        if marks[root] != Mark::White {
            continue;
        }
        marks[root] = Mark::Gray;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (node, next) = *frame;
            match tasks[node].dependencies.get(next) {
                Some(&dep) => {
                    frame.1 += 1;
                    match marks[dep] {
                        Mark::White => {
                            marks[dep] = Mark::Gray;
                            stack.push((dep, 0));
                        }
                        Mark::Gray => {
                            let cycle = cycle_from_stack(&stack, dep);
                            debug!(?cycle, "cyclic dependency");
                            return Err(ScheduleError::CyclicDependency { cycle });
                        }
                        Mark::Black => {}
                    }
                }
                None => {
                    marks[node] = Mark::Black;
                    order.push(node);
                    stack.pop();
                }
            }
        }
    }

    Ok(TopologicalOrder { tasks, order })
}

/// Path from `entry` to the top of the stack, closed back at `entry`.
fn cycle_from_stack(stack: &[(usize, usize)], entry: usize) -> Vec<usize> {
    let start = stack.iter().position(|&(n, _)| n == entry).unwrap_or(0);
    stack[start..]
        .iter()
        .map(|&(n, _)| n)
        .chain(std::iter::once(entry))
        .collect()
}
