//! Error types for production-time calculation.
//!
//! Every failure is reported as the single outcome of a call; no partial
//! totals are ever returned alongside an error.

use thiserror::Error;

/// Crate result type.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Failure outcome of a production-time calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// A task record is malformed or references a task that does not exist.
    #[error("invalid input{}: {reason}", task_suffix(.task))]
    InvalidInput {
        /// Index of the offending task, when the failure is tied to one.
        task: Option<usize>,
        /// What was wrong.
        reason: InvalidReason,
    },

    /// The dependency graph contains at least one cycle.
    #[error("cyclic dependency detected: {}", format_cycle(.cycle))]
    CyclicDependency {
        /// Task indices along the cycle; the first index is repeated at the end.
        cycle: Vec<usize>,
    },

    /// Summing durations along a dependency chain exceeded `u64::MAX`.
    #[error("completion time of task {task} overflows")]
    DurationOverflow {
        /// Task whose completion time could not be represented.
        task: usize,
    },
}

/// Why a task list was rejected as invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    /// Input text was not valid JSON.
    #[error("malformed JSON: {0}")]
    MalformedJson(String),
    /// The task list itself is not an array.
    #[error("task list must be an array")]
    NotAnArray,
    /// A task record is not an object.
    #[error("task record must be an object")]
    NotAnObject,
    /// A required field is absent.
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    /// A field is present but has the wrong type.
    #[error("field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    /// A dependency index lies outside `[0, task_count)`.
    #[error("dependency {dependency} is out of range for {task_count} tasks")]
    DependencyOutOfRange { dependency: i64, task_count: usize },
}

/// Fieldless discriminant of [`ScheduleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    CyclicDependency,
    DurationOverflow,
}

impl ScheduleError {
    /// Creates an invalid-input error tied to a task.
    pub fn invalid(task: usize, reason: InvalidReason) -> Self {
        Self::InvalidInput {
            task: Some(task),
            reason,
        }
    }

    /// Creates an invalid-input error for the list as a whole.
    pub fn invalid_list(reason: InvalidReason) -> Self {
        Self::InvalidInput { task: None, reason }
    }

    /// Error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::CyclicDependency { .. } => ErrorKind::CyclicDependency,
            Self::DurationOverflow { .. } => ErrorKind::DurationOverflow,
        }
    }
}

fn task_suffix(task: &Option<usize>) -> String {
    task.map(|t| format!(" at task {t}")).unwrap_or_default()
}

fn format_cycle(cycle: &[usize]) -> String {
    cycle
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
