//! Input validation for production task lists.
//!
//! Two boundaries are covered:
//! - loose JSON records, checked for field presence and field types and
//!   converted into typed [`Task`]s ([`parse_tasks`], [`parse_tasks_str`]);
//! - typed task lists, checked for dependency indices in range
//!   ([`validate_tasks`]).
//!
//! The first violation in task-list order is reported and the whole list
//! is rejected. A task that depends on itself is not an input error: the
//! cycle detector reports it.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{InvalidReason, Result, ScheduleError};
use crate::models::Task;

const NAME: (&str, &str) = ("name", "type");
const DURATION: (&str, &str) = ("duration", "days");
const DEPENDENCIES: (&str, &str) = ("dependencies", "dependency");

/// Validates dependency indices of a typed task list.
///
/// # Returns
/// `Ok(())` if every dependency lies in `[0, tasks.len())`.
pub fn validate_tasks(tasks: &[Task]) -> Result<()> {
    let n = tasks.len();
    for (i, task) in tasks.iter().enumerate() {
        if let Some(&dep) = task.dependencies.iter().find(|&&d| d >= n) {
            debug!(task = i, dependency = dep, "dependency out of range");
            return Err(ScheduleError::invalid(
                i,
                InvalidReason::DependencyOutOfRange {
                    dependency: i64::try_from(dep).unwrap_or(i64::MAX),
                    task_count: n,
                },
            ));
        }
    }
    Ok(())
}

/// Parses and validates a JSON task list.
///
/// Each element must be an object with a string `name` (alias `type`), a
/// non-negative integer `duration` (alias `days`), and a `dependencies`
/// array of in-range integers (alias `dependency`). Extra fields are ignored.
pub fn parse_tasks(value: &Value) -> Result<Vec<Task>> {
    let records = value
        .as_array()
        .ok_or_else(|| ScheduleError::invalid_list(InvalidReason::NotAnArray))?;
    let n = records.len();

    let tasks = records
        .iter()
        .enumerate()
        .map(|(i, record)| parse_record(record, n).map_err(|reason| ScheduleError::invalid(i, reason)))
        .collect::<Result<Vec<_>>>();

    if let Err(err) = &tasks {
        debug!(%err, "rejected task list");
    }
    tasks
}

/// Parses and validates a task list from JSON text.
pub fn parse_tasks_str(input: &str) -> Result<Vec<Task>> {
    let value: Value = serde_json::from_str(input).map_err(|e| {
        ScheduleError::invalid_list(InvalidReason::MalformedJson(e.to_string()))
    })?;
    parse_tasks(&value)
}

fn parse_record(record: &Value, task_count: usize) -> std::result::Result<Task, InvalidReason> {
    let obj = record.as_object().ok_or(InvalidReason::NotAnObject)?;

    // Presence is checked for all fields before any type check.
    let name = field(obj, NAME)?;
    let duration = field(obj, DURATION)?;
    let dependencies = field(obj, DEPENDENCIES)?;

    let name = name.as_str().ok_or(InvalidReason::WrongType {
        field: NAME.0,
        expected: "a string",
    })?;
    let duration = duration.as_u64().ok_or(InvalidReason::WrongType {
        field: DURATION.0,
        expected: "a non-negative integer",
    })?;
    let dependencies = dependencies
        .as_array()
        .ok_or(InvalidReason::WrongType {
            field: DEPENDENCIES.0,
            expected: "a list of integers",
        })?
        .iter()
        .map(|dep| parse_dependency(dep, task_count))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(Task {
        name: name.to_owned(),
        duration,
        dependencies,
    })
}

fn field<'a>(
    obj: &'a Map<String, Value>,
    (name, alias): (&'static str, &'static str),
) -> std::result::Result<&'a Value, InvalidReason> {
    obj.get(name)
        .or_else(|| obj.get(alias))
        .ok_or(InvalidReason::MissingField(name))
}

fn parse_dependency(dep: &Value, task_count: usize) -> std::result::Result<usize, InvalidReason> {
    let out_of_range = |dependency: i64| InvalidReason::DependencyOutOfRange {
        dependency,
        task_count,
    };

    if let Some(index) = dep.as_u64() {
        return usize::try_from(index)
            .ok()
            .filter(|&i| i < task_count)
            .ok_or_else(|| out_of_range(i64::try_from(index).unwrap_or(i64::MAX)));
    }
    match dep.as_i64() {
        Some(negative) => Err(out_of_range(negative)),
        None => Err(InvalidReason::WrongType {
            field: DEPENDENCIES.0,
            expected: "a list of integers",
        }),
    }
}
