//! Prints the production plan for a JSON task list read from stdin.
//!
//! With nothing on stdin, runs a handful of built-in task lists instead.
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};
use serde_json::{json, Value};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use production_schedule::{PlanKpi, ProductionPlan, ProductionScheduler};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn demo_task_lists() -> Vec<(&'static str, Value)> {
    vec![
        (
            "branching chain",
            json!([
                {"name": "A", "duration": 10, "dependencies": []},
                {"name": "B", "duration": 5, "dependencies": [0]},
                {"name": "C", "duration": 7, "dependencies": [0]},
                {"name": "A", "duration": 3, "dependencies": [1, 2]},
                {"name": "B", "duration": 8, "dependencies": [3]},
                {"name": "C", "duration": 4, "dependencies": [4]},
            ]),
        ),
        (
            "independent tasks",
            json!([
                {"name": "A", "duration": 10, "dependencies": []},
                {"name": "B", "duration": 5, "dependencies": []},
                {"name": "C", "duration": 7, "dependencies": []},
            ]),
        ),
        (
            "single task",
            json!([{"name": "A", "duration": 12, "dependencies": []}]),
        ),
        (
            "mutual dependency",
            json!([
                {"name": "A", "duration": 10, "dependencies": [1]},
                {"name": "B", "duration": 5, "dependencies": [0]},
            ]),
        ),
        (
            "missing dependencies field",
            json!([
                {"name": "A", "duration": 10},
                {"name": "B", "duration": 5, "dependencies": []},
            ]),
        ),
        ("empty list", json!([])),
    ]
}

fn print_plan(plan: &ProductionPlan) {
    println!(
        "{:>5}  {:<16} {:>8} {:>8} {:>8} {:>6}",
        "index", "name", "start", "finish", "latest", "slack"
    );
    for t in &plan.timings {
        println!(
            "{:>5}  {:<16} {:>8} {:>8} {:>8} {:>6}{}",
            t.index,
            t.name,
            t.start,
            t.finish,
            t.latest_finish,
            t.slack,
            if t.is_critical() { "  *" } else { "" }
        );
    }

    let kpi = PlanKpi::calculate(plan);
    let path: Vec<String> = plan.critical_path.iter().map(usize::to_string).collect();
    println!("critical path: {}", path.join(" -> "));
    println!(
        "total production time: {} (work {}, parallelism {:.2})",
        kpi.makespan, kpi.total_work, kpi.parallelism
    );
}

fn run_demo(scheduler: &ProductionScheduler) {
    for (label, tasks) in demo_task_lists() {
        println!("== {label}");
        match scheduler.plan_json(&tasks) {
            Ok(plan) => print_plan(&plan),
            Err(err) => {
                warn!(scenario = label, kind = ?err.kind(), "task list rejected");
                println!("error: {err}");
            }
        }
        println!();
    }
}

fn main() -> Result<()> {
    init_logging();
    let scheduler = ProductionScheduler::new();

    let stdin = io::stdin();
    let mut input = String::new();
    if !stdin.is_terminal() {
        stdin
            .lock()
            .read_to_string(&mut input)
            .context("failed to read task list from stdin")?;
    }

    if input.trim().is_empty() {
        info!("no input on stdin, running built-in task lists");
        run_demo(&scheduler);
        return Ok(());
    }

    let tasks: Value = serde_json::from_str(&input).context("stdin is not valid JSON")?;
    let plan = scheduler
        .plan_json(&tasks)
        .context("failed to plan production")?;
    info!(tasks = plan.task_count(), makespan = plan.makespan, "planned production");
    print_plan(&plan);
    Ok(())
}
