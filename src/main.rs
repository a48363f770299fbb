//! Command-line driver: compares FCFS, SJF, Round Robin and Priority on one
//! process set and prints the results.
//!
//! No logger is installed here; the library's `log` output is meant for
//! embedders that set up their own logger.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use cpu_sched_sim::generator::{generate_processes, GeneratorConfig};
use cpu_sched_sim::models::ProcessSpec;
use cpu_sched_sim::report;
use cpu_sched_sim::scheduler::{Algorithm, ScheduleRun, SchedulingEngine};

/// Compare classical CPU scheduling algorithms on a single process set
#[derive(Parser, Debug)]
#[command(name = "cpu-sched-sim")]
#[command(about = "Simulate FCFS, SJF, Priority and Round-Robin scheduling", long_about = None)]
struct Args {
    /// Number of randomly generated processes
    #[arg(short = 'n', long, default_value_t = 5)]
    processes: u32,

    /// Round-Robin time quantum
    #[arg(short, long, default_value_t = 4)]
    quantum: i64,

    /// Seed for process generation
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// JSON file with a process array (overrides generation)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Emit results as JSON instead of tables
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Print per-process timings and a Gantt line for every algorithm
    #[arg(long, default_value_t = false)]
    timeline: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    processes: &'a [ProcessSpec],
    runs: &'a [ScheduleRun],
}

fn load_processes(args: &Args) -> Result<Vec<ProcessSpec>> {
    match &args.input {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
        }
        None => Ok(generate_processes(
            &GeneratorConfig::new()
                .with_count(args.processes)
                .with_seed(args.seed),
        )),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let processes = load_processes(&args)?;
    let engine = match SchedulingEngine::new(processes) {
        Ok(engine) => engine,
        Err(errors) => {
            for e in &errors {
                eprintln!("invalid input: {e}");
            }
            bail!("{} validation error(s) in process set", errors.len());
        }
    };

    let runs = engine.compare(&Algorithm::comparison_set(args.quantum))?;

    if args.json {
        let json = serde_json::to_string_pretty(&JsonReport {
            processes: engine.processes(),
            runs: &runs,
        })?;
        println!("{json}");
        return Ok(());
    }

    print!("{}", report::process_table(engine.processes()));
    println!();
    print!("{}", report::results_summary(&runs));

    if args.timeline {
        for run in &runs {
            println!();
            print!("{}", report::process_timings(run));
            println!("{}", report::gantt_line(&run.timeline));
        }
    }

    Ok(())
}
