//! Experiment harness: runs the GA over one or more instance files,
//! consumes progress events, and writes CSV/JSON artifacts.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use tokio::task;
use tracing::{debug, info, warn};

use crate::config::constant::{
    BEST_JSON_SUFFIX, PROGRESS_CSV_SUFFIX, SEED, SUMMARY_CSV_PATH,
};
use crate::config::GaConfig;
use crate::fixtures::data_generator::generate_random_instance;
use crate::instance::{load_instance, Instance};
use crate::progress::progress_channel;
use crate::solver::genetic::{evolve, GaOutcome, GaStatus, SolverControl};

struct InstanceRun {
    name: String,
    outcome: GaOutcome,
}

/// Runs the solver over every given instance path and writes a summary CSV.
/// With no paths, a synthetic instance is generated instead.
pub async fn run(paths: Vec<PathBuf>) -> Result<(), Box<dyn Error>> {
    let config = GaConfig::default();
    let mut runs = Vec::new();

    if paths.is_empty() {
        warn!("No instance files given; generating a synthetic instance");
        let instance = generate_random_instance(25, SEED);
        runs.push(solve_instance("synthetic".to_string(), instance, &config).await?);
    } else {
        for path in paths {
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let instance = load_instance(&path)?;
            runs.push(solve_instance(name, instance, &config).await?);
        }
    }

    write_summary_csv(&runs)?;
    info!("Wrote summary for {} run(s) to {}", runs.len(), SUMMARY_CSV_PATH);

    Ok(())
}

/// Runs the GA for one instance on a blocking task, draining progress
/// events as they arrive. Ctrl-C flips the cancel flag; the worker stops at
/// the next generation boundary.
async fn solve_instance(
    name: String,
    instance: Instance,
    config: &GaConfig,
) -> Result<InstanceRun, Box<dyn Error>> {
    info!(
        "Solving instance '{}' with {} customers",
        name,
        instance.num_customers()
    );

    let control = SolverControl::new();
    let handle = control.handle();
    let (tx, mut rx) = progress_channel();

    let signal_task = tokio::spawn({
        let control = control.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Ctrl-C received; cancelling run");
                control.cancel();
            }
        }
    });

    let worker = {
        let config = config.clone();
        task::spawn_blocking(move || evolve(&instance, &config, SEED, &handle, Some(&tx)))
    };

    let mut updates: Vec<(usize, f64)> = Vec::new();
    let mut last_best = f64::INFINITY;
    while let Some(event) = rx.recv().await {
        if event.best_distance < last_best {
            info!(
                "[{}] generation {}: best distance {:.2}",
                name, event.generation, event.best_distance
            );
            last_best = event.best_distance;
        } else {
            debug!(
                "[{}] generation {}: best distance {:.2}",
                name, event.generation, event.best_distance
            );
        }
        updates.push((event.generation, event.best_distance));
    }

    let outcome = worker.await??;
    signal_task.abort();

    save_updates_csv(&name, &updates)?;
    save_best_json(&name, &outcome)?;
    print_run_summary(&name, &outcome);

    Ok(InstanceRun { name, outcome })
}

fn print_run_summary(name: &str, outcome: &GaOutcome) {
    let status = match outcome.status {
        GaStatus::Completed => "completed".green(),
        GaStatus::Cancelled => "cancelled".yellow(),
    };
    println!(
        "{} {}: fitness {:.2}, distance {:.2} after {} generation(s), {} route(s)",
        status,
        name.bold(),
        outcome.best.fitness,
        outcome.best.total_distance,
        outcome.generations_run,
        outcome.best.routes.len(),
    );
}

fn save_updates_csv(name: &str, updates: &[(usize, f64)]) -> Result<(), Box<dyn Error>> {
    let filename = format!("{name}_{PROGRESS_CSV_SUFFIX}");
    let mut wtr = csv::Writer::from_path(&filename)?;

    wtr.write_record(["generation", "best_distance"])?;
    for (generation, best_distance) in updates {
        wtr.write_record([generation.to_string(), best_distance.to_string()])?;
    }

    wtr.flush()?;
    info!("Wrote per-generation progress to {}", filename);
    Ok(())
}

fn save_best_json(name: &str, outcome: &GaOutcome) -> Result<(), Box<dyn Error>> {
    let filename = format!("{name}_{BEST_JSON_SUFFIX}");
    fs::write(&filename, serde_json::to_string_pretty(&outcome.best)?)?;
    info!("Wrote best solution to {}", filename);
    Ok(())
}

fn write_summary_csv(runs: &[InstanceRun]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(SUMMARY_CSV_PATH)?;

    wtr.write_record([
        "instance",
        "generations_run",
        "best_fitness",
        "best_distance",
        "status",
    ])?;
    for run in runs {
        let status = match run.outcome.status {
            GaStatus::Completed => "completed",
            GaStatus::Cancelled => "cancelled",
        };
        wtr.write_record([
            run.name.clone(),
            run.outcome.generations_run.to_string(),
            format!("{:.2}", run.outcome.best.fitness),
            format!("{:.2}", run.outcome.best.total_distance),
            status.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
