use std::thread;
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, span, Level};

use crate::config::constant::PAUSE_POLL_INTERVAL_MS;
use crate::config::GaConfig;
use crate::distance::matrix::build_distance_matrix;
use crate::domain::solution::Individual;
use crate::error::SolverError;
use crate::evaluation::fitness::evaluate;
use crate::instance::Instance;
use crate::progress::{ProgressEvent, ProgressSender};

use super::control::ControlHandle;
use super::crossover::order_crossover;
use super::mutation::mutate;
use super::partition::split_into_routes;

/// How an evolution run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaStatus {
    Completed,
    Cancelled,
}

/// Result of an evolution run: the best individual ever observed plus how
/// far the loop got before completing or being cancelled.
#[derive(Debug, Clone)]
pub struct GaOutcome {
    pub best: Individual,
    pub status: GaStatus,
    pub generations_run: usize,
}

struct GaState {
    population: Vec<Individual>,
    best_so_far: Individual,
}

/// Runs the generational GA over `instance`, deterministic for a fixed
/// `seed`.
///
/// Pause and cancel are polled through `control` at generation boundaries
/// only; a generation in progress always finishes. Cancellation returns the
/// best individual found so far and is not an error. One progress event is
/// emitted per generation, starting with generation 0.
pub fn evolve(
    instance: &Instance,
    config: &GaConfig,
    seed: u64,
    control: &ControlHandle,
    progress: Option<&ProgressSender>,
) -> Result<GaOutcome, SolverError> {
    let n = instance.num_customers();
    config.validate(n)?;
    let num_vehicles = config.resolved_num_vehicles(n);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let dm = {
        let setup_span = span!(Level::INFO, "setup", customers = n, vehicles = num_vehicles);
        let _guard = setup_span.enter();
        build_distance_matrix(&instance.depot, &instance.customers)
    };

    let mut state = initialize(instance, config, num_vehicles, &dm, &mut rng)?;
    emit_progress(progress, 0, &state.best_so_far);

    let parent_pool_size = config.parent_pool_size().min(config.population_size);
    let loop_span = span!(
        Level::INFO,
        "evolution_loop",
        total_generations = config.generations
    );
    let _loop_guard = loop_span.enter();

    let mut generations_run = 0;
    for generation in 1..=config.generations {
        if control.is_cancelled() {
            info!("Cancelled before generation {}", generation);
            return Ok(GaOutcome {
                best: state.best_so_far,
                status: GaStatus::Cancelled,
                generations_run,
            });
        }

        while control.is_paused() {
            if control.is_cancelled() {
                info!("Cancelled while paused before generation {}", generation);
                return Ok(GaOutcome {
                    best: state.best_so_far,
                    status: GaStatus::Cancelled,
                    generations_run,
                });
            }
            thread::sleep(Duration::from_millis(PAUSE_POLL_INTERVAL_MS));
        }

        next_generation(
            generation,
            &mut state,
            instance,
            config,
            num_vehicles,
            parent_pool_size,
            &dm,
            &mut rng,
        )?;
        generations_run = generation;

        emit_progress(progress, generation, &state.best_so_far);
    }

    info!(
        "GA completed after {} generations; best fitness {:.2}, distance {:.2}",
        generations_run, state.best_so_far.fitness, state.best_so_far.total_distance
    );

    Ok(GaOutcome {
        best: state.best_so_far,
        status: GaStatus::Completed,
        generations_run,
    })
}

/// Builds and evaluates the generation-0 population from random
/// permutations of `0..n`.
fn initialize(
    instance: &Instance,
    config: &GaConfig,
    num_vehicles: usize,
    dm: &[Vec<f64>],
    rng: &mut ChaCha8Rng,
) -> Result<GaState, SolverError> {
    let n = instance.num_customers();

    let mut population = Vec::with_capacity(config.population_size);
    for _ in 0..config.population_size {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        let routes = split_into_routes(&order, num_vehicles)?;
        population.push(evaluated(routes, instance, dm, config.lateness_penalty));
    }

    sort_by_fitness(&mut population);
    let best_so_far = population[0].clone();
    debug!("Initial best fitness {:.2}", best_so_far.fitness);

    Ok(GaState {
        population,
        best_so_far,
    })
}

/// Produces, evaluates, and sorts one offspring population, then updates
/// the best-so-far individual on strict improvement.
fn next_generation(
    generation: usize,
    state: &mut GaState,
    instance: &Instance,
    config: &GaConfig,
    num_vehicles: usize,
    parent_pool_size: usize,
    dm: &[Vec<f64>],
    rng: &mut ChaCha8Rng,
) -> Result<(), SolverError> {
    let gen_span = span!(Level::DEBUG, "generation", gen = generation);
    let _guard = gen_span.enter();

    let mut next = Vec::with_capacity(config.population_size);
    // Elitism: the best individual survives unchanged.
    next.push(state.best_so_far.clone());

    let pool = &state.population[..parent_pool_size];

    while next.len() < config.population_size {
        let parent1 = &pool[rng.gen_range(0..pool.len())];
        let parent2 = &pool[rng.gen_range(0..pool.len())];

        let flat1 = parent1.flattened();
        let flat2 = parent2.flattened();

        let (order1, order2) = if rng.gen::<f64>() < config.crossover_rate {
            order_crossover(&flat1, &flat2, rng)
        } else {
            (flat1, flat2)
        };

        for order in [order1, order2] {
            if next.len() >= config.population_size {
                break;
            }
            let routes = split_into_routes(&order, num_vehicles)?;
            let routes = mutate(&routes, config.mutation_rate, rng);
            next.push(evaluated(routes, instance, dm, config.lateness_penalty));
        }
    }

    sort_by_fitness(&mut next);
    if next[0].fitness < state.best_so_far.fitness {
        state.best_so_far = next[0].clone();
        info!(
            "New best at generation {}: fitness = {:.2}, distance = {:.2}",
            generation, state.best_so_far.fitness, state.best_so_far.total_distance
        );
    }
    state.population = next;

    Ok(())
}

fn evaluated(
    routes: Vec<Vec<usize>>,
    instance: &Instance,
    dm: &[Vec<f64>],
    penalty_weight: f64,
) -> Individual {
    let (fitness, total_distance) = evaluate(&routes, instance, dm, penalty_weight);
    Individual {
        routes,
        fitness,
        total_distance,
    }
}

fn sort_by_fitness(population: &mut [Individual]) {
    population.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));
}

fn emit_progress(progress: Option<&ProgressSender>, generation: usize, best: &Individual) {
    if let Some(tx) = progress {
        // The receiver may already be gone; a missing consumer never fails the run.
        let _ = tx.send(ProgressEvent {
            generation,
            routes: best.routes.clone(),
            best_distance: best.total_distance,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::data_generator::generate_random_instance;
    use crate::progress::progress_channel;
    use crate::solver::genetic::control::SolverControl;

    fn small_config() -> GaConfig {
        GaConfig {
            generations: 5,
            population_size: 10,
            num_vehicles: Some(2),
            ..GaConfig::default()
        }
    }

    fn assert_covers_all_customers(individual: &Individual, n: usize) {
        let mut seen = vec![false; n];
        for route in &individual.routes {
            for &c in route {
                assert!(c < n, "customer index out of range");
                assert!(!seen[c], "customer {c} visited twice");
                seen[c] = true;
            }
        }
        assert!(seen.into_iter().all(|s| s), "customer omitted");
    }

    #[test]
    fn best_individual_covers_every_customer_once() {
        let instance = generate_random_instance(5, 42);
        let outcome = evolve(
            &instance,
            &small_config(),
            42,
            &ControlHandle::unmanaged(),
            None,
        )
        .expect("run succeeds");

        assert_eq!(outcome.status, GaStatus::Completed);
        assert_eq!(outcome.generations_run, 5);
        assert_eq!(outcome.best.routes.len(), 2);
        assert_covers_all_customers(&outcome.best, 5);
    }

    #[test]
    fn identical_seeds_reproduce_identical_results() {
        let instance = generate_random_instance(5, 42);
        let config = small_config();

        let first = evolve(&instance, &config, 7, &ControlHandle::unmanaged(), None)
            .expect("first run succeeds");
        let second = evolve(&instance, &config, 7, &ControlHandle::unmanaged(), None)
            .expect("second run succeeds");

        assert_eq!(first.best.routes, second.best.routes);
        assert_eq!(first.best.fitness, second.best.fitness);
        assert_eq!(first.best.total_distance, second.best.total_distance);
    }

    #[test]
    fn progress_events_are_ordered_and_monotonic() {
        let instance = generate_random_instance(12, 8);
        let config = GaConfig {
            generations: 20,
            population_size: 12,
            num_vehicles: Some(3),
            ..GaConfig::default()
        };

        let (tx, mut rx) = progress_channel();
        evolve(&instance, &config, 8, &ControlHandle::unmanaged(), Some(&tx))
            .expect("run succeeds");
        drop(tx);

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }

        assert_eq!(events.len(), config.generations + 1);
        for (expected_gen, event) in events.iter().enumerate() {
            assert_eq!(event.generation, expected_gen);
        }
        // Elitism keeps the reported best distance non-increasing.
        for pair in events.windows(2) {
            assert!(pair[1].best_distance <= pair[0].best_distance);
        }
    }

    #[test]
    fn cancellation_returns_best_so_far_immediately() {
        let instance = generate_random_instance(10, 5);
        let control = SolverControl::new();
        control.cancel();

        let outcome = evolve(&instance, &small_config(), 5, &control.handle(), None)
            .expect("cancelled run still returns a result");

        assert_eq!(outcome.status, GaStatus::Cancelled);
        assert_eq!(outcome.generations_run, 0);
        assert_covers_all_customers(&outcome.best, 10);
    }

    #[test]
    fn paused_run_resumes_and_completes() {
        let instance = generate_random_instance(6, 9);
        let control = SolverControl::new();
        control.pause();

        let resumer = {
            let control = control.clone();
            std::thread::spawn(move || {
                std::thread::sleep(Duration::from_millis(250));
                control.resume();
            })
        };

        let outcome = evolve(&instance, &small_config(), 9, &control.handle(), None)
            .expect("paused run completes after resume");
        resumer.join().expect("resumer thread finishes");

        assert_eq!(outcome.status, GaStatus::Completed);
        assert_eq!(outcome.generations_run, 5);
    }

    #[test]
    fn cancel_during_pause_stops_the_run() {
        let instance = generate_random_instance(6, 9);
        let control = SolverControl::new();
        control.pause();

        let canceller = {
            let control = control.clone();
            std::thread::spawn(move || {
                std::thread::sleep(Duration::from_millis(250));
                control.cancel();
            })
        };

        let outcome = evolve(&instance, &small_config(), 9, &control.handle(), None)
            .expect("cancelled run still returns a result");
        canceller.join().expect("canceller thread finishes");

        assert_eq!(outcome.status, GaStatus::Cancelled);
    }

    #[test]
    fn rejects_invalid_configuration_before_any_work() {
        let instance = generate_random_instance(5, 1);
        let config = GaConfig {
            population_size: 1,
            ..small_config()
        };

        let (tx, mut rx) = progress_channel();
        let result = evolve(&instance, &config, 1, &ControlHandle::unmanaged(), Some(&tx));
        drop(tx);

        assert!(matches!(result, Err(SolverError::InvalidConfiguration(_))));
        // No progress event is emitted for a rejected configuration.
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn rejects_empty_instance() {
        let instance = generate_random_instance(0, 1);
        let result = evolve(
            &instance,
            &GaConfig::default(),
            1,
            &ControlHandle::unmanaged(),
            None,
        );
        assert!(matches!(result, Err(SolverError::InvalidInstance(_))));
    }
}
