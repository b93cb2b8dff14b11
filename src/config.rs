use crate::error::SolverError;

pub mod constant {
    /// Default RNG seed used by the harness and fixtures.
    pub const SEED: u64 = 64;
    /// How often the worker re-checks the pause flag while suspended.
    pub const PAUSE_POLL_INTERVAL_MS: u64 = 100;
    /// Suffix for the per-instance progress CSV.
    pub const PROGRESS_CSV_SUFFIX: &str = "best_so_far.csv";
    /// Suffix for the per-instance best-solution JSON dump.
    pub const BEST_JSON_SUFFIX: &str = "best_solution.json";
    /// Cross-instance summary table written after all runs.
    pub const SUMMARY_CSV_PATH: &str = "summary.csv";
}

/// Parameters of a single GA run.
///
/// `num_vehicles = None` resolves to `max(1, n / 10)` for an instance with
/// `n` customers.
#[derive(Debug, Clone)]
pub struct GaConfig {
    pub generations: usize,
    pub population_size: usize,
    pub num_vehicles: Option<usize>,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
    pub elitism_fraction: f64,
    pub lateness_penalty: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            population_size: 50,
            num_vehicles: None,
            crossover_rate: 0.8,
            mutation_rate: 0.2,
            elitism_fraction: 0.4,
            lateness_penalty: 1000.0,
        }
    }
}

impl GaConfig {
    pub fn resolved_num_vehicles(&self, num_customers: usize) -> usize {
        self.num_vehicles
            .unwrap_or_else(|| std::cmp::max(1, num_customers / 10))
    }

    /// Size of the parent pool drawn from the sorted population.
    pub fn parent_pool_size(&self) -> usize {
        std::cmp::max(
            2,
            (self.population_size as f64 * self.elitism_fraction).round() as usize,
        )
    }

    /// Checks the configuration against an instance with `num_customers`
    /// customers. Any violation is fatal; the solver performs no work.
    pub fn validate(&self, num_customers: usize) -> Result<(), SolverError> {
        if num_customers == 0 {
            return Err(SolverError::InvalidInstance(
                "instance has no customers".to_string(),
            ));
        }
        if self.generations < 1 {
            return Err(SolverError::InvalidConfiguration(
                "generations must be at least 1".to_string(),
            ));
        }
        if self.population_size < 2 {
            return Err(SolverError::InvalidConfiguration(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        let num_vehicles = self.resolved_num_vehicles(num_customers);
        if num_vehicles < 1 || num_vehicles > num_customers {
            return Err(SolverError::InvalidConfiguration(format!(
                "num_vehicles must be within [1, {num_customers}], got {num_vehicles}"
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(SolverError::InvalidConfiguration(format!(
                "crossover_rate must be within [0, 1], got {}",
                self.crossover_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SolverError::InvalidConfiguration(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.elitism_fraction <= 0.0 || self.elitism_fraction > 1.0 {
            return Err(SolverError::InvalidConfiguration(format!(
                "elitism_fraction must be within (0, 1], got {}",
                self.elitism_fraction
            )));
        }
        if self.lateness_penalty <= 0.0 {
            return Err(SolverError::InvalidConfiguration(format!(
                "lateness_penalty must be positive, got {}",
                self.lateness_penalty
            )));
        }
        Ok(())
    }
}
