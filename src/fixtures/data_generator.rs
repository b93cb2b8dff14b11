use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::domain::types::{Customer, Depot};
use crate::instance::Instance;

/// Generates a random instance with wide-open time windows.
///
/// Coordinates are uniform on a 100x100 grid and every customer can be
/// served at any time, so fitness reduces to pure distance. Deterministic
/// for a fixed seed.
pub fn generate_random_instance(num_customers: usize, seed: u64) -> Instance {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let depot = Depot { x: 50.0, y: 50.0 };

    let customers = (0..num_customers)
        .map(|i| Customer {
            id: i + 1,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            demand: rng.gen_range(1.0..30.0_f64).round(),
            ready_time: 0.0,
            due_date: 10_000.0,
            service_duration: 10.0,
        })
        .collect();

    info!(
        "Generated random instance with {} customers (seed {})",
        num_customers, seed
    );

    Instance {
        customers,
        depot,
        vehicle_capacity: 200.0,
    }
}

/// Generates an instance with tight, staggered time windows so that route
/// order matters and lateness penalties actually fire.
pub fn generate_tight_window_instance(num_customers: usize, seed: u64) -> Instance {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let depot = Depot { x: 0.0, y: 0.0 };

    let customers = (0..num_customers)
        .map(|i| {
            let ready = (i as f64) * 40.0;
            Customer {
                id: i + 1,
                x: rng.gen_range(0.0..60.0),
                y: rng.gen_range(0.0..60.0),
                demand: 10.0,
                ready_time: ready,
                due_date: ready + 30.0,
                service_duration: 5.0,
            }
        })
        .collect();

    Instance {
        customers,
        depot,
        vehicle_capacity: 200.0,
    }
}
