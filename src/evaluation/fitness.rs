use crate::distance::matrix::dist_between;
use crate::instance::Instance;

/// Simulates every route's timeline and returns `(fitness, total_distance)`.
///
/// Each route starts at the depot with the clock at zero. Arriving before a
/// customer's ready time means waiting (time passes, no extra cost); arriving
/// past the due date accumulates lateness but never rejects the route. After
/// the last customer the vehicle returns to the depot.
///
/// `fitness = total_distance + penalty_weight * total_lateness`, summed over
/// all routes. Lower is better. Pure and deterministic.
pub fn evaluate(
    routes: &[Vec<usize>],
    instance: &Instance,
    dm: &[Vec<f64>],
    penalty_weight: f64,
) -> (f64, f64) {
    let mut total_distance = 0.0;
    let mut total_lateness = 0.0;

    for route in routes {
        let mut prev = 0;
        let mut clock = 0.0;

        for &customer_idx in route {
            let coord_idx = customer_idx + 1;
            let d = dist_between(prev, coord_idx, dm);
            total_distance += d;
            clock += d;

            let customer = &instance.customers[customer_idx];
            if clock < customer.ready_time {
                clock = customer.ready_time;
            }
            if clock > customer.due_date {
                total_lateness += clock - customer.due_date;
            }

            clock += customer.service_duration;
            prev = coord_idx;
        }

        // Empty routes leave prev at the depot, adding zero.
        total_distance += dist_between(prev, 0, dm);
    }

    let fitness = total_distance + penalty_weight * total_lateness;
    (fitness, total_distance)
}
