use crate::error::SolverError;

/// Splits a visiting order into `num_vehicles` contiguous route segments.
///
/// With `n` customers, `base = n / num_vehicles` and the first
/// `n % num_vehicles` routes receive one extra customer. The split is purely
/// positional; it is not capacity- or time-window-aware.
pub fn split_into_routes(
    order: &[usize],
    num_vehicles: usize,
) -> Result<Vec<Vec<usize>>, SolverError> {
    let n = order.len();
    if num_vehicles < 1 || num_vehicles > n {
        return Err(SolverError::InvalidConfiguration(format!(
            "num_vehicles must be within [1, {n}], got {num_vehicles}"
        )));
    }

    let base = n / num_vehicles;
    let extra = n % num_vehicles;

    let mut routes = Vec::with_capacity(num_vehicles);
    let mut idx = 0;
    for v in 0..num_vehicles {
        let size = base + usize::from(v < extra);
        routes.push(order[idx..idx + size].to_vec());
        idx += size;
    }

    Ok(routes)
}
