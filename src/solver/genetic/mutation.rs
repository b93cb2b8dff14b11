use rand::Rng;

/// Adjacent-swap mutation applied independently to each route.
///
/// Routes are copied, never aliased. A route of at least two customers is
/// perturbed with probability `mutation_rate` by swapping one random
/// adjacent pair. Which customers belong to the chromosome never changes,
/// only their order inside a route.
pub fn mutate<R: Rng>(
    routes: &[Vec<usize>],
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    let mut new_routes = routes.to_vec();

    for route in &mut new_routes {
        if route.len() >= 2 && rng.gen::<f64>() < mutation_rate {
            let i = rng.gen_range(0..route.len() - 1);
            route.swap(i, i + 1);
        }
    }

    new_routes
}
