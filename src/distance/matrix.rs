use crate::domain::types::{Customer, Depot};

/// Builds the symmetric Euclidean distance table over depot + customers.
///
/// The depot sits at index 0 and customer `i` occupies index `i + 1`, so the
/// result is `(n + 1) x (n + 1)` with a zero diagonal.
pub fn build_distance_matrix(depot: &Depot, customers: &[Customer]) -> Vec<Vec<f64>> {
    let mut coords: Vec<(f64, f64)> = Vec::with_capacity(customers.len() + 1);
    coords.push((depot.x, depot.y));
    coords.extend(customers.iter().map(|c| (c.x, c.y)));

    let n = coords.len();
    let mut dm = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = (coords[i].0 - coords[j].0).hypot(coords[i].1 - coords[j].1);
            dm[i][j] = d;
            dm[j][i] = d;
        }
    }

    dm
}

pub fn dist_between(from: usize, to: usize, dm: &[Vec<f64>]) -> f64 {
    dm[from][to]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Vec<f64>> {
        let depot = Depot { x: 0.0, y: 0.0 };
        let customers = vec![
            Customer {
                id: 1,
                x: 3.0,
                y: 4.0,
                demand: 10.0,
                ready_time: 0.0,
                due_date: 100.0,
                service_duration: 0.0,
            },
            Customer {
                id: 2,
                x: 0.0,
                y: 8.0,
                demand: 20.0,
                ready_time: 0.0,
                due_date: 100.0,
                service_duration: 0.0,
            },
        ];
        build_distance_matrix(&depot, &customers)
    }

    #[test]
    fn euclidean_distances() {
        let dm = sample();
        assert!((dist_between(0, 1, &dm) - 5.0).abs() < 1e-10);
        assert!((dist_between(0, 2, &dm) - 8.0).abs() < 1e-10);
        assert!((dist_between(1, 2, &dm) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn matrix_is_symmetric_with_zero_diagonal() {
        let dm = sample();
        for i in 0..dm.len() {
            assert_eq!(dm[i][i], 0.0);
            for j in 0..dm.len() {
                assert_eq!(dm[i][j], dm[j][i]);
            }
        }
    }

    #[test]
    fn sized_by_customer_count_plus_depot() {
        let dm = sample();
        assert_eq!(dm.len(), 3);
        assert!(dm.iter().all(|row| row.len() == 3));
    }
}
