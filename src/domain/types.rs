use serde::Serialize;

/// A customer with a delivery demand and a service time window.
/// Immutable once the instance is loaded.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub demand: f64,
    pub ready_time: f64,
    pub due_date: f64,
    pub service_duration: f64,
}

/// The common start and end point of every route. Occupies index 0 in
/// distance-matrix space; customer `i` sits at index `i + 1`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Depot {
    pub x: f64,
    pub y: f64,
}
