pub mod solomon;

pub use solomon::{load_instance, parse_solomon};

use crate::domain::types::{Customer, Depot};

/// An immutable VRPTW problem instance.
///
/// `vehicle_capacity` is parsed from the instance file and carried along,
/// but neither route partitioning nor fitness evaluation consults it.
#[derive(Debug, Clone)]
pub struct Instance {
    pub customers: Vec<Customer>,
    pub depot: Depot,
    pub vehicle_capacity: f64,
}

impl Instance {
    pub fn num_customers(&self) -> usize {
        self.customers.len()
    }
}
