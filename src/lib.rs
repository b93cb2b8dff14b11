//! Genetic-algorithm solver for the Vehicle Routing Problem with Time
//! Windows (VRPTW).
//!
//! Chromosomes are permutations of customer indices split positionally into
//! a fixed number of routes. Fitness is total Euclidean distance plus a
//! weighted penalty for arriving past a customer's due date. The evolution
//! loop supports cooperative pause/cancel and emits one progress event per
//! generation.

pub mod config;
pub mod distance;
pub mod domain;
pub mod error;
pub mod evaluation;
pub mod fixtures;
pub mod harness;
pub mod instance;
pub mod progress;
pub mod solver;
