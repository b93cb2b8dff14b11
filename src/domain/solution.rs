use serde::Serialize;

/// One candidate solution: a permutation of customer indices `0..n`
/// partitioned into ordered routes, plus its evaluated cost.
///
/// Individuals are value objects. Crossover and mutation never modify an
/// existing individual; they produce new ones. The union of all routes
/// always covers every customer index exactly once.
#[derive(Debug, Clone, Serialize)]
pub struct Individual {
    pub routes: Vec<Vec<usize>>,
    pub fitness: f64,
    pub total_distance: f64,
}

impl Individual {
    /// Concatenates the routes back into a single visiting order,
    /// dropping route boundaries.
    pub fn flattened(&self) -> Vec<usize> {
        self.routes.iter().flatten().copied().collect()
    }

    pub fn num_customers(&self) -> usize {
        self.routes.iter().map(Vec::len).sum()
    }
}
