pub mod control;
pub mod crossover;
pub mod mutation;
pub mod partition;
pub mod search;

pub use control::*;
pub use crossover::*;
pub use mutation::*;
pub use partition::*;
pub use search::*;
