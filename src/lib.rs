/// Q-learning agents and the value table
pub mod algo;

/// Strategies for episode-decaying hyperparameters
pub mod decay;

/// Data structures
pub mod ds;

/// Environment interface
pub mod env;

/// Error types
pub mod error;

/// Exploration policies
pub mod exploration;

/// Grid geometry and state index encoding
pub mod grid;

/// The grid-world environment
pub mod grid_world;

/// The episode training loop
pub mod train;

mod util;
