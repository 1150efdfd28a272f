pub mod genome;
pub mod operators;
pub mod evolution_engine;
pub mod progress;

pub use genome::Genome;
pub use operators::MutationRates;
pub use evolution_engine::{EvolutionEngine, ProgressCallback};
pub use progress::{ConsoleProgressCallback, SilentProgressCallback};
