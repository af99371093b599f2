pub mod engine;
pub mod random;
pub mod shuffle;
pub mod validator;
pub mod weight;

pub use engine::{DrawEngine, algorithm_info};
pub use random::{OsRandom, RandomSource, SeededRandom, SequenceRandom, UnavailableRandom};
pub use shuffle::shuffle;
pub use validator::validate;
pub use weight::{WeightedPoolEntry, build_weighted_pool};
