//! Genetic search over daily menus.

pub mod builder;
pub mod config;
pub mod constants;
pub mod engine;
pub mod fitness;
pub mod observer;
pub mod pool;
pub mod selection;
pub mod variation;

pub use builder::{build_meal, build_menu, requirements, Requirement};
pub use config::SearchConfig;
pub use engine::{extract_diverse, run, SearchEngine};
pub use fitness::{evaluate_all, fitness, fitness_of};
pub use observer::{LogObserver, NoopObserver, ProgressObserver};
pub use pool::{draw, resolve_pool, PoolStrategy};
pub use selection::{select_parents, tournament};
pub use variation::{crossover, MutationKind, Mutator};
