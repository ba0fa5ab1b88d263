/// Receives progress reports from the generational loop.
///
/// Always called from the thread driving the search, after the generation
/// has been evaluated and sorted.
pub trait ProgressObserver {
    fn on_generation(&mut self, _generation: usize, _best_fitness: f64) {}
}

/// Ignores all progress reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {}

/// Emits one `tracing` event per generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ProgressObserver for LogObserver {
    fn on_generation(&mut self, generation: usize, best_fitness: f64) {
        tracing::info!(generation, best_fitness, "generation evaluated");
    }
}

impl<F> ProgressObserver for F
where
    F: FnMut(usize, f64),
{
    fn on_generation(&mut self, generation: usize, best_fitness: f64) {
        self(generation, best_fitness)
    }
}
