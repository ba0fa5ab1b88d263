use rand::seq::index;
use rand::Rng;

use crate::models::Menu;

/// Draw `k` distinct members (clamped to the population size) and return
/// the index of the fittest. Ties go to the earliest drawn.
///
/// `population` must be non-empty and already evaluated.
pub fn tournament<R: Rng + ?Sized>(population: &[Menu], k: usize, rng: &mut R) -> usize {
    debug_assert!(!population.is_empty(), "cannot select from empty population");

    let k = k.clamp(1, population.len());
    let mut contenders = index::sample(rng, population.len(), k).into_iter();

    // k >= 1, so there is always a first contender.
    let mut best = contenders.next().unwrap_or(0);
    for idx in contenders {
        if population[idx].fitness > population[best].fitness {
            best = idx;
        }
    }
    best
}

/// Run `count` independent tournaments and collect the winners' indices.
pub fn select_parents<R: Rng + ?Sized>(
    population: &[Menu],
    count: usize,
    k: usize,
    rng: &mut R,
) -> Vec<usize> {
    (0..count).map(|_| tournament(population, k, rng)).collect()
}
