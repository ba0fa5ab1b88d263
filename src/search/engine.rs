use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::Catalog;
use crate::error::{NutriError, Result};
use crate::models::{Menu, TargetRange};
use crate::search::builder::build_menu;
use crate::search::config::SearchConfig;
use crate::search::constants::{RESULT_LIMIT, TOURNAMENT_SIZE};
use crate::search::fitness::evaluate_all;
use crate::search::observer::ProgressObserver;
use crate::search::selection::select_parents;
use crate::search::variation::{crossover, Mutator};

/// Owns one run's population and drives the generational loop.
///
/// The catalog and targets are borrowed read-only for the whole run.
pub struct SearchEngine<'a> {
    catalog: &'a Catalog,
    targets: &'a TargetRange,
    config: SearchConfig,
    mutator: Mutator,
    rng: StdRng,
    population: Vec<Menu>,
    generation: usize,
}

impl<'a> SearchEngine<'a> {
    /// Validate the inputs and build the initial random population.
    ///
    /// Fails with [`NutriError::Configuration`] before any menu is built if
    /// the config or targets are invalid or the catalog is empty.
    pub fn new(catalog: &'a Catalog, targets: &'a TargetRange, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        targets.validate()?;
        if catalog.is_empty() {
            return Err(NutriError::Configuration(
                "catalog is empty; nothing to build menus from".to_string(),
            ));
        }

        let mutator = Mutator::new(config.mutation_rate, config.max_foods_per_meal)?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let population = (0..config.population_size)
            .map(|_| build_menu(catalog, &mut rng))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            foods = catalog.len(),
            population = config.population_size,
            generations = config.generation_count,
            elite = config.elite_size,
            mutation_rate = config.mutation_rate,
            "initialized search"
        );

        Ok(Self {
            catalog,
            targets,
            config,
            mutator,
            rng,
            population,
            generation: 0,
        })
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &[Menu] {
        &self.population
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Score every member, then sort best first. Ties keep their order.
    pub fn evaluate(&mut self) {
        evaluate_all(&mut self.population, self.catalog, self.targets, self.config.parallel);
        self.population
            .sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    }

    /// Fitness of the first member. Only meaningful right after [`evaluate`](Self::evaluate).
    pub fn best_fitness(&self) -> f64 {
        self.population.first().map_or(0.0, |m| m.fitness)
    }

    /// Run one generation: evaluate, report, then replace the population
    /// with elites plus offspring. Returns the best fitness of the
    /// generation that was just evaluated.
    pub fn step<O: ProgressObserver + ?Sized>(&mut self, observer: &mut O) -> Result<f64> {
        self.evaluate();
        let best = self.best_fitness();
        observer.on_generation(self.generation, best);
        tracing::debug!(generation = self.generation, best_fitness = best, "generation evaluated");

        self.population = self.breed()?;
        self.generation += 1;
        Ok(best)
    }

    /// Next generation from the current, evaluated and sorted, population.
    fn breed(&mut self) -> Result<Vec<Menu>> {
        let size = self.config.population_size;
        let elite = self.config.elite_size;

        let mut next: Vec<Menu> = Vec::with_capacity(size);
        next.extend(self.population[..elite].iter().cloned());

        let parents = select_parents(&self.population, size - elite, TOURNAMENT_SIZE, &mut self.rng);

        while next.len() < size {
            let p1 = parents[self.rng.gen_range(0..parents.len())];
            let p2 = parents[self.rng.gen_range(0..parents.len())];

            let mut child = crossover(&self.population[p1], &self.population[p2], &mut self.rng);
            self.mutator.mutate(&mut child, self.catalog, &mut self.rng)?;
            next.push(child);
        }

        Ok(next)
    }

    /// Evaluate the final population and extract the diverse top menus.
    pub fn finish(mut self) -> Vec<Menu> {
        self.evaluate();
        let results = extract_diverse(self.population, self.catalog, RESULT_LIMIT);
        tracing::info!(
            generations = self.generation,
            results = results.len(),
            best_fitness = results.first().map_or(0.0, |m| m.fitness),
            "search finished"
        );
        results
    }

    /// Run all configured generations, then [`finish`](Self::finish).
    pub fn run<O: ProgressObserver + ?Sized>(mut self, observer: &mut O) -> Result<Vec<Menu>> {
        for _ in 0..self.config.generation_count {
            self.step(observer)?;
        }
        Ok(self.finish())
    }
}

/// Walk `sorted` (best first) and keep menus whose floored total calories
/// have not been seen yet, up to `limit`.
///
/// Returning fewer than `limit` menus is a normal outcome.
pub fn extract_diverse<I>(sorted: I, catalog: &Catalog, limit: usize) -> Vec<Menu>
where
    I: IntoIterator<Item = Menu>,
{
    let mut seen = HashSet::new();
    let mut picked = Vec::with_capacity(limit);

    for menu in sorted {
        if picked.len() >= limit {
            break;
        }
        if seen.insert(menu.calorie_bucket(catalog)) {
            picked.push(menu);
        }
    }

    picked
}

/// Search for up to three diverse menus that fit `targets`.
pub fn run<O: ProgressObserver + ?Sized>(
    catalog: &Catalog,
    targets: &TargetRange,
    config: SearchConfig,
    observer: &mut O,
) -> Result<Vec<Menu>> {
    SearchEngine::new(catalog, targets, config)?.run(observer)
}
