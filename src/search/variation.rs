//! Crossover and mutation at meal granularity.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::catalog::Catalog;
use crate::error::{NutriError, Result};
use crate::models::{Meal, Menu};
use crate::search::constants::{ADD_WEIGHT, PRIORITY_TAGS, REMOVE_WEIGHT, REPLACE_WEIGHT};
use crate::search::pool::{draw, PoolStrategy};

/// Uniform crossover: each slot's meal is cloned from `a` or `b` on a fair
/// coin flip. The child starts with a zero fitness; parents are untouched.
pub fn crossover<R: Rng + ?Sized>(a: &Menu, b: &Menu, rng: &mut R) -> Menu {
    let meals = std::array::from_fn(|i| {
        let parent = if rng.gen_bool(0.5) { a } else { b };
        parent.meals()[i].clone()
    });
    Menu::new(meals)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Replace,
    Add,
    Remove,
}

impl MutationKind {
    pub const ALL: [MutationKind; 3] = [MutationKind::Replace, MutationKind::Add, MutationKind::Remove];

    pub fn weight(self) -> u32 {
        match self {
            MutationKind::Replace => REPLACE_WEIGHT,
            MutationKind::Add => ADD_WEIGHT,
            MutationKind::Remove => REMOVE_WEIGHT,
        }
    }
}

/// Substitute pool chain for a replaced food: foods sharing its first
/// priority tag, then its exact category, then anything.
pub fn replacement_chain<'a>(catalog: &'a Catalog, meal: &Meal, index: usize) -> Vec<PoolStrategy<'a>> {
    let food = catalog.food(meal.foods[index]);
    let mut chain = Vec::with_capacity(3);
    if let Some(tag) = PRIORITY_TAGS.into_iter().find(|t| food.has_tag(*t)) {
        chain.push(PoolStrategy::Tagged(tag));
    }
    chain.push(PoolStrategy::CategoryExact(&food.category));
    chain.push(PoolStrategy::Any);
    chain
}

/// Applies per-meal mutations with a fixed rate and operator weights.
#[derive(Debug, Clone)]
pub struct Mutator {
    rate: f64,
    max_foods_per_meal: Option<usize>,
    kinds: WeightedIndex<u32>,
}

impl Mutator {
    pub fn new(rate: f64, max_foods_per_meal: Option<usize>) -> Result<Self> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(NutriError::Configuration(format!(
                "mutation_rate must be within [0, 1] (got {})",
                rate
            )));
        }
        let kinds = WeightedIndex::new(MutationKind::ALL.map(MutationKind::weight))
            .map_err(|e| NutriError::Configuration(format!("mutation weights: {}", e)))?;
        Ok(Self {
            rate,
            max_foods_per_meal,
            kinds,
        })
    }

    pub fn pick_kind<R: Rng + ?Sized>(&self, rng: &mut R) -> MutationKind {
        MutationKind::ALL[self.kinds.sample(rng)]
    }

    /// Mutate each meal of `menu` with probability `rate`.
    ///
    /// Returns the number of meals that actually changed. An operator whose
    /// precondition fails leaves its meal as is.
    pub fn mutate<R: Rng + ?Sized>(&self, menu: &mut Menu, catalog: &Catalog, rng: &mut R) -> Result<usize> {
        let mut changed = 0;
        for meal in menu.meals_mut().iter_mut() {
            if !rng.gen_bool(self.rate) {
                continue;
            }
            let kind = self.pick_kind(rng);
            if self.apply(kind, meal, catalog, rng)? {
                changed += 1;
            }
        }
        Ok(changed)
    }

    /// Apply one operator to a meal. `Ok(false)` means a silent no-op.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        kind: MutationKind,
        meal: &mut Meal,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<bool> {
        match kind {
            MutationKind::Replace => {
                if meal.is_empty() {
                    return Ok(false);
                }
                let idx = rng.gen_range(0..meal.len());
                let substitute = draw(catalog, &replacement_chain(catalog, meal, idx), rng)?;
                meal.foods[idx] = substitute;
                Ok(true)
            }
            MutationKind::Add => {
                if self.max_foods_per_meal.is_some_and(|cap| meal.len() >= cap) {
                    return Ok(false);
                }
                let food = draw(catalog, &[PoolStrategy::Any], rng)?;
                meal.foods.push(food);
                Ok(true)
            }
            MutationKind::Remove => {
                if meal.len() < 2 {
                    return Ok(false);
                }
                let idx = rng.gen_range(0..meal.len());
                meal.foods.remove(idx);
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Food, FoodId, MealSlot, Tag};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Food::new("Rice", 130.0, 2.7, 28.0, 0.3, "Cereals", &[Tag::LunchCarb]),
            Food::new("Pasta", 158.0, 5.8, 30.9, 0.9, "Cereals", &[Tag::LunchCarb]),
            Food::new("Beef", 250.0, 26.0, 0.0, 15.0, "Meats", &[Tag::Meat]),
            Food::new("Fish", 206.0, 22.0, 0.0, 12.0, "Fish", &[Tag::Meat]),
            Food::new("Apple", 52.0, 0.3, 14.0, 0.2, "Fruits", &[]),
            Food::new("Pear", 57.0, 0.4, 15.0, 0.1, "Fruits", &[]),
            Food::new("Kale", 49.0, 4.3, 8.8, 0.9, "Vegetables", &[]),
        ])
    }

    fn menu_of(foods: [Vec<usize>; 4]) -> Menu {
        let mut slots = MealSlot::ALL.into_iter();
        Menu::new(foods.map(|ids| {
            let slot = slots.next().unwrap();
            Meal::new(slot, ids.into_iter().map(FoodId).collect())
        }))
    }

    #[test]
    fn test_crossover_identical_parents() {
        let parent = menu_of([vec![4, 5], vec![0, 2, 6], vec![4], vec![1, 3]]);
        let mut rng = StdRng::seed_from_u64(77);
        for _ in 0..20 {
            let child = crossover(&parent, &parent, &mut rng);
            assert!(child.same_structure(&parent));
            assert_eq!(child.fitness, 0.0);
        }
    }

    #[test]
    fn test_crossover_takes_whole_meals_from_parents() {
        let a = menu_of([vec![4], vec![0, 2], vec![5], vec![1, 3]]);
        let b = menu_of([vec![5, 5], vec![1], vec![4, 6], vec![0]]);
        let mut rng = StdRng::seed_from_u64(8);

        for _ in 0..50 {
            let child = crossover(&a, &b, &mut rng);
            for (i, meal) in child.meals().iter().enumerate() {
                assert_eq!(meal.slot, MealSlot::ALL[i]);
                assert!(meal == &a.meals()[i] || meal == &b.meals()[i]);
            }
        }
    }

    #[test]
    fn test_replace_keeps_priority_tag() {
        let catalog = catalog();
        let mutator = Mutator::new(1.0, None).unwrap();
        let mut rng = StdRng::seed_from_u64(4);

        for _ in 0..50 {
            let mut meal = Meal::new(MealSlot::Dinner, vec![FoodId(2)]);
            assert!(mutator.apply(MutationKind::Replace, &mut meal, &catalog, &mut rng).unwrap());
            assert!(catalog.food(meal.foods[0]).has_tag(Tag::Meat));
        }
    }

    #[test]
    fn test_replacement_chain_order() {
        let catalog = catalog();
        let meal = Meal::new(MealSlot::Snack, vec![FoodId(4), FoodId(2)]);

        let untagged = replacement_chain(&catalog, &meal, 0);
        assert_eq!(
            untagged,
            vec![PoolStrategy::CategoryExact("Fruits"), PoolStrategy::Any]
        );

        let tagged = replacement_chain(&catalog, &meal, 1);
        assert_eq!(tagged[0], PoolStrategy::Tagged(Tag::Meat));
        assert_eq!(tagged.len(), 3);
    }

    #[test]
    fn test_replace_untagged_stays_in_category() {
        let catalog = catalog();
        let mutator = Mutator::new(1.0, None).unwrap();
        let mut rng = StdRng::seed_from_u64(10);

        for _ in 0..50 {
            let mut meal = Meal::new(MealSlot::Snack, vec![FoodId(4)]);
            mutator.apply(MutationKind::Replace, &mut meal, &catalog, &mut rng).unwrap();
            assert_eq!(catalog.food(meal.foods[0]).category, "Fruits");
        }
    }

    #[test]
    fn test_remove_refuses_to_empty_meal() {
        let catalog = catalog();
        let mutator = Mutator::new(1.0, None).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let mut meal = Meal::new(MealSlot::Snack, vec![FoodId(4)]);
        assert!(!mutator.apply(MutationKind::Remove, &mut meal, &catalog, &mut rng).unwrap());
        assert_eq!(meal.foods, vec![FoodId(4)]);

        let mut meal = Meal::new(MealSlot::Snack, vec![FoodId(4), FoodId(5)]);
        assert!(mutator.apply(MutationKind::Remove, &mut meal, &catalog, &mut rng).unwrap());
        assert_eq!(meal.len(), 1);
    }

    #[test]
    fn test_add_respects_cap() {
        let catalog = catalog();
        let capped = Mutator::new(1.0, Some(2)).unwrap();
        let mut rng = StdRng::seed_from_u64(2);

        let mut meal = Meal::new(MealSlot::Lunch, vec![FoodId(0)]);
        assert!(capped.apply(MutationKind::Add, &mut meal, &catalog, &mut rng).unwrap());
        assert!(!capped.apply(MutationKind::Add, &mut meal, &catalog, &mut rng).unwrap());
        assert_eq!(meal.len(), 2);
    }

    #[test]
    fn test_heavy_mutation_never_empties_meals() {
        let catalog = catalog();
        let mutator = Mutator::new(1.0, None).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut menu = menu_of([vec![4], vec![0], vec![5], vec![1]]);

        for _ in 0..500 {
            mutator.mutate(&mut menu, &catalog, &mut rng).unwrap();
            assert!(menu.meals().iter().all(|m| !m.is_empty()));
        }
    }

    #[test]
    fn test_zero_rate_is_identity() {
        let catalog = catalog();
        let mutator = Mutator::new(0.0, None).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let original = menu_of([vec![4], vec![0, 2], vec![5], vec![1, 3]]);
        let mut menu = original.clone();

        for _ in 0..100 {
            assert_eq!(mutator.mutate(&mut menu, &catalog, &mut rng).unwrap(), 0);
        }
        assert!(menu.same_structure(&original));
    }

    #[test]
    fn test_replace_is_most_frequent_kind() {
        let mutator = Mutator::new(1.0, None).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let mut counts = [0usize; 3];
        for _ in 0..5000 {
            match mutator.pick_kind(&mut rng) {
                MutationKind::Replace => counts[0] += 1,
                MutationKind::Add => counts[1] += 1,
                MutationKind::Remove => counts[2] += 1,
            }
        }
        // Expected 3000 / 1000 / 1000.
        assert!(counts[0] > 2700 && counts[0] < 3300);
        assert!(counts[1] > 800 && counts[1] < 1200);
        assert!(counts[2] > 800 && counts[2] < 1200);
    }
}
