use rayon::prelude::*;

use crate::catalog::Catalog;
use crate::models::{Menu, NutrientTotals, TargetRange};
use crate::search::constants::{CALORIE_DIVISOR, CARBS_DIVISOR, FATS_DIVISOR, PROTEIN_DIVISOR};

/// Squared, scaled distance from `value` to the violated bound, or zero
/// when `value` lies within `[min, max]`.
///
/// With `min > max` no value is in range.
pub fn range_deviation(value: f64, (min, max): (f64, f64), divisor: f64) -> f64 {
    let distance = if value < min {
        min - value
    } else if value > max {
        value - max
    } else {
        return 0.0;
    };
    (distance / divisor).powi(2)
}

/// Aggregate error over all four nutrients.
pub fn total_error(totals: &NutrientTotals, targets: &TargetRange) -> f64 {
    range_deviation(totals.calories, targets.calories(), CALORIE_DIVISOR)
        + range_deviation(totals.protein, targets.protein(), PROTEIN_DIVISOR)
        + range_deviation(totals.carbs, targets.carbs(), CARBS_DIVISOR)
        + range_deviation(totals.fats, targets.fats(), FATS_DIVISOR)
}

/// Fitness in (0, 1]: 1 exactly when every nutrient is within its range.
///
/// Any single nutrient far out of range drags the score down on its own;
/// in-range nutrients do not compensate for it.
pub fn fitness_of(totals: &NutrientTotals, targets: &TargetRange) -> f64 {
    1.0 / (1.0 + total_error(totals, targets))
}

pub fn fitness(menu: &Menu, catalog: &Catalog, targets: &TargetRange) -> f64 {
    fitness_of(&menu.totals(catalog), targets)
}

/// Score every menu in place. Each score depends only on its own menu and
/// the shared read-only catalog and targets, so the parallel path is safe.
pub fn evaluate_all(population: &mut [Menu], catalog: &Catalog, targets: &TargetRange, parallel: bool) {
    if parallel {
        population
            .par_iter_mut()
            .for_each(|menu| menu.fitness = fitness(menu, catalog, targets));
    } else {
        for menu in population.iter_mut() {
            menu.fitness = fitness(menu, catalog, targets);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    fn targets() -> TargetRange {
        TargetRange::new(1800.0, 2200.0, 70.0, 100.0, 250.0, 300.0, 60.0, 90.0).unwrap()
    }

    fn totals(calories: f64, protein: f64, carbs: f64, fats: f64) -> NutrientTotals {
        NutrientTotals {
            calories,
            protein,
            carbs,
            fats,
        }
    }

    #[test]
    fn test_in_range_scores_one() {
        assert_eq!(fitness_of(&totals(2000.0, 80.0, 270.0, 70.0), &targets()), 1.0);
        // Bounds are inclusive.
        assert_eq!(fitness_of(&totals(1800.0, 100.0, 250.0, 90.0), &targets()), 1.0);
    }

    #[test]
    fn test_deviation_scaling() {
        // 200 kcal short: (200/100)^2 = 4
        assert_float_absolute_eq!(range_deviation(1600.0, (1800.0, 2200.0), 100.0), 4.0, 1e-12);
        // 20 g protein over: (20/10)^2 = 4
        assert_float_absolute_eq!(range_deviation(120.0, (70.0, 100.0), 10.0), 4.0, 1e-12);

        let score = fitness_of(&totals(1600.0, 120.0, 270.0, 70.0), &targets());
        assert_float_absolute_eq!(score, 1.0 / 9.0, 1e-12);
    }

    #[test]
    fn test_single_nutrient_dominates() {
        // Three perfect nutrients cannot offset one far-off one.
        let score = fitness_of(&totals(2000.0, 80.0, 270.0, 190.0), &targets());
        assert!(score < 0.01);
        assert!(score > 0.0);
    }

    #[test]
    fn test_inverted_bounds_never_in_range() {
        let inverted = TargetRange::new(2200.0, 1800.0, 0.0, 1e9, 0.0, 1e9, 0.0, 1e9).unwrap();
        for cal in [1000.0, 1800.0, 2000.0, 2200.0, 3000.0] {
            let score = fitness_of(&totals(cal, 10.0, 10.0, 10.0), &inverted);
            assert!(score < 1.0, "calories {} scored {}", cal, score);
            assert!(score > 0.0);
        }
    }

    #[test]
    fn test_fitness_bounded() {
        let extreme = fitness_of(&totals(1e7, 1e6, 1e6, 1e6), &targets());
        assert!(extreme > 0.0 && extreme < 1e-6);
    }
}
