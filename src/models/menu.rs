use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::food::{FoodId, NutrientTotals};

/// The four fixed meal slots of a daily menu, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Snack => "Snack",
            MealSlot::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A meal slot holding an ordered list of catalog foods.
///
/// Totals are always recomputed from the catalog so they cannot go stale
/// after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub slot: MealSlot,
    pub foods: Vec<FoodId>,
}

impl Meal {
    pub fn new(slot: MealSlot, foods: Vec<FoodId>) -> Self {
        Self { slot, foods }
    }

    pub fn name(&self) -> &'static str {
        self.slot.name()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn totals(&self, catalog: &Catalog) -> NutrientTotals {
        self.foods.iter().map(|id| catalog.food(*id).nutrients()).sum()
    }
}

/// One candidate solution: exactly four meals in [`MealSlot::ALL`] order.
#[derive(Debug, Clone)]
pub struct Menu {
    meals: [Meal; 4],

    /// Score from the latest evaluation pass. Stale after any mutation.
    pub fitness: f64,
}

impl Menu {
    /// Assemble a menu. Meals must already be in slot order.
    pub fn new(meals: [Meal; 4]) -> Self {
        debug_assert!(
            meals
                .iter()
                .zip(MealSlot::ALL)
                .all(|(meal, slot)| meal.slot == slot),
            "meals out of slot order"
        );
        Self {
            meals,
            fitness: 0.0,
        }
    }

    pub fn meals(&self) -> &[Meal; 4] {
        &self.meals
    }

    /// Mutable access to the meals. The array length (and therefore the
    /// slot count) cannot change through this.
    pub fn meals_mut(&mut self) -> &mut [Meal; 4] {
        &mut self.meals
    }

    pub fn meal(&self, slot: MealSlot) -> &Meal {
        &self.meals[slot as usize]
    }

    pub fn totals(&self, catalog: &Catalog) -> NutrientTotals {
        self.meals.iter().map(|m| m.totals(catalog)).sum()
    }

    /// Total calories rounded down; the bucket key used for result diversity.
    pub fn calorie_bucket(&self, catalog: &Catalog) -> i64 {
        self.totals(catalog).calories.floor() as i64
    }

    /// Same meals with the same foods in the same order.
    pub fn same_structure(&self, other: &Menu) -> bool {
        self.meals == other.meals
    }
}
