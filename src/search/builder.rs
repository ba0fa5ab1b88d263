//! Random construction of structurally plausible menus.

use rand::Rng;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{Meal, MealSlot, Menu, Tag};
use crate::search::pool::{draw, PoolStrategy};

/// One food a meal template asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Requirement {
    /// A food whose category contains any alias (English and TACO labels).
    Category(&'static [&'static str]),
    /// A food carrying the tag.
    Tag(Tag),
}

impl Requirement {
    /// Fallback chain: the requirement itself, then the whole catalog.
    pub fn chain(self) -> [PoolStrategy<'static>; 2] {
        let primary = match self {
            Requirement::Category(aliases) => PoolStrategy::CategoryLike(aliases),
            Requirement::Tag(tag) => PoolStrategy::Tagged(tag),
        };
        [primary, PoolStrategy::Any]
    }
}

const FRUITS: Requirement = Requirement::Category(&["fruits", "frutas"]);
const LEGUMES: Requirement = Requirement::Category(&["legumes", "leguminosas"]);
const VEGETABLES: Requirement = Requirement::Category(&["vegetables", "verduras"]);

const BREAKFAST: [Requirement; 3] = [
    FRUITS,
    Requirement::Tag(Tag::Dairy),
    Requirement::Tag(Tag::BreakfastCereal),
];

const LUNCH: [Requirement; 4] = [
    Requirement::Tag(Tag::LunchCarb),
    LEGUMES,
    Requirement::Tag(Tag::Meat),
    VEGETABLES,
];

const SNACK: [Requirement; 2] = [FRUITS, Requirement::Tag(Tag::Dairy)];

const DINNER: [Requirement; 3] = [
    Requirement::Tag(Tag::LunchCarb),
    Requirement::Tag(Tag::Meat),
    VEGETABLES,
];

/// Ordered requirements for a meal slot.
pub fn requirements(slot: MealSlot) -> &'static [Requirement] {
    match slot {
        MealSlot::Breakfast => &BREAKFAST,
        MealSlot::Lunch => &LUNCH,
        MealSlot::Snack => &SNACK,
        MealSlot::Dinner => &DINNER,
    }
}

/// Build one meal: one random food per requirement, in requirement order.
pub fn build_meal<R: Rng + ?Sized>(slot: MealSlot, catalog: &Catalog, rng: &mut R) -> Result<Meal> {
    let foods = requirements(slot)
        .iter()
        .map(|req| draw(catalog, &req.chain(), rng))
        .collect::<Result<Vec<_>>>()?;
    Ok(Meal::new(slot, foods))
}

/// Build a fresh random menu with all four slots filled from their templates.
pub fn build_menu<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Result<Menu> {
    let [breakfast, lunch, snack, dinner] = MealSlot::ALL;
    Ok(Menu::new([
        build_meal(breakfast, catalog, rng)?,
        build_meal(lunch, catalog, rng)?,
        build_meal(snack, catalog, rng)?,
        build_meal(dinner, catalog, rng)?,
    ]))
}
