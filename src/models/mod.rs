pub mod food;
pub mod menu;
pub mod targets;

pub use food::{Food, DEFAULT_CATEGORY, FoodId, NutrientTotals, Tag, TagSet};
pub use menu::{Meal, MealSlot, Menu};
pub use targets::TargetRange;
