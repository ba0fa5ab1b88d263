pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod search;
pub mod targets;

pub use catalog::Catalog;
pub use error::{NutriError, Result};
pub use models::{Food, FoodId, Meal, MealSlot, Menu, Tag, TargetRange};
pub use search::{SearchConfig, SearchEngine};
