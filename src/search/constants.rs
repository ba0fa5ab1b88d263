use crate::models::Tag;

/// Members drawn (without replacement) for each tournament.
pub const TOURNAMENT_SIZE: usize = 5;

/// Maximum number of menus returned by a search.
pub const RESULT_LIMIT: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Fitness scaling: deviations are divided by these before squaring so that
// nutrients of very different magnitude weigh comparably.
// ─────────────────────────────────────────────────────────────────────────────

pub const CALORIE_DIVISOR: f64 = 100.0;
pub const PROTEIN_DIVISOR: f64 = 10.0;
pub const CARBS_DIVISOR: f64 = 10.0;
pub const FATS_DIVISOR: f64 = 10.0;

// ─────────────────────────────────────────────────────────────────────────────
// Mutation
// ─────────────────────────────────────────────────────────────────────────────

/// Relative weights of the replace, add and remove operators.
pub const REPLACE_WEIGHT: u32 = 3;
pub const ADD_WEIGHT: u32 = 1;
pub const REMOVE_WEIGHT: u32 = 1;

/// Tags checked in order when picking a substitute for a replaced food.
pub const PRIORITY_TAGS: [Tag; 4] = [Tag::Meat, Tag::LunchCarb, Tag::BreakfastCereal, Tag::Dairy];

// ─────────────────────────────────────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_POPULATION_SIZE: usize = 200;
pub const DEFAULT_GENERATIONS: usize = 50;
pub const DEFAULT_MUTATION_RATE: f64 = 0.1;
pub const DEFAULT_ELITE_SIZE: usize = 4;
