//! Candidate pools for random food draws.
//!
//! A draw walks an ordered chain of [`PoolStrategy`] tiers and samples from
//! the first tier that yields at least one food.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::Catalog;
use crate::error::{NutriError, Result};
use crate::models::{Food, FoodId, Tag};

/// One tier of a fallback chain.
#[derive(Debug, Clone, PartialEq)]
pub enum PoolStrategy<'a> {
    /// Foods whose category contains any of the aliases (case-insensitive).
    CategoryLike(&'a [&'a str]),
    /// Foods whose category equals the given label exactly.
    CategoryExact(&'a str),
    /// Foods carrying the tag.
    Tagged(Tag),
    /// The whole catalog.
    Any,
}

impl PoolStrategy<'_> {
    pub fn matches(&self, food: &Food) -> bool {
        match self {
            PoolStrategy::CategoryLike(aliases) => {
                let category = food.category.to_lowercase();
                aliases
                    .iter()
                    .any(|alias| category.contains(&alias.to_lowercase()))
            }
            PoolStrategy::CategoryExact(category) => food.category == *category,
            PoolStrategy::Tagged(tag) => food.has_tag(*tag),
            PoolStrategy::Any => true,
        }
    }

    pub fn pool(&self, catalog: &Catalog) -> Vec<FoodId> {
        match self {
            PoolStrategy::Any => catalog.ids().collect(),
            _ => catalog.ids_where(|f| self.matches(f)),
        }
    }
}

/// The first non-empty pool along the chain.
pub fn resolve_pool(catalog: &Catalog, chain: &[PoolStrategy<'_>]) -> Result<Vec<FoodId>> {
    chain
        .iter()
        .map(|strategy| strategy.pool(catalog))
        .find(|pool| !pool.is_empty())
        .ok_or_else(|| {
            NutriError::EmptyPool(format!(
                "all {} tiers empty (catalog has {} foods)",
                chain.len(),
                catalog.len()
            ))
        })
}

/// Draw one food uniformly from the first non-empty pool along the chain.
pub fn draw<R: Rng + ?Sized>(
    catalog: &Catalog,
    chain: &[PoolStrategy<'_>],
    rng: &mut R,
) -> Result<FoodId> {
    let pool = resolve_pool(catalog, chain)?;
    pool.choose(rng)
        .copied()
        .ok_or_else(|| NutriError::EmptyPool("resolved pool is empty".to_string()))
}
