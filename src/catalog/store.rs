use std::collections::BTreeMap;

use crate::models::{Food, FoodId, Tag};

/// Immutable arena of foods available to a search run.
///
/// Foods are addressed by [`FoodId`], their position in the arena, so menus
/// can be cloned freely without aliasing any food.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    foods: Vec<Food>,
}

impl Catalog {
    pub fn new(foods: Vec<Food>) -> Self {
        Self { foods }
    }

    /// Look up a food by id.
    ///
    /// Ids are only ever produced by this catalog, so an out-of-range id is a
    /// programming error and panics like slice indexing.
    #[inline]
    pub fn food(&self, id: FoodId) -> &Food {
        &self.foods[id.index()]
    }

    pub fn get(&self, id: FoodId) -> Option<&Food> {
        self.foods.get(id.index())
    }

    /// Find a food by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<FoodId> {
        let needle = name.to_lowercase();
        self.foods
            .iter()
            .position(|f| f.name.to_lowercase() == needle)
            .map(FoodId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FoodId, &Food)> {
        self.foods.iter().enumerate().map(|(i, f)| (FoodId(i), f))
    }

    pub fn ids(&self) -> impl Iterator<Item = FoodId> {
        (0..self.foods.len()).map(FoodId)
    }

    /// Ids of all foods matching a predicate, in catalog order.
    pub fn ids_where<P>(&self, mut predicate: P) -> Vec<FoodId>
    where
        P: FnMut(&Food) -> bool,
    {
        self.iter()
            .filter(|(_, f)| predicate(f))
            .map(|(id, _)| id)
            .collect()
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Food count per category, sorted by category name.
    pub fn category_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for food in &self.foods {
            *counts.entry(food.category.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Food count per tag, in vocabulary order.
    pub fn tag_counts(&self) -> Vec<(Tag, usize)> {
        Tag::ALL
            .into_iter()
            .map(|tag| (tag, self.foods.iter().filter(|f| f.has_tag(tag)).count()))
            .collect()
    }
}

impl From<Vec<Food>> for Catalog {
    fn from(foods: Vec<Food>) -> Self {
        Self::new(foods)
    }
}
