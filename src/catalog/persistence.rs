use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{Food, Tag, DEFAULT_CATEGORY};

/// On-disk food entry. Tags stay strings until validated so an unknown name
/// surfaces as [`NutriError::UnknownTag`](crate::error::NutriError::UnknownTag).
#[derive(Debug, Deserialize)]
struct FoodRecord {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Calories")]
    calories: f64,
    #[serde(rename = "Protein")]
    protein: f64,
    #[serde(rename = "Carbs")]
    carbs: f64,
    #[serde(rename = "Fats")]
    fats: f64,
    #[serde(rename = "Category")]
    category: Option<String>,
    #[serde(rename = "Tags", default)]
    tags: Vec<String>,
}

impl FoodRecord {
    fn into_food(self) -> Result<Food> {
        let tags = self
            .tags
            .iter()
            .map(|t| t.parse::<Tag>())
            .collect::<Result<Vec<_>>>()?;
        Ok(Food::new(
            self.name,
            self.calories,
            self.protein,
            self.carbs,
            self.fats,
            self.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            &tags,
        ))
    }
}

/// Keep one food per lowercase name. The last occurrence wins but takes the
/// position of the first, so catalog order stays stable.
fn dedup_by_name(foods: Vec<Food>) -> Vec<Food> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<Food> = Vec::with_capacity(foods.len());

    for food in foods {
        let key = food.name.to_lowercase();
        match positions.get(&key) {
            Some(&idx) => unique[idx] = food,
            None => {
                positions.insert(key, unique.len());
                unique.push(food);
            }
        }
    }

    unique
}

/// Load a catalog from a JSON array of foods.
///
/// Foods with negative or non-finite nutrients are skipped.
pub fn load_catalog_json<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let records: Vec<FoodRecord> = serde_json::from_str(&content)?;
    let foods = records
        .into_iter()
        .map(FoodRecord::into_food)
        .collect::<Result<Vec<_>>>()?;

    let (valid, invalid): (Vec<Food>, Vec<Food>) =
        dedup_by_name(foods).into_iter().partition(Food::is_valid);
    for food in &invalid {
        tracing::warn!(food = %food.debug_string(), "skipping food with invalid nutrients");
    }

    Ok(Catalog::new(valid))
}

/// Save a catalog as a pretty-printed JSON array.
pub fn save_catalog_json<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog.foods())?;
    fs::write(path, json)?;
    Ok(())
}
