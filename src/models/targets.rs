use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};

/// Inclusive min/max bounds for calories and the three macro-nutrients.
///
/// A bound pair with `min > max` is accepted; that nutrient can then never
/// be "in range".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetRange {
    min_calories: f64,
    max_calories: f64,
    min_protein: f64,
    max_protein: f64,
    min_carbs: f64,
    max_carbs: f64,
    min_fats: f64,
    max_fats: f64,
}

impl TargetRange {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        min_calories: f64,
        max_calories: f64,
        min_protein: f64,
        max_protein: f64,
        min_carbs: f64,
        max_carbs: f64,
        min_fats: f64,
        max_fats: f64,
    ) -> Result<Self> {
        let range = Self {
            min_calories,
            max_calories,
            min_protein,
            max_protein,
            min_carbs,
            max_carbs,
            min_fats,
            max_fats,
        };
        range.validate()?;
        Ok(range)
    }

    /// All eight bounds must be finite.
    pub fn validate(&self) -> Result<()> {
        let bounds = [
            ("calories", self.min_calories, self.max_calories),
            ("protein", self.min_protein, self.max_protein),
            ("carbs", self.min_carbs, self.max_carbs),
            ("fats", self.min_fats, self.max_fats),
        ];
        for (name, min, max) in bounds {
            if !min.is_finite() || !max.is_finite() {
                return Err(NutriError::Configuration(format!(
                    "{} bounds must be finite (got {}..{})",
                    name, min, max
                )));
            }
        }
        Ok(())
    }

    pub fn calories(&self) -> (f64, f64) {
        (self.min_calories, self.max_calories)
    }

    pub fn protein(&self) -> (f64, f64) {
        (self.min_protein, self.max_protein)
    }

    pub fn carbs(&self) -> (f64, f64) {
        (self.min_carbs, self.max_carbs)
    }

    pub fn fats(&self) -> (f64, f64) {
        (self.min_fats, self.max_fats)
    }
}
