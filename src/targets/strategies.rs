use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};
use crate::models::TargetRange;
use crate::targets::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// Weekly exercise level, mapped to a BMR multiplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ActivityLevel {
    Sedentary,
    /// 1-3 sessions per week.
    #[default]
    Light,
    /// 3-5 sessions per week.
    Moderate,
    /// 6-7 sessions per week.
    Intense,
}

impl ActivityLevel {
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => ACTIVITY_SEDENTARY,
            ActivityLevel::Light => ACTIVITY_LIGHT,
            ActivityLevel::Moderate => ACTIVITY_MODERATE,
            ActivityLevel::Intense => ACTIVITY_INTENSE,
        }
    }
}

/// Body measurements used to estimate daily energy needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub sex: Sex,
    pub activity: ActivityLevel,
}

impl BodyMetrics {
    pub fn validate(&self) -> Result<()> {
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(NutriError::InvalidInput(format!(
                "weight must be positive (got {})",
                self.weight_kg
            )));
        }
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(NutriError::InvalidInput(format!(
                "height must be positive (got {})",
                self.height_cm
            )));
        }
        Ok(())
    }
}

/// Basal metabolic rate (kcal/day) from the Harris-Benedict equation.
pub fn basal_metabolic_rate(metrics: &BodyMetrics) -> f64 {
    let (base, w, h, a) = match metrics.sex {
        Sex::Male => BMR_MALE,
        Sex::Female => BMR_FEMALE,
    };
    base + w * metrics.weight_kg + h * metrics.height_cm - a * metrics.age as f64
}

/// Total daily energy expenditure: BMR scaled by activity.
pub fn daily_energy_expenditure(metrics: &BodyMetrics) -> f64 {
    basal_metabolic_rate(metrics) * metrics.activity.factor()
}

fn with_margin(center: f64) -> (f64, f64) {
    (center * (1.0 - TARGET_MARGIN), center * (1.0 + TARGET_MARGIN))
}

/// Targets centered on the estimated daily energy expenditure, split
/// 50/20/30 between carbs, protein and fat, each ±10%.
pub fn from_body_metrics(metrics: &BodyMetrics) -> Result<TargetRange> {
    metrics.validate()?;

    let calories = daily_energy_expenditure(metrics);
    let carbs_g = calories * CARBS_ENERGY_SHARE / KCAL_PER_G_CARBS;
    let protein_g = calories * PROTEIN_ENERGY_SHARE / KCAL_PER_G_PROTEIN;
    let fats_g = calories * FATS_ENERGY_SHARE / KCAL_PER_G_FATS;

    let (min_cal, max_cal) = with_margin(calories);
    let (min_p, max_p) = with_margin(protein_g);
    let (min_c, max_c) = with_margin(carbs_g);
    let (min_f, max_f) = with_margin(fats_g);

    TargetRange::new(min_cal, max_cal, min_p, max_p, min_c, max_c, min_f, max_f)
}

/// Fixed ranges for school-age bands; everyone else gets the adult table.
pub fn for_age_group(age: u32) -> TargetRange {
    let (cal, protein, carbs, fats) = match age {
        4..=5 => ((1300.0, 1400.0), (25.0, 35.0), (170.0, 180.0), (40.0, 60.0)),
        6..=10 => ((1600.0, 1700.0), (40.0, 50.0), (230.0, 240.0), (50.0, 70.0)),
        11..=15 => ((2300.0, 2450.0), (60.0, 70.0), (340.0, 350.0), (60.0, 80.0)),
        _ => return general_adult(),
    };
    table_range(cal, protein, carbs, fats)
}

/// Generic adult ranges.
pub fn general_adult() -> TargetRange {
    table_range((1800.0, 2200.0), (70.0, 100.0), (250.0, 300.0), (60.0, 90.0))
}

// Table values are finite literals, so construction cannot fail.
fn table_range(cal: (f64, f64), protein: (f64, f64), carbs: (f64, f64), fats: (f64, f64)) -> TargetRange {
    TargetRange::new(cal.0, cal.1, protein.0, protein.1, carbs.0, carbs.1, fats.0, fats.1)
        .unwrap_or_else(|e| unreachable!("static target table is invalid: {e}"))
}
