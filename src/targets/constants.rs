/// Harris-Benedict coefficients (male): intercept, weight, height, age.
pub const BMR_MALE: (f64, f64, f64, f64) = (88.362, 13.397, 4.799, 5.677);

/// Harris-Benedict coefficients (female): intercept, weight, height, age.
pub const BMR_FEMALE: (f64, f64, f64, f64) = (447.593, 9.247, 3.098, 4.330);

/// Share of daily energy from each macro-nutrient.
pub const CARBS_ENERGY_SHARE: f64 = 0.50;
pub const PROTEIN_ENERGY_SHARE: f64 = 0.20;
pub const FATS_ENERGY_SHARE: f64 = 0.30;

/// Energy density in kcal per gram.
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_FATS: f64 = 9.0;

/// Relative half-width of every derived range (±10%).
pub const TARGET_MARGIN: f64 = 0.10;

// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers applied to BMR
// ─────────────────────────────────────────────────────────────────────────────

pub const ACTIVITY_SEDENTARY: f64 = 1.2;
pub const ACTIVITY_LIGHT: f64 = 1.375;
pub const ACTIVITY_MODERATE: f64 = 1.55;
pub const ACTIVITY_INTENSE: f64 = 1.725;
