pub mod constants;
pub mod strategies;

pub use strategies::{
    basal_metabolic_rate, daily_energy_expenditure, for_age_group, from_body_metrics,
    general_adult, ActivityLevel, BodyMetrics, Sex,
};
