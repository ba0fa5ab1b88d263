pub mod render;
pub mod report;

pub use render::{
    display_catalog_summary, display_menus, display_tagged_foods, display_targets,
    format_catalog_summary, format_menus, format_tagged_foods, format_targets,
};
pub use report::{build_reports, results_json, MealReport, MenuReport, NutrientReport};
