use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{Menu, NutrientTotals, TargetRange};

/// Round a float to n decimal places.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientReport {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl From<NutrientTotals> for NutrientReport {
    fn from(t: NutrientTotals) -> Self {
        Self {
            calories: round_to(t.calories, 1),
            protein: round_to(t.protein, 1),
            carbs: round_to(t.carbs, 1),
            fats: round_to(t.fats, 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealReport {
    pub name: &'static str,
    pub foods: Vec<String>,
    pub totals: NutrientReport,
}

/// A menu resolved against its catalog, ready for printing or JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuReport {
    pub rank: usize,
    pub fitness: f64,
    pub meals: Vec<MealReport>,
    pub totals: NutrientReport,
}

impl MenuReport {
    pub fn new(rank: usize, menu: &Menu, catalog: &Catalog) -> Self {
        let meals = menu
            .meals()
            .iter()
            .map(|meal| MealReport {
                name: meal.name(),
                foods: meal
                    .foods
                    .iter()
                    .map(|&id| catalog.food(id).name.clone())
                    .collect(),
                totals: meal.totals(catalog).into(),
            })
            .collect();

        Self {
            rank,
            fitness: round_to(menu.fitness, 4),
            meals,
            totals: menu.totals(catalog).into(),
        }
    }
}

/// Reports for a best-first result list, ranked from 1.
pub fn build_reports(menus: &[Menu], catalog: &Catalog) -> Vec<MenuReport> {
    menus
        .iter()
        .enumerate()
        .map(|(i, menu)| MenuReport::new(i + 1, menu, catalog))
        .collect()
}

/// Serialize the targets and ranked menus as pretty JSON.
pub fn results_json(menus: &[Menu], catalog: &Catalog, targets: &TargetRange) -> Result<String> {
    let json = serde_json::json!({
        "targets": targets,
        "menus": build_reports(menus, catalog),
    });
    Ok(serde_json::to_string_pretty(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Food, FoodId, Meal, MealSlot};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Food::new("Banana", 89.0, 1.1, 22.8, 0.3, "Fruits", &[]),
            Food::new("Oats", 389.0, 16.9, 66.3, 6.9, "Cereals", &[]),
        ])
    }

    fn menu() -> Menu {
        let mut menu = Menu::new([
            Meal::new(MealSlot::Breakfast, vec![FoodId(0), FoodId(1)]),
            Meal::new(MealSlot::Lunch, vec![FoodId(1)]),
            Meal::new(MealSlot::Snack, vec![FoodId(0)]),
            Meal::new(MealSlot::Dinner, vec![FoodId(1)]),
        ]);
        menu.fitness = 0.123456;
        menu
    }

    #[test]
    fn test_report_resolves_names_and_totals() {
        let catalog = catalog();
        let report = MenuReport::new(1, &menu(), &catalog);

        assert_eq!(report.meals.len(), 4);
        assert_eq!(report.meals[0].name, "Breakfast");
        assert_eq!(report.meals[0].foods, vec!["Banana", "Oats"]);
        assert_eq!(report.meals[0].totals.calories, 478.0);
        assert_eq!(report.totals.calories, 89.0 * 2.0 + 389.0 * 3.0);
        assert_eq!(report.fitness, 0.1235);
    }

    #[test]
    fn test_results_json_shape() {
        let catalog = catalog();
        let targets = TargetRange::new(0.0, 2000.0, 0.0, 100.0, 0.0, 300.0, 0.0, 80.0).unwrap();
        let json = results_json(&[menu()], &catalog, &targets).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["menus"].as_array().unwrap().len(), 1);
        assert_eq!(value["menus"][0]["rank"], 1);
        assert_eq!(value["menus"][0]["meals"][3]["name"], "Dinner");
        assert_eq!(value["targets"]["max_calories"], 2000.0);
    }
}
