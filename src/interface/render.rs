use std::fmt::Write;

use crate::catalog::Catalog;
use crate::interface::report::{build_reports, MenuReport};
use crate::models::{Menu, TargetRange, Tag};

// Writing into a String cannot fail, so the fmt results below are ignored.

/// Display the ranked result menus with per-meal breakdowns.
pub fn display_menus(menus: &[Menu], catalog: &Catalog, targets: &TargetRange) {
    print!("{}", format_menus(menus, catalog, targets));
}

pub fn format_menus(menus: &[Menu], catalog: &Catalog, targets: &TargetRange) -> String {
    if menus.is_empty() {
        return "No menus found.\n".to_string();
    }

    let mut out = format_targets(targets);
    for report in build_reports(menus, catalog) {
        out.push_str(&format_menu(&report));
    }
    out
}

fn format_menu(report: &MenuReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "=== Menu #{} (fitness {:.4}) ===", report.rank, report.fitness);

    for meal in &report.meals {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} - {:.0} cal | P {:.1}g C {:.1}g F {:.1}g",
            meal.name, meal.totals.calories, meal.totals.protein, meal.totals.carbs, meal.totals.fats
        );
        for food in &meal.foods {
            let _ = writeln!(out, "    - {}", food);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "--- Daily totals ---");
    let _ = writeln!(out, "Calories: {:.0}", report.totals.calories);
    let _ = writeln!(out, "Protein:  {:.1} g", report.totals.protein);
    let _ = writeln!(out, "Carbs:    {:.1} g", report.totals.carbs);
    let _ = writeln!(out, "Fats:     {:.1} g", report.totals.fats);
    out
}

/// Display the nutrient ranges a search aims for.
pub fn display_targets(targets: &TargetRange) {
    print!("{}", format_targets(targets));
}

pub fn format_targets(targets: &TargetRange) -> String {
    let rows = [
        ("Calories", targets.calories(), "kcal"),
        ("Protein", targets.protein(), "g"),
        ("Carbs", targets.carbs(), "g"),
        ("Fats", targets.fats(), "g"),
    ];

    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "=== Daily targets ===");
    for (label, (min, max), unit) in rows {
        let _ = writeln!(out, "{:<9} {:>7.1} - {:>7.1} {}", label, min, max, unit);
    }
    out
}

/// Display food counts per category and per tag.
pub fn display_catalog_summary(catalog: &Catalog) {
    print!("{}", format_catalog_summary(catalog));
}

pub fn format_catalog_summary(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "=== Catalog ({} foods) ===", catalog.len());

    let categories = catalog.category_counts();
    let width = categories.keys().map(|c| c.len()).max().unwrap_or(10);

    let _ = writeln!(out);
    let _ = writeln!(out, "--- Categories ---");
    for (category, count) in &categories {
        let _ = writeln!(out, "  {:<width$}  {:>4}", category, count, width = width);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "--- Tags ---");
    for (tag, count) in catalog.tag_counts() {
        let _ = writeln!(out, "  {:<16}  {:>4}", tag.as_str(), count);
    }
    let _ = writeln!(out);
    out
}

/// Display the foods carrying `tag`.
pub fn display_tagged_foods(catalog: &Catalog, tag: Tag) {
    print!("{}", format_tagged_foods(catalog, tag));
}

pub fn format_tagged_foods(catalog: &Catalog, tag: Tag) -> String {
    let foods: Vec<_> = catalog.foods().iter().filter(|f| f.has_tag(tag)).collect();

    if foods.is_empty() {
        return format!("{}: (none)\n", tag);
    }

    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "=== {} ({} items) ===", tag, foods.len());
    let _ = writeln!(out);

    for food in foods {
        let _ = writeln!(
            out,
            "  {} - {} cal, P:{} C:{} F:{} [{}]",
            food.name, food.calories, food.protein, food.carbs, food.fats, food.category
        );
    }

    let _ = writeln!(out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Food, FoodId, Meal, MealSlot};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Food::new("Banana", 89.0, 1.1, 22.8, 0.3, "Frutas", &[]),
            Food::new("Iogurte", 51.0, 4.1, 1.9, 3.0, "Leite e derivados", &[Tag::Dairy]),
        ])
    }

    fn targets() -> TargetRange {
        TargetRange::new(1800.0, 2200.0, 70.0, 100.0, 250.0, 300.0, 60.0, 90.0).unwrap()
    }

    #[test]
    fn test_empty_results_message() {
        assert_eq!(format_menus(&[], &catalog(), &targets()), "No menus found.\n");
    }

    #[test]
    fn test_menu_lists_meals_and_totals() {
        let catalog = catalog();
        let mut menu = Menu::new(MealSlot::ALL.map(|slot| Meal::new(slot, vec![FoodId(0), FoodId(1)])));
        menu.fitness = 0.5;

        let text = format_menus(&[menu], &catalog, &targets());

        assert!(text.contains("=== Daily targets ==="));
        assert!(text.contains("Calories   1800.0 -  2200.0 kcal"));
        assert!(text.contains("=== Menu #1 (fitness 0.5000) ==="));
        assert!(text.contains("Breakfast - 140 cal"));
        assert!(text.contains("Dinner - 140 cal"));
        assert_eq!(text.matches("    - Iogurte").count(), 4);
        assert!(text.contains("Calories: 560"));
    }

    #[test]
    fn test_catalog_summary_counts() {
        let text = format_catalog_summary(&catalog());
        assert!(text.contains("=== Catalog (2 foods) ==="));
        // Category column is as wide as "Leite e derivados".
        assert!(text.contains(&format!("  {:<17}  {:>4}", "Frutas", 1)));
        assert!(text.contains(&format!("  {:<16}  {:>4}", "DAIRY", 1)));
        assert!(text.contains(&format!("  {:<16}  {:>4}", "MEAT", 0)));
    }

    #[test]
    fn test_tagged_foods() {
        let catalog = catalog();
        let text = format_tagged_foods(&catalog, Tag::Dairy);
        assert!(text.contains("=== DAIRY (1 items) ==="));
        assert!(text.contains("Iogurte - 51 cal, P:4.1 C:1.9 F:3 [Leite e derivados]"));
        assert_eq!(format_tagged_foods(&catalog, Tag::Meat), "MEAT: (none)\n");
    }
}
