//! Keyword rules that assign dietary tags from TACO names and categories.
//!
//! The keywords are Portuguese because they match the TACO table itself.

use crate::models::{Tag, TagSet};

/// Categories whose raw ("cru") items need cooking before they can be eaten.
const UNSAFE_RAW_CATEGORIES: [&str; 6] =
    ["carnes", "pescados", "leguminosas", "ovos", "miúdos", "vísceras"];

const MEAT_CATEGORIES: [&str; 4] = ["carnes", "pescados", "ovos", "vísceras"];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Raw meat, fish, legumes, eggs, offal and raw cassava are excluded from
/// everyday menus.
pub fn is_unsafe_raw(name: &str, category: &str) -> bool {
    let name = name.to_lowercase();
    let category = category.to_lowercase();

    if !name.contains("cru") {
        return false;
    }
    contains_any(&category, &UNSAFE_RAW_CATEGORIES) || name.contains("mandioca")
}

/// Derive the tag set for a catalog row.
pub fn derive_tags(name: &str, category: &str) -> TagSet {
    let name = name.to_lowercase();
    let category = category.to_lowercase();
    let mut tags = TagSet::new();

    if contains_any(&name, &["pão", "bolo", "biscoito", "torrada"])
        || (name.contains("cereal") && name.contains("matinal"))
        || name.contains("mingau")
    {
        tags.insert(Tag::BreakfastCereal);
    }

    if contains_any(&name, &["arroz", "macarrão", "polenta", "milho"]) {
        // Sweet corn dishes are not a main-course carb.
        if !name.contains("curau") && !name.contains("mingau") {
            tags.insert(Tag::LunchCarb);
        }
    } else if (name.contains("farinha") && !name.contains("láctea"))
        || contains_any(&name, &["batata", "mandioca", "inhame", "cará"])
        || contains_any(&name, &["lasanha", "pizza", "pastel"])
    {
        tags.insert(Tag::LunchCarb);
    }

    if contains_any(&category, &MEAT_CATEGORIES) && !is_unsafe_raw(&name, &category) {
        tags.insert(Tag::Meat);
    }

    if category.contains("leite") || name.contains("queijo") || name.contains("iogurte") {
        tags.insert(Tag::Dairy);
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakfast_cereal_keywords() {
        assert!(derive_tags("Pão, trigo, francês", "Cereais e derivados").contains(Tag::BreakfastCereal));
        assert!(derive_tags("Cereal matinal, milho", "Cereais e derivados").contains(Tag::BreakfastCereal));
        assert!(derive_tags("Mingau tradicional", "Cereais e derivados").contains(Tag::BreakfastCereal));
    }

    #[test]
    fn test_lunch_carb_keywords() {
        assert!(derive_tags("Arroz, tipo 1, cozido", "Cereais e derivados").contains(Tag::LunchCarb));
        assert!(derive_tags("Batata, inglesa, cozida", "Verduras, hortaliças e derivados").contains(Tag::LunchCarb));
        assert!(derive_tags("Farinha, de mandioca, torrada", "Cereais").contains(Tag::LunchCarb));
        assert!(!derive_tags("Farinha láctea", "Cereais").contains(Tag::LunchCarb));
        assert!(!derive_tags("Curau, milho verde", "Cereais").contains(Tag::LunchCarb));
    }

    #[test]
    fn test_corn_porridge_is_breakfast_only() {
        let tags = derive_tags("Mingau de milho", "Cereais e derivados");
        assert!(tags.contains(Tag::BreakfastCereal));
        assert!(!tags.contains(Tag::LunchCarb));
    }

    #[test]
    fn test_meat_and_dairy() {
        assert!(derive_tags("Frango, peito, grelhado", "Carnes e derivados").contains(Tag::Meat));
        assert!(derive_tags("Ovo, de galinha, cozido", "Ovos e derivados").contains(Tag::Meat));
        assert!(derive_tags("Leite, de vaca, integral", "Leite e derivados").contains(Tag::Dairy));
        assert!(derive_tags("Pão de queijo", "Cereais e derivados").contains(Tag::Dairy));
    }

    #[test]
    fn test_unsafe_raw() {
        assert!(is_unsafe_raw("Carne, bovina, acém, cru", "Carnes e derivados"));
        assert!(is_unsafe_raw("Feijão, carioca, cru", "Leguminosas e derivados"));
        assert!(is_unsafe_raw("Mandioca, crua", "Verduras, hortaliças e derivados"));
        assert!(!is_unsafe_raw("Tomate, cru", "Verduras, hortaliças e derivados"));
        assert!(!is_unsafe_raw("Carne, bovina, acém, cozido", "Carnes e derivados"));

        let raw_meat = derive_tags("Frango, peito, cru", "Carnes e derivados");
        assert!(!raw_meat.contains(Tag::Meat));
    }
}
