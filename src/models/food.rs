use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NutriError;

/// Dietary role label attached to a food at ingestion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tag {
    BreakfastCereal,
    LunchCarb,
    Meat,
    Dairy,
}

impl Tag {
    pub const ALL: [Tag; 4] = [Tag::BreakfastCereal, Tag::LunchCarb, Tag::Meat, Tag::Dairy];

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::BreakfastCereal => "BREAKFAST_CEREAL",
            Tag::LunchCarb => "LUNCH_CARB",
            Tag::Meat => "MEAT",
            Tag::Dairy => "DAIRY",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Tag::BreakfastCereal => 1,
            Tag::LunchCarb => 1 << 1,
            Tag::Meat => 1 << 2,
            Tag::Dairy => 1 << 3,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = NutriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NutriError::UnknownTag(s.to_string()))
    }
}

/// Small bitset over the closed [`Tag`] vocabulary.
///
/// Serializes as a list of tag names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Tag>", into = "Vec<Tag>")]
pub struct TagSet(u8);

impl TagSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, tag: Tag) {
        self.0 |= tag.bit();
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.0 & tag.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Tags in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        Tag::ALL.into_iter().filter(move |t| self.contains(*t))
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl From<Vec<Tag>> for TagSet {
    fn from(tags: Vec<Tag>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagSet> for Vec<Tag> {
    fn from(set: TagSet) -> Self {
        set.iter().collect()
    }
}

/// Stable index of a food inside its [`Catalog`](crate::catalog::Catalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(pub usize);

impl FoodId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Calories and macro-nutrients, either for one food or summed over many.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Add for NutrientTotals {
    type Output = NutrientTotals;

    fn add(self, rhs: Self) -> Self::Output {
        NutrientTotals {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fats: self.fats + rhs.fats,
        }
    }
}

impl Sum for NutrientTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientTotals::default(), Add::add)
    }
}

/// A food item with nutritional data per reference serving.
///
/// Foods are created once when the catalog is loaded and never mutated
/// afterwards; menus refer to them by [`FoodId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Calories")]
    pub calories: f64,

    #[serde(rename = "Protein")]
    pub protein: f64,

    #[serde(rename = "Carbs")]
    pub carbs: f64,

    #[serde(rename = "Fats")]
    pub fats: f64,

    #[serde(rename = "Category", default = "default_category")]
    pub category: String,

    #[serde(rename = "Tags", default)]
    pub tags: TagSet,
}

/// Category assigned when the source gives none.
pub const DEFAULT_CATEGORY: &str = "Geral";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Food {
    pub fn new(
        name: impl Into<String>,
        calories: f64,
        protein: f64,
        carbs: f64,
        fats: f64,
        category: impl Into<String>,
        tags: &[Tag],
    ) -> Self {
        Self {
            name: name.into(),
            calories,
            protein,
            carbs,
            fats,
            category: category.into(),
            tags: tags.iter().copied().collect(),
        }
    }

    #[inline]
    pub fn nutrients(&self) -> NutrientTotals {
        NutrientTotals {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fats: self.fats,
        }
    }

    #[inline]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Non-negative, finite nutrient values.
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fats]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({} - {} kcal, P:{} C:{} F:{})",
            self.name, self.category, self.calories, self.protein, self.carbs, self.fats
        )
    }
}
