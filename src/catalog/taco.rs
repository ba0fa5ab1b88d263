//! Reader for the TACO food composition table exported as CSV.
//!
//! The export is semicolon separated, Latin-1 encoded and has no single
//! header: category names appear as standalone rows above the foods they
//! group, and the column header block is repeated on every printed page.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};

use crate::catalog::tags::{derive_tags, is_unsafe_raw};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{Food, DEFAULT_CATEGORY};

/// Minimum number of cells in a food row.
const MIN_FOOD_CELLS: usize = 9;

const COL_NAME: usize = 1;
const COL_CALORIES: usize = 3;
const COL_PROTEIN: usize = 5;
const COL_FATS: usize = 6;
const COL_CARBS: usize = 8;

/// Parse a TACO numeric cell.
///
/// Comma decimals are accepted; "NA", "*", "Tr" (trace) and blanks count as
/// zero, as does anything unparseable or non-finite ("NaN", "inf").
pub fn clean_number(raw: &str) -> f64 {
    let value = raw.trim();
    match value {
        "" | "NA" | "*" | "Tr" | "tr" => 0.0,
        _ => value
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0),
    }
}

/// Decode a Latin-1 cell. Every byte maps to the code point of equal value.
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn is_column_header(first: &str, second: &str) -> bool {
    second.contains("Descrição dos alimentos") || first.contains("Número do")
}

fn is_header_fragment(first: &str) -> bool {
    ["Número", "Umidade", "Carbo"]
        .iter()
        .any(|k| first.contains(k))
}

/// Outcome of classifying one CSV row.
#[derive(Debug, PartialEq)]
enum Row {
    Skip,
    Category(String),
    Food(Food),
}

fn classify(cells: &[String], current_category: &str) -> Row {
    let first = cells.first().map(|s| s.trim()).unwrap_or("");
    let second = cells.get(1).map(|s| s.trim()).unwrap_or("");

    if is_column_header(first, second) {
        return Row::Skip;
    }

    if !first.is_empty() && !is_all_digits(&first.replace('.', "")) {
        if is_header_fragment(first) {
            return Row::Skip;
        }
        return Row::Category(first.to_string());
    }

    if !is_all_digits(first) || cells.len() < MIN_FOOD_CELLS {
        return Row::Skip;
    }

    let name = cells[COL_NAME].trim().to_string();
    let tags = derive_tags(&name, current_category);
    Row::Food(Food {
        calories: clean_number(&cells[COL_CALORIES]),
        protein: clean_number(&cells[COL_PROTEIN]),
        fats: clean_number(&cells[COL_FATS]),
        carbs: clean_number(&cells[COL_CARBS]),
        category: current_category.to_string(),
        name,
        tags,
    })
}

/// Parse TACO CSV content into foods, dropping unsafe raw items.
pub fn parse_taco<R: Read>(reader: R) -> Result<Vec<Food>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut foods = Vec::new();
    let mut current_category = DEFAULT_CATEGORY.to_string();
    let mut dropped_unsafe = 0usize;
    let mut dropped_invalid = 0usize;
    let mut record = ByteRecord::new();

    while rdr.read_byte_record(&mut record)? {
        let cells: Vec<String> = record.iter().map(latin1).collect();
        if cells.iter().all(|c| c.trim().is_empty()) {
            continue;
        }

        match classify(&cells, &current_category) {
            Row::Skip => {}
            Row::Category(category) => {
                tracing::debug!(category = %category, "entering category");
                current_category = category;
            }
            Row::Food(food) => {
                if is_unsafe_raw(&food.name, &food.category) {
                    dropped_unsafe += 1;
                    continue;
                }
                if !food.is_valid() {
                    tracing::warn!(food = %food.debug_string(), "skipping food with invalid nutrients");
                    dropped_invalid += 1;
                    continue;
                }
                foods.push(food);
            }
        }
    }

    tracing::info!(
        foods = foods.len(),
        dropped_unsafe,
        dropped_invalid,
        "parsed TACO table"
    );
    Ok(foods)
}

/// Load a TACO CSV file into a catalog.
pub fn load_taco_csv<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let file = File::open(path)?;
    Ok(Catalog::new(parse_taco(file)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tag;

    fn encode_latin1(s: &str) -> Vec<u8> {
        s.chars().map(|c| c as u32 as u8).collect()
    }

    const SAMPLE: &str = "\
Número do Alimento;Descrição dos alimentos;Umidade;Energia;Energia;Proteína;Lipídeos;Colesterol;Carboidrato
;;(%);(kcal);(kJ);(g);(g);(mg);(g)
Cereais e derivados;;;;;;;;
1;Arroz, integral, cozido;70,1;124;517;2,6;1,0;NA;25,8
2;Pão, trigo, francês;28,5;300;1255;8,0;3,1;NA;58,6
Carnes e derivados;;;;;;;;
3;Frango, peito, sem pele, grelhado;63,8;159;666;32,0;2,5;89;Tr
4;Frango, peito, sem pele, cru;74,8;119;497;21,5;3,0;59;*
5;linha curta;1
";

    #[test]
    fn test_clean_number() {
        assert_eq!(clean_number("12,5"), 12.5);
        assert_eq!(clean_number(" 300 "), 300.0);
        assert_eq!(clean_number("Tr"), 0.0);
        assert_eq!(clean_number("NA"), 0.0);
        assert_eq!(clean_number("*"), 0.0);
        assert_eq!(clean_number(""), 0.0);
        assert_eq!(clean_number("abc"), 0.0);
        assert_eq!(clean_number("NaN"), 0.0);
        assert_eq!(clean_number("inf"), 0.0);
        assert_eq!(clean_number("-inf"), 0.0);
    }

    #[test]
    fn test_negative_and_non_finite_cells() {
        let csv = "\
Frutas e derivados;;;;;;;;
1;Fruta estranha;1;NaN;0;-5;0;NA;0
2;Fruta infinita;1;inf;0;1,0;0,2;NA;12,0
3;Banana, prata, crua;71,9;98;410;1,3;0,1;NA;26,0
";
        let foods = parse_taco(encode_latin1(csv).as_slice()).unwrap();

        // Negative protein drops the first row; the infinite calories become 0.
        assert_eq!(foods.len(), 2);
        assert_eq!(foods[0].name, "Fruta infinita");
        assert_eq!(foods[0].calories, 0.0);
        assert!(foods.iter().all(|f| f.is_valid()));
        assert_eq!(foods[1].name, "Banana, prata, crua");
    }

    #[test]
    fn test_parse_sample_table() {
        let foods = parse_taco(encode_latin1(SAMPLE).as_slice()).unwrap();

        // Raw chicken is dropped and the short row is ignored.
        assert_eq!(foods.len(), 3);

        let rice = &foods[0];
        assert_eq!(rice.name, "Arroz, integral, cozido");
        assert_eq!(rice.category, "Cereais e derivados");
        assert_eq!(rice.calories, 124.0);
        assert_eq!(rice.protein, 2.6);
        assert_eq!(rice.fats, 1.0);
        assert_eq!(rice.carbs, 25.8);
        assert!(rice.has_tag(Tag::LunchCarb));

        let bread = &foods[1];
        assert!(bread.has_tag(Tag::BreakfastCereal));

        let chicken = &foods[2];
        assert_eq!(chicken.category, "Carnes e derivados");
        assert_eq!(chicken.carbs, 0.0);
        assert!(chicken.has_tag(Tag::Meat));
    }

    #[test]
    fn test_rows_before_any_category_use_default() {
        let csv = "7;Tomate, com semente, cru;95,1;15;63;1,1;0,2;NA;3,1\n";
        let foods = parse_taco(encode_latin1(csv).as_slice()).unwrap();
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].category, DEFAULT_CATEGORY);
    }
}
