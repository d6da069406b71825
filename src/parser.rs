// 🧾 Material Name Parser - Receipt & manual entry
//
// Splits combined "name + amount" strings ("두부 120g(1/3모)") into the two
// fields the material-creation API expects. This is a line heuristic, not a
// grammar: any digit, "(" or unit word marks the string as carrying a
// quantity, and the first whitespace run is the split point.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use crate::entities::{CategoryId, Ingredient};
use crate::resolver::IngredientResolver;

/// Unit words that mark a quantity even without digits
pub const UNIT_TOKENS: &[&str] = &["kg", "g", "ml", "L", "개", "큰술", "작은술", "스푼", "컵"];

static QUANTITY_SIGNAL: LazyLock<Regex> = LazyLock::new(|| {
    let units = UNIT_TOKENS
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"[0-9(]|{}", units)).expect("quantity pattern should compile")
});

// ============================================================================
// MATERIAL NAME
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialName {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

impl MaterialName {
    fn bare(name: &str) -> Self {
        MaterialName {
            name: name.to_string(),
            amount: None,
        }
    }
}

/// Does the string look like it carries a quantity?
pub fn has_quantity(raw: &str) -> bool {
    QUANTITY_SIGNAL.is_match(raw)
}

/// Split a combined string into name and amount.
///
/// - quantity signal + whitespace: first token is the name, the rest
///   (single-spaced) is the amount
/// - quantity signal, single token ("소금1kg"): whole string is the name
/// - no quantity signal: whole string is the name
///
/// Outer whitespace is trimmed first. The returned name never re-splits:
/// it is either whitespace-free or carried no quantity signal to begin with.
pub fn parse_material_name(raw: &str) -> MaterialName {
    let trimmed = raw.trim();

    if !has_quantity(trimmed) {
        return MaterialName::bare(trimmed);
    }

    let mut tokens = trimmed.split_whitespace();
    let Some(name) = tokens.next() else {
        return MaterialName::bare(trimmed);
    };

    let rest: Vec<&str> = tokens.collect();
    if rest.is_empty() {
        return MaterialName::bare(trimmed);
    }

    MaterialName {
        name: name.to_string(),
        amount: Some(rest.join(" ")),
    }
}

/// One material per non-empty line (pasted OCR text or manual list)
pub fn parse_receipt_lines(text: &str) -> Vec<MaterialName> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_material_name)
        .collect()
}

// ============================================================================
// RECEIPT CSV
// ============================================================================

#[derive(Debug, Deserialize)]
struct ReceiptRow {
    item: String,
    #[serde(default)]
    category: Option<String>,
}

/// A parsed receipt line, ready to become an ingredient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptItem {
    pub line_number: usize,
    pub material: MaterialName,

    /// Category printed on or assigned to the receipt line, if any
    pub category: Option<CategoryId>,
}

impl ReceiptItem {
    /// Build the ingredient draft sent to the material-creation API
    pub fn into_ingredient(self, resolver: &IngredientResolver, added_on: NaiveDate) -> Ingredient {
        let mut draft = Ingredient::new(self.material.name).with_added_at(added_on);
        draft.category = self.category;
        draft.quantity = self.material.amount;
        resolver.enrich(&draft)
    }
}

/// Read receipt rows from any CSV source with an `item` column
pub fn read_receipt_csv<R: Read>(reader: R) -> Result<Vec<ReceiptItem>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr
        .headers()
        .context("Failed to read receipt CSV header")?
        .clone();
    let mut items = Vec::new();

    for result in rdr.records() {
        let record = result.context("Failed to read receipt CSV record")?;
        // physical line where the record starts; blank lines and quoted newlines count
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);

        let row: ReceiptRow = record
            .deserialize(Some(&headers))
            .with_context(|| format!("Failed to parse receipt line {}", line))?;

        if row.item.trim().is_empty() {
            continue;
        }

        let category = row
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .map(CategoryId::from);

        items.push(ReceiptItem {
            line_number: line,
            material: parse_material_name(&row.item),
            category,
        });
    }

    Ok(items)
}

/// Load receipt rows from a CSV file
pub fn load_receipt_csv(csv_path: &Path) -> Result<Vec<ReceiptItem>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open receipt CSV: {:?}", csv_path))?;
    read_receipt_csv(file)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn split(name: &str, amount: Option<&str>) -> MaterialName {
        MaterialName {
            name: name.to_string(),
            amount: amount.map(str::to_string),
        }
    }

    #[test]
    fn test_name_with_amount() {
        assert_eq!(parse_material_name("두부 120g(1/3모)"), split("두부", Some("120g(1/3모)")));
    }

    #[test]
    fn test_name_without_quantity() {
        assert_eq!(parse_material_name("냉스프"), split("냉스프", None));
    }

    #[test]
    fn test_glued_quantity_stays_in_name() {
        assert_eq!(parse_material_name("소금1kg"), split("소금1kg", None));
    }

    #[test]
    fn test_multiple_amount_tokens_are_single_spaced() {
        assert_eq!(
            parse_material_name("간장  2큰술   (진간장)"),
            split("간장", Some("2큰술 (진간장)"))
        );
    }

    #[test]
    fn test_unit_word_without_digits() {
        assert!(has_quantity("설탕 약간 1컵"));
        assert!(has_quantity("버터 한 스푼"));
        assert_eq!(parse_material_name("양파 반개"), split("양파", Some("반개")));
    }

    #[test]
    fn test_spaced_name_without_quantity_is_kept() {
        assert_eq!(parse_material_name("다진 마늘"), split("다진 마늘", None));
    }

    #[test]
    fn test_outer_whitespace_trimmed() {
        assert_eq!(parse_material_name("  우유 1L \n"), split("우유", Some("1L")));
        assert_eq!(parse_material_name("   "), split("", None));
    }

    #[test]
    fn test_digits_in_product_name_are_treated_as_quantity() {
        // Known limitation of the heuristic
        assert_eq!(parse_material_name("비타500 음료"), split("비타500", Some("음료")));
    }

    #[test]
    fn test_latin_name_with_g_is_treated_as_quantity() {
        // "g" is a unit token, so any Latin word containing it signals a quantity
        assert!(has_quantity("Greek yogurt"));
        assert_eq!(parse_material_name("Greek yogurt"), split("Greek", Some("yogurt")));
    }

    #[test]
    fn test_parse_is_idempotent_on_name() {
        let samples = [
            "두부 120g(1/3모)",
            "냉스프",
            "소금1kg",
            "다진 마늘",
            "다진 마늘 1큰술",
            "  우유 1L ",
            "(국산) 콩나물 300g",
            "계란 10개",
            "비타500 음료",
            "",
            "버터 한 스푼",
            "sugar 2 cups",
        ];

        for raw in samples {
            let first = parse_material_name(raw);
            let second = parse_material_name(&first.name);
            assert_eq!(second.name, first.name, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_parse_receipt_lines_skips_blanks() {
        let parsed = parse_receipt_lines("두부 1모\n\n  \n냉스프\n소고기 600g\n");
        assert_eq!(
            parsed,
            vec![
                split("두부", Some("1모")),
                split("냉스프", None),
                split("소고기", Some("600g")),
            ]
        );
    }

    #[test]
    fn test_read_receipt_csv() {
        let data = "item,category\n두부 1모,dairy_processed\n냉스프,\n,meat\n사과 3개,fruit\n";
        let items = read_receipt_csv(data.as_bytes()).unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].line_number, 2);
        assert_eq!(items[0].material, split("두부", Some("1모")));
        assert_eq!(items[0].category, Some(CategoryId::DairyProcessed));
        assert_eq!(items[1].category, None);
        assert_eq!(items[2].line_number, 5);
        assert_eq!(items[2].category, Some(CategoryId::Fruit));
    }

    #[test]
    fn test_read_receipt_csv_blank_line_keeps_file_lines() {
        let data = "item,category\n두부 1모,dairy_processed\n\n사과 3개,fruit\n";
        let items = read_receipt_csv(data.as_bytes()).unwrap();

        let lines: Vec<usize> = items.iter().map(|i| i.line_number).collect();
        assert_eq!(lines, vec![2, 4]);
    }

    #[test]
    fn test_read_receipt_csv_quoted_newline_keeps_file_lines() {
        let data = "item,category\n\"두부\n1모\",dairy_processed\n사과 3개,fruit\n";
        let items = read_receipt_csv(data.as_bytes()).unwrap();

        let lines: Vec<usize> = items.iter().map(|i| i.line_number).collect();
        assert_eq!(lines, vec![2, 4]);
        assert_eq!(items[0].material, split("두부", Some("1모")));
    }

    #[test]
    fn test_read_receipt_csv_item_only() {
        let data = "item\n간장 500ml\n";
        let items = read_receipt_csv(data.as_bytes()).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].material, split("간장", Some("500ml")));
        assert!(items[0].category.is_none());
    }

    #[test]
    fn test_read_receipt_csv_missing_column() {
        let data = "name\n두부\n";
        assert!(read_receipt_csv(data.as_bytes()).is_err());
    }

    #[test]
    fn test_load_receipt_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "item,category").unwrap();
        writeln!(file, "소고기 600g,meat").unwrap();

        let items = load_receipt_csv(file.path()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].material.name, "소고기");
    }

    #[test]
    fn test_receipt_item_into_ingredient() {
        let resolver = IngredientResolver::builtin();
        let added_on = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let item = ReceiptItem {
            line_number: 2,
            material: split("소고기", Some("600g")),
            category: None,
        };
        let ingredient = item.into_ingredient(&resolver, added_on);

        assert_eq!(ingredient.name, "소고기");
        assert_eq!(ingredient.quantity.as_deref(), Some("600g"));
        assert_eq!(ingredient.category, Some(CategoryId::Meat));
        assert_eq!(ingredient.icon_id.as_deref(), Some("beef"));
        assert_eq!(ingredient.added_at, Some(added_on));
        assert_eq!(ingredient.expires_on, NaiveDate::from_ymd_opt(2024, 3, 4));
    }
}
