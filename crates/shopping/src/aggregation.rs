use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use larder_shared::recipe::{IngredientEntry, IngredientUnit};
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// One merged shopping-list row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedLine {
    pub name: String,
    pub unit: Option<IngredientUnit>,
    pub quantity: Option<f64>,
}

impl fmt::Display for AggregatedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.quantity, self.unit) {
            (None, _) => write!(f, "{}", self.name),
            (Some(quantity), Some(unit)) => write!(f, "{} {} {}", quantity, unit.label(), self.name),
            (Some(quantity), None) => write!(f, "{} {}", quantity, self.name),
        }
    }
}

/// Render a line as `"<quantity> <unit label> <name>"`, dropping the parts
/// that are absent. A line without a quantity is just its name.
pub fn format_line(line: &AggregatedLine) -> String {
    line.to_string()
}

/// Merge ingredient entries pooled from any number of recipes
///
/// - Optional entries are dropped before grouping.
/// - Entries group on trimmed, lower-cased name plus unit. The same name in
///   two units stays on two lines.
/// - The first entry of a group fixes its display name and unit.
/// - Quantities are summed. Any entry without a quantity turns the group's
///   quantity into `None`, and it stays `None` whatever follows.
/// - Lines come back sorted by display name, case-insensitively.
///
/// Input is not validated: blank names and negative quantities flow through.
pub fn aggregate(entries: impl IntoIterator<Item = IngredientEntry>) -> Vec<AggregatedLine> {
    let mut groups: HashMap<String, AggregatedLine> = HashMap::new();
    let mut skipped_optional = 0usize;

    for entry in entries {
        if entry.is_optional {
            skipped_optional += 1;
            continue;
        }

        match groups.entry(grouping_key(&entry.name, entry.unit)) {
            Entry::Vacant(slot) => {
                slot.insert(AggregatedLine {
                    name: entry.name,
                    unit: entry.unit,
                    quantity: entry.quantity,
                });
            }
            Entry::Occupied(mut slot) => {
                let line = slot.get_mut();
                line.quantity = match (line.quantity, entry.quantity) {
                    (Some(total), Some(quantity)) => Some(total + quantity),
                    _ => None,
                };
            }
        }
    }

    let mut lines = groups.into_values().collect::<Vec<_>>();

    // Ties on the folded name fall back to accents, unit, then exact name, so
    // the order never depends on input order.
    lines.sort_by_cached_key(|line| {
        (
            collation_key(&line.name),
            line.name.to_lowercase(),
            line.unit,
            line.name.clone(),
        )
    });

    tracing::debug!(
        lines = lines.len(),
        skipped_optional,
        "aggregated ingredients"
    );

    lines
}

fn grouping_key(name: &str, unit: Option<IngredientUnit>) -> String {
    let name = name.trim().to_lowercase();
    match unit {
        Some(unit) => format!("{name}|{unit}"),
        None => format!("{name}|"),
    }
}

/// Primary sort key: case and diacritics folded, so "Ñame" sorts with "name"
/// and "Ají" next to "Ajo".
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_key_normalizes_name_only() {
        assert_eq!(grouping_key("  Olive Oil ", None), "olive oil|");
        assert_eq!(
            grouping_key("FLOUR", Some(IngredientUnit::Gram)),
            "flour|gram"
        );
        assert_eq!(grouping_key("", None), "|");
    }

    #[test]
    fn test_collation_key_folds_case_and_accents() {
        assert_eq!(collation_key("Ñame"), "name");
        assert_eq!(collation_key("AJÍ"), "aji");
        assert_eq!(collation_key("crème fraîche"), "creme fraiche");
    }

    #[test]
    fn test_display_name_keeps_first_seen_spelling() {
        let lines = aggregate(vec![
            IngredientEntry::new(" Garlic ").with_quantity(1.0),
            IngredientEntry::new("garlic").with_quantity(2.0),
        ]);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, " Garlic ");
        assert_eq!(lines[0].quantity, Some(3.0));
    }

    #[test]
    fn test_format_line_variants() {
        let line = AggregatedLine {
            name: "Eggs".to_owned(),
            unit: None,
            quantity: Some(6.0),
        };
        assert_eq!(format_line(&line), "6 Eggs");

        let line = AggregatedLine {
            name: "Milk".to_owned(),
            unit: Some(IngredientUnit::Liter),
            quantity: Some(1.5),
        };
        assert_eq!(format_line(&line), "1.5 l Milk");

        let line = AggregatedLine {
            name: "Pepper".to_owned(),
            unit: None,
            quantity: None,
        };
        assert_eq!(format_line(&line), "Pepper");
    }
}
