use std::path::Path;

use anyhow::{Context, Result};
use larder_shared::recipe::{IngredientEntry, IngredientUnit};
use larder_shopping::{AggregatedLine, RecipeBook, build_shopping_list};
use strum::VariantArray;

use crate::config::OutputFormat;

pub fn load_recipe_book(path: &Path) -> Result<RecipeBook> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read recipe book {}", path.display()))?;

    let book = serde_json::from_str::<RecipeBook>(&content)
        .with_context(|| format!("failed to parse recipe book {}", path.display()))?;

    tracing::debug!(recipes = book.recipes.len(), path = %path.display(), "recipe book loaded");

    Ok(book)
}

pub fn shopping_list(book: &RecipeBook, selected: &[String], format: OutputFormat) -> Result<String> {
    let list = build_shopping_list(&book.recipes, selected)?;

    let output = match format {
        OutputFormat::Text => list.formatted().join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(&list)?,
    };

    Ok(output)
}

/// One recipe's ingredients in display order, optional lines marked
pub fn ingredients(book: &RecipeBook, recipe_id: &str) -> Result<String> {
    let Some(recipe) = book.find(recipe_id) else {
        anyhow::bail!("recipe {recipe_id} not found");
    };

    let entries = recipe
        .entries()
        .with_context(|| format!("recipe {recipe_id} has malformed ingredients"))?;

    let lines = IngredientEntry::display_order(entries)
        .into_iter()
        .map(|entry| {
            let mut line = AggregatedLine {
                name: entry.name,
                unit: entry.unit,
                quantity: entry.quantity,
            }
            .to_string();
            if entry.is_optional {
                line.push_str(" (optional)");
            }
            line
        })
        .collect::<Vec<_>>();

    Ok(lines.join("\n"))
}

pub fn units() -> String {
    IngredientUnit::VARIANTS
        .iter()
        .map(|unit| format!("{}\t{}", unit, unit.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_table() {
        let table = units();
        let rows = table.lines().collect::<Vec<_>>();

        assert_eq!(rows.len(), IngredientUnit::VARIANTS.len());
        assert_eq!(rows[0], "gram\tg");
        assert!(rows.contains(&"tablespoon\ttbsp"));
    }
}
