use std::collections::HashSet;

use larder_shared::recipe::IngredientEntry;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::aggregation::{AggregatedLine, aggregate};
use crate::payload::{IngredientPayload, PayloadError};

#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("recipe {0} not found")]
    UnknownRecipe(String),

    #[error("recipe {recipe} has malformed ingredients: {source}")]
    Payload {
        recipe: String,
        #[source]
        source: PayloadError,
    },
}

impl From<ShoppingListError> for larder_shared::Error {
    fn from(value: ShoppingListError) -> Self {
        match value {
            ShoppingListError::UnknownRecipe(id) => Self::NotFound(format!("recipe {id}")),
            err @ ShoppingListError::Payload { .. } => Self::BadRequest(err.to_string()),
        }
    }
}

/// A recipe as handed over by the data layer, ingredients still raw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredients {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub ingredients: Value,
}

impl RecipeIngredients {
    pub fn entries(&self) -> Result<Vec<IngredientEntry>, PayloadError> {
        Ok(IngredientPayload::from_value(&self.ingredients)?.into_entries())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeBook {
    pub recipes: Vec<RecipeIngredients>,
}

impl RecipeBook {
    pub fn find(&self, id: &str) -> Option<&RecipeIngredients> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShoppingList {
    pub recipes: Vec<String>,
    pub lines: Vec<AggregatedLine>,
}

impl ShoppingList {
    pub fn formatted(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }
}

/// Build a shopping list from the selected recipes.
///
/// An empty selection means every recipe. Selected ids are deduplicated so
/// picking a recipe twice does not double its ingredients.
#[tracing::instrument(skip_all, fields(recipes = recipes.len(), selected = selected.len()))]
pub fn build_shopping_list(
    recipes: &[RecipeIngredients],
    selected: &[String],
) -> Result<ShoppingList, ShoppingListError> {
    let chosen = if selected.is_empty() {
        recipes.iter().collect::<Vec<_>>()
    } else {
        let mut seen = HashSet::new();
        selected
            .iter()
            .filter(|id| seen.insert(*id))
            .map(|id| {
                recipes
                    .iter()
                    .find(|recipe| &recipe.id == id)
                    .ok_or_else(|| ShoppingListError::UnknownRecipe(id.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut entries = Vec::new();
    for recipe in &chosen {
        let recipe_entries = recipe
            .entries()
            .map_err(|source| ShoppingListError::Payload {
                recipe: recipe.id.to_owned(),
                source,
            })?;

        entries.extend(recipe_entries);
    }

    let lines = aggregate(entries);

    tracing::info!(lines = lines.len(), "shopping list built");

    Ok(ShoppingList {
        recipes: chosen.iter().map(|recipe| recipe.id.to_owned()).collect(),
        lines,
    })
}
