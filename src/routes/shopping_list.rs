use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use larder_shared::recipe::IngredientUnit;
use larder_shopping::{RecipeIngredients, ShoppingList, build_shopping_list};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{error::AppError, routes::AppState};

#[derive(Debug, Deserialize, Validate)]
pub struct ShoppingListInput {
    #[validate(length(min = 1, message = "at least one recipe is required"))]
    pub recipes: Vec<RecipeIngredients>,
    #[serde(default)]
    pub selected: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ShoppingListLine {
    pub name: String,
    pub unit: Option<IngredientUnit>,
    pub quantity: Option<f64>,
    pub display: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ShoppingListResponse {
    pub recipes: Vec<String>,
    pub lines: Vec<ShoppingListLine>,
}

impl From<ShoppingList> for ShoppingListResponse {
    fn from(list: ShoppingList) -> Self {
        let lines = list
            .lines
            .into_iter()
            .map(|line| ShoppingListLine {
                display: line.to_string(),
                name: line.name,
                unit: line.unit,
                quantity: line.quantity,
            })
            .collect();

        Self {
            recipes: list.recipes,
            lines,
        }
    }
}

/// POST /api/shopping-list
pub async fn action(
    State(app): State<AppState>,
    payload: Result<Json<ShoppingListInput>, JsonRejection>,
) -> Result<Json<ShoppingListResponse>, AppError> {
    let Json(input) = payload?;
    let list = build(&input, app.config.shopping.max_recipes)?;

    Ok(Json(list.into()))
}

fn build(input: &ShoppingListInput, max_recipes: usize) -> larder_shared::Result<ShoppingList> {
    input.validate()?;

    if input.recipes.len() > max_recipes {
        larder_shared::bail!(
            "too many recipes: {} (at most {})",
            input.recipes.len(),
            max_recipes
        );
    }

    Ok(build_shopping_list(&input.recipes, &input.selected)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(recipes: usize) -> ShoppingListInput {
        ShoppingListInput {
            recipes: (0..recipes)
                .map(|i| RecipeIngredients {
                    id: format!("r{i}"),
                    title: String::new(),
                    ingredients: json!(["Salt"]),
                })
                .collect(),
            selected: Vec::new(),
        }
    }

    #[test]
    fn test_build_rejects_empty_request() {
        let err = build(&input(0), 5).unwrap_err();
        assert!(matches!(err, larder_shared::Error::Validate(_)));
    }

    #[test]
    fn test_build_rejects_too_many_recipes() {
        let err = build(&input(6), 5).unwrap_err();
        assert!(matches!(err, larder_shared::Error::BadRequest(_)));
        assert_eq!(err.to_string(), "too many recipes: 6 (at most 5)");
    }

    #[test]
    fn test_build_accepts_limit() {
        let list = build(&input(5), 5).unwrap();
        assert_eq!(list.recipes.len(), 5);
        assert_eq!(list.formatted(), vec!["Salt"]);
    }
}
