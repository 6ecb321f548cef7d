use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Unit of measure attached to an ingredient line.
///
/// Variant order matters: it is the tiebreaker when two shopping-list lines
/// share a display name.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum IngredientUnit {
    #[strum(to_string = "gram", serialize = "g", serialize = "grams")]
    #[serde(alias = "g", alias = "grams")]
    Gram,
    #[strum(to_string = "kilogram", serialize = "kg", serialize = "kilograms")]
    #[serde(alias = "kg", alias = "kilograms")]
    Kilogram,
    #[strum(to_string = "milliliter", serialize = "ml", serialize = "milliliters")]
    #[serde(alias = "ml", alias = "milliliters")]
    Milliliter,
    #[strum(to_string = "liter", serialize = "l", serialize = "liters")]
    #[serde(alias = "l", alias = "liters")]
    Liter,
    #[strum(to_string = "teaspoon", serialize = "tsp", serialize = "teaspoons")]
    #[serde(alias = "tsp", alias = "teaspoons")]
    Teaspoon,
    #[strum(to_string = "tablespoon", serialize = "tbsp", serialize = "tablespoons")]
    #[serde(alias = "tbsp", alias = "tablespoons")]
    Tablespoon,
    #[strum(to_string = "cup", serialize = "cups")]
    #[serde(alias = "cups")]
    Cup,
    #[strum(to_string = "piece", serialize = "pc", serialize = "pieces")]
    #[serde(alias = "pc", alias = "pieces")]
    Piece,
    #[strum(to_string = "pinch", serialize = "pinches")]
    #[serde(alias = "pinches")]
    Pinch,
    #[strum(to_string = "other")]
    Other,
}

impl IngredientUnit {
    /// Short label used when rendering a shopping-list row.
    pub const fn label(&self) -> &'static str {
        match self {
            IngredientUnit::Gram => "g",
            IngredientUnit::Kilogram => "kg",
            IngredientUnit::Milliliter => "ml",
            IngredientUnit::Liter => "l",
            IngredientUnit::Teaspoon => "tsp",
            IngredientUnit::Tablespoon => "tbsp",
            IngredientUnit::Cup => "cup",
            IngredientUnit::Piece => "pc",
            IngredientUnit::Pinch => "pinch",
            IngredientUnit::Other => "other",
        }
    }

    /// Parses free text such as `" Tbsp "` or `"grams"`.
    ///
    /// Blank text means "no unit" and yields `Ok(None)`. Text that matches no
    /// known unit is returned as the error so callers can decide how to
    /// degrade.
    pub fn parse(text: &str) -> Result<Option<Self>, String> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        text.parse::<IngredientUnit>()
            .map(Some)
            .map_err(|_| text.to_owned())
    }
}

/// One ingredient line belonging to one recipe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientEntry {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<IngredientUnit>,
    #[serde(default, alias = "is_optional")]
    pub is_optional: bool,
    #[serde(default)]
    pub position: i32,
}

impl IngredientEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
            unit: None,
            is_optional: false,
            position: 0,
        }
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_unit(mut self, unit: IngredientUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    pub fn at(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Orders a single recipe's ingredients for display.
    ///
    /// Stable on `position`, so lines sharing a position keep their stored
    /// order. Optional lines are kept.
    pub fn display_order(entries: impl IntoIterator<Item = IngredientEntry>) -> Vec<Self> {
        let mut entries = entries.into_iter().collect::<Vec<_>>();
        entries.sort_by_key(|e| e.position);
        entries
    }
}
