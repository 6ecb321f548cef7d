pub mod aggregation;
pub mod list;
pub mod payload;
pub mod quantity;

pub use aggregation::{AggregatedLine, aggregate, format_line};
pub use list::{RecipeBook, RecipeIngredients, ShoppingList, ShoppingListError, build_shopping_list};
pub use payload::{IngredientPayload, PayloadError};
pub use quantity::parse_quantity;
