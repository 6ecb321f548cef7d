use axum::{
    Router,
    routing::{get, post},
};

mod health;
mod shopping_list;

pub use shopping_list::{ShoppingListInput, ShoppingListLine, ShoppingListResponse};

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/shopping-list", post(shopping_list::action))
        .with_state(app_state)
}
