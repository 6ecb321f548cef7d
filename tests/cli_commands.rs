//! Tests for the shopping-list, ingredients and units commands

use larder::cli::shopping::{ingredients, load_recipe_book, shopping_list, units};
use larder::config::OutputFormat;
use temp_dir::TempDir;

const RECIPE_BOOK: &str = r#"{
  "recipes": [
    {
      "id": "pancakes",
      "title": "Pancakes",
      "ingredients": [
        { "name": "Milk", "quantity": 250, "unit": "ml", "position": 1 },
        { "name": "Flour", "quantity": 200, "unit": "gram", "position": 0 },
        { "name": "Eggs", "quantity": 2, "position": 2 },
        { "name": "Maple syrup", "quantity": 2, "unit": "tbsp", "isOptional": true, "position": 3 }
      ]
    },
    {
      "id": "crepes",
      "title": "Crepes",
      "ingredients": "[{\"name\":\"flour\",\"quantity\":\"125\",\"unit\":\"g\"},{\"name\":\"eggs\",\"quantity\":2},{\"name\":\"Salt\",\"unit\":\"pinch\"}]"
    }
  ]
}"#;

fn write_book(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.child("recipes.json");
    std::fs::write(&path, RECIPE_BOOK).unwrap();
    path
}

#[test]
fn test_shopping_list_text_output() {
    let dir = TempDir::new().unwrap();
    let book = load_recipe_book(&write_book(&dir)).unwrap();

    let output = shopping_list(&book, &[], OutputFormat::Text).unwrap();

    assert_eq!(output, "4 Eggs\n325 g Flour\n250 ml Milk\nSalt");
}

#[test]
fn test_shopping_list_selected_recipe_only() {
    let dir = TempDir::new().unwrap();
    let book = load_recipe_book(&write_book(&dir)).unwrap();

    let output = shopping_list(&book, &["crepes".to_string()], OutputFormat::Text).unwrap();

    assert_eq!(output, "2 eggs\n125 g flour\nSalt");
}

#[test]
fn test_shopping_list_json_output() {
    let dir = TempDir::new().unwrap();
    let book = load_recipe_book(&write_book(&dir)).unwrap();

    let output = shopping_list(&book, &["pancakes".to_string()], OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["recipes"], serde_json::json!(["pancakes"]));
    assert_eq!(value["lines"][1]["name"], "Flour");
    assert_eq!(value["lines"][1]["unit"], "gram");
    assert_eq!(value["lines"][1]["quantity"], 200.0);
    assert_eq!(value["lines"].as_array().unwrap().len(), 3);
}

#[test]
fn test_shopping_list_unknown_recipe() {
    let dir = TempDir::new().unwrap();
    let book = load_recipe_book(&write_book(&dir)).unwrap();

    let err = shopping_list(&book, &["waffles".to_string()], OutputFormat::Text).unwrap_err();

    assert_eq!(err.to_string(), "recipe waffles not found");
}

#[test]
fn test_ingredients_in_display_order() {
    let dir = TempDir::new().unwrap();
    let book = load_recipe_book(&write_book(&dir)).unwrap();

    let output = ingredients(&book, "pancakes").unwrap();

    assert_eq!(
        output,
        "200 g Flour\n250 ml Milk\n2 Eggs\n2 tbsp Maple syrup (optional)"
    );
}

#[test]
fn test_load_missing_recipe_book() {
    let dir = TempDir::new().unwrap();

    let err = load_recipe_book(&dir.child("missing.json")).unwrap_err();

    assert!(err.to_string().contains("failed to read recipe book"));
}

#[test]
fn test_units_lists_every_label() {
    let output = units();

    assert!(output.contains("gram\tg"));
    assert!(output.contains("teaspoon\ttsp"));
    assert!(output.contains("other\tother"));
}
