use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use larder::config::OutputFormat;

/// larder - Recipe shopping lists
#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Build shopping lists from recipe ingredients", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Aggregate the ingredients of selected recipes into a shopping list
    ShoppingList {
        /// Recipe book JSON file
        #[arg(long)]
        input: PathBuf,

        /// Recipe id to include, repeatable (all recipes when omitted)
        #[arg(long = "recipe")]
        recipes: Vec<String>,

        /// Output format (overrides config file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print one recipe's ingredients in display order
    Ingredients {
        /// Recipe book JSON file
        #[arg(long)]
        input: PathBuf,

        /// Recipe id
        #[arg(long)]
        recipe: String,
    },
    /// List supported units and their labels
    Units,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = larder::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    larder::observability::init_observability(
        &config.observability.log_level,
        &config.observability.log_format,
    )?;

    match cli.command {
        Commands::Serve { host, port } => larder::cli::server::serve(config, host, port).await,
        Commands::ShoppingList {
            input,
            recipes,
            format,
        } => {
            let book = larder::cli::shopping::load_recipe_book(&input)?;
            let format = format.unwrap_or(config.shopping.format);
            println!(
                "{}",
                larder::cli::shopping::shopping_list(&book, &recipes, format)?
            );
            Ok(())
        }
        Commands::Ingredients { input, recipe } => {
            let book = larder::cli::shopping::load_recipe_book(&input)?;
            println!("{}", larder::cli::shopping::ingredients(&book, &recipe)?);
            Ok(())
        }
        Commands::Units => {
            println!("{}", larder::cli::shopping::units());
            Ok(())
        }
    }
}
