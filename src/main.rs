// Pantry Resolver CLI
// Inspect how names resolve against the built-in (or a custom) catalog.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use pantry_resolver::{
    load_receipt_csv, parse_material_name, CategoryDefinition, CategoryId, IconHint,
    IngredientCatalog, IngredientResolver,
};

#[derive(Parser)]
#[command(name = "pantry-resolver")]
#[command(version)]
#[command(about = "Resolve ingredient names to categories, icons and shelf life", long_about = None)]
struct Cli {
    /// Catalog JSON to use instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Category, icon and shelf life for an ingredient name
    Resolve {
        name: String,

        /// Declared category (e.g. "seafood")
        #[arg(short, long)]
        category: Option<String>,

        /// Explicitly assigned icon id
        #[arg(short, long)]
        icon: Option<String>,
    },

    /// Split a combined "name amount" string
    Parse { raw: String },

    /// Icon id for a display name
    Icon {
        name: String,

        #[arg(short, long)]
        category: Option<String>,
    },

    /// Turn a receipt CSV (columns: item[,category]) into ingredient drafts
    Receipt {
        csv: PathBuf,

        /// Purchase date, defaults to today
        #[arg(long)]
        added_on: Option<NaiveDate>,
    },

    /// List categories with their labels and default icons
    Categories,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Resolution<'a> {
    name: &'a str,
    category: Option<&'a CategoryId>,
    category_label: Option<&'a str>,
    icon_id: &'a str,
    shelf_life_days: Option<u32>,
}

#[derive(Serialize)]
struct CategoryRow<'a> {
    #[serde(flatten)]
    definition: &'a CategoryDefinition,
    items: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let loaded;
    let catalog = match &cli.catalog {
        Some(path) => {
            info!("Loading catalog from: {}", path.display());
            loaded = IngredientCatalog::from_file(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?;
            &loaded
        }
        None => IngredientCatalog::builtin(),
    };
    let resolver = IngredientResolver::new(catalog);

    match cli.command {
        Commands::Resolve { name, category, icon } => {
            let declared = category.map(CategoryId::from);
            let category = declared.as_ref().or_else(|| resolver.resolve_category(&name));

            let explicit = icon.as_deref().filter(|id| catalog.icons().contains(id));
            let icon_id = explicit.or_else(|| resolver.find_icon_id_by_name(&name, category));
            let icon_id = resolver.resolve_icon_id(&IconHint { icon_id, category });

            let resolution = Resolution {
                name: &name,
                category,
                category_label: category.and_then(|c| resolver.category_label(c)),
                icon_id,
                shelf_life_days: resolver.resolve_shelf_life_days(&name),
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&resolution)?);
            } else {
                println!("name:       {}", resolution.name);
                println!(
                    "category:   {}",
                    resolution
                        .category
                        .map(|c| format!("{} ({})", c, resolution.category_label.unwrap_or("-")))
                        .unwrap_or_else(|| "(uncategorized)".to_string())
                );
                println!("icon:       {}", resolution.icon_id);
                println!(
                    "shelf life: {}",
                    resolution
                        .shelf_life_days
                        .map(|d| format!("{} days", d))
                        .unwrap_or_else(|| "(no suggestion)".to_string())
                );
            }
        }

        Commands::Parse { raw } => {
            let parsed = parse_material_name(&raw);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&parsed)?);
            } else {
                println!("name:   {}", parsed.name);
                println!("amount: {}", parsed.amount.as_deref().unwrap_or("-"));
            }
        }

        Commands::Icon { name, category } => {
            let category = category.map(CategoryId::from);
            let found = resolver.find_icon_id_by_name(&name, category.as_ref());
            if cli.json {
                println!("{}", serde_json::json!({ "name": name, "iconId": found }));
            } else {
                println!("{}", found.unwrap_or("(not found)"));
            }
        }

        Commands::Receipt { csv, added_on } => {
            let added_on = added_on.unwrap_or_else(|| Local::now().date_naive());
            let items = load_receipt_csv(&csv)?;
            info!("Loaded {} receipt items from {}", items.len(), csv.display());

            let ingredients: Vec<_> = items
                .into_iter()
                .map(|item| item.into_ingredient(&resolver, added_on))
                .collect();

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&ingredients)?);
            } else {
                for ingredient in &ingredients {
                    println!(
                        "{:<16} {:<12} {:<16} {:<14} {}",
                        ingredient.name,
                        ingredient.quantity.as_deref().unwrap_or("-"),
                        ingredient.category.as_ref().map(|c| c.as_str()).unwrap_or("-"),
                        ingredient.icon_id.as_deref().unwrap_or("-"),
                        ingredient
                            .expires_on
                            .map(|d| d.to_string())
                            .unwrap_or_else(|| "-".to_string()),
                    );
                }
            }
        }

        Commands::Categories => {
            if cli.json {
                let rows: Vec<_> = catalog
                    .categories()
                    .iter()
                    .map(|c| CategoryRow {
                        definition: c,
                        items: catalog.icons().items_in(&c.value).len(),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for c in catalog.categories() {
                    println!(
                        "{:<16} {:<16} {:<12} {} items",
                        c.value.as_str(),
                        c.label,
                        c.default_icon_id,
                        catalog.icons().items_in(&c.value).len()
                    );
                }
            }
        }
    }

    Ok(())
}
