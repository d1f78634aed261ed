use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sakage_core::{load_menu, Money};

#[derive(Debug, Parser)]
#[command(name = "sakage-cli")]
#[command(about = "Sakage ordering backend command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load the menu catalog and report validation problems.
    Validate {
        #[arg(long, default_value = "./config/menu.yaml")]
        menu: PathBuf,
    },
    /// Rank menu items against a free-text craving.
    Suggest {
        craving: String,
        /// Spending cap, e.g. 15 or $15.00. Minimum $10.00.
        #[arg(long)]
        budget: Option<String>,
        /// Extra dietary keywords, e.g. "vegetarian".
        #[arg(long)]
        dietary: Option<String>,
        #[arg(long, default_value = "./config/menu.yaml")]
        menu: PathBuf,
    },
    /// Price an order locally, without contacting Stripe.
    Quote {
        /// Menu item ids; repeat an id to order it twice.
        #[arg(required = true)]
        items: Vec<u32>,
        #[arg(long, default_value = "7.99")]
        delivery_fee: String,
        #[arg(long)]
        tip: Option<String>,
        #[arg(long, default_value = "./config/menu.yaml")]
        menu: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Validate { menu } => {
            let catalog = load_menu(&menu)
                .with_context(|| format!("menu at {} failed validation", menu.display()))?;
            println!(
                "ok: {} items across {} categories",
                catalog.len(),
                catalog.categories().len()
            );
        }
        Commands::Suggest {
            craving,
            budget,
            dietary,
            menu,
        } => {
            let catalog = load_menu(&menu)?;
            let budget = budget
                .map(|b| Money::parse(&b))
                .transpose()
                .context("invalid --budget")?;
            match sakage_suggest::suggest(&craving, budget, dietary.as_deref(), &catalog) {
                Ok(suggestions) if suggestions.is_empty() => {
                    println!("no matches; try different words or browse the full menu");
                }
                Ok(suggestions) => {
                    for s in suggestions {
                        println!(
                            "{:>3}  {:<40} {:>8}  (score {})",
                            s.item.id, s.item.name, s.item.price, s.score
                        );
                    }
                }
                Err(e) => println!("{e}"),
            }
        }
        Commands::Quote {
            items,
            delivery_fee,
            tip,
            menu,
        } => {
            let catalog = load_menu(&menu)?;
            let delivery_fee =
                Money::parse(&delivery_fee).context("invalid --delivery-fee")?;
            let tip = tip
                .map(|t| Money::parse(&t))
                .transpose()
                .context("invalid --tip")?;
            let lines = sakage_stripe::build_line_items(&catalog, &items, delivery_fee, tip)?;
            let mut total = 0i64;
            for line in &lines {
                println!("{:<40} {:>8}", line.name, format_cents(line.unit_amount));
                total += line.unit_amount;
            }
            println!("{:<40} {:>8}", "Total", format_cents(total));
        }
    }

    Ok(())
}

fn format_cents(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
