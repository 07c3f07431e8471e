mod data;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use serde_json::Value;
use std::time::Instant;
use store::{ContentStoreClient, StoreConfig};

#[derive(Parser)]
#[command(name = "seeder")]
#[command(about = "Loads the D P System marketing catalog into the content store")]
struct Args {
    /// Print what would be written without calling the store.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    println!("{}", "=".repeat(80).cyan());
    println!("{}", "D P System Catalog Seeder".bold().cyan());
    println!("{}", "=".repeat(80).cyan());
    println!();

    let config = StoreConfig::from_env().context("Failed to load store configuration")?;
    println!(
        "{} Target dataset: {} ({})",
        "ℹ".blue(),
        config.dataset,
        config.api_root()
    );

    let client = if args.dry_run {
        println!("{} Dry run: no documents will be written", "ℹ".blue());
        None
    } else {
        Some(ContentStoreClient::new(config).context("Failed to build store client")?)
    };

    let start_time = Instant::now();

    let services: Vec<Value> = data::services()
        .iter()
        .map(|entry| serde_json::to_value(entry).expect("service serializes"))
        .collect();
    let count = seed_documents(client.as_ref(), "service", &services).await?;
    println!("{} Created {} services", "✓".green(), count);

    let products: Vec<Value> = data::products()
        .iter()
        .map(|entry| serde_json::to_value(entry).expect("product serializes"))
        .collect();
    let count = seed_documents(client.as_ref(), "product", &products).await?;
    println!("{} Created {} products", "✓".green(), count);

    let brands: Vec<Value> = data::brands()
        .iter()
        .map(|entry| serde_json::to_value(entry).expect("brand serializes"))
        .collect();
    let count = seed_documents(client.as_ref(), "brand", &brands).await?;
    println!("{} Created {} brands", "✓".green(), count);

    let testimonials: Vec<Value> = data::testimonials()
        .iter()
        .map(|entry| serde_json::to_value(entry).expect("testimonial serializes"))
        .collect();
    let count = seed_documents(client.as_ref(), "testimonial", &testimonials).await?;
    println!("{} Created {} testimonials", "✓".green(), count);

    let elapsed = start_time.elapsed();
    println!();
    println!("{}", "=".repeat(80).cyan());
    println!(
        "{} Seeding completed in {:.2}s",
        "✓".green().bold(),
        elapsed.as_secs_f64()
    );
    println!("{}", "=".repeat(80).cyan());

    Ok(())
}

async fn seed_documents(
    client: Option<&ContentStoreClient>,
    doc_type: &str,
    documents: &[Value],
) -> Result<usize> {
    for document in documents {
        let title = document["title"]
            .as_str()
            .or_else(|| document["name"].as_str())
            .unwrap_or("<untitled>");
        match client {
            Some(client) => {
                client
                    .create_document(doc_type, document.clone())
                    .await
                    .with_context(|| format!("Failed to create {} {:?}", doc_type, title))?;
            }
            None => println!("  {} would create {}: {}", "→".blue(), doc_type, title),
        }
    }
    Ok(documents.len())
}
