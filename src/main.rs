use log::debug;
use std::env;

use recipe_scraper::{RecipeScraper, UnitSystem};

const USAGE: &str = "Usage: recipe-scraper <url> [--units metric|imperial] [--servings N]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let mut url = None;
    let mut builder = RecipeScraper::builder();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--units" => {
                let value = args.next().ok_or(USAGE)?;
                builder = builder.unit_system(value.parse::<UnitSystem>()?);
            }
            "--servings" => {
                let value = args.next().ok_or(USAGE)?;
                builder = builder.servings(value.parse::<f64>()?);
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ if url.is_none() => url = Some(arg),
            _ => return Err(USAGE.into()),
        }
    }

    let url = url.ok_or(USAGE)?;
    debug!("Scraping {}", url);

    let result = builder.url(url).build().await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
