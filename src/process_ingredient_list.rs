use anyhow::{Context, Result};
use colored::Colorize;
use csv_async::AsyncReaderBuilder;
use futures::StreamExt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reqwest::Client;
use tokio::fs::File;
use tokio::io::BufReader;
use tokio::time::{sleep, Duration};

use crate::config::config::AppConfig;
use crate::ingredient_api::ingredient_api;

/// Runs an ingredient lookup for every row of a CSV list, one at a time,
/// pausing between lookups so the search host is not hammered.
pub async fn process_ingredient_list(
    config: &AppConfig,
    client: &Client,
    path: &str,
) -> Result<()> {
    let file = File::open(path)
        .await
        .with_context(|| format!("Failed to open ingredient list {}", path))?;
    let reader = BufReader::new(file);
    let mut csv_reader = AsyncReaderBuilder::new().create_reader(reader);

    // The first row names the column and is not an ingredient.
    csv_reader
        .headers()
        .await
        .context("Failed to read ingredient list header")?;

    let records_stream = csv_reader.records();
    let max_concurrency = 1;

    records_stream
        .for_each_concurrent(max_concurrency, |record_result| {
            let client = client.clone();
            async move {
                match record_result {
                    Ok(record) => {
                        let ingredient = record.get(0).unwrap_or_default().trim().to_string();
                        if ingredient.is_empty() {
                            return;
                        }

                        println!("{} {}", "Searching Bigbasket for".cyan(), ingredient);
                        let response =
                            ingredient_api(config, &client, Some(ingredient.as_str())).await;
                        match response.status {
                            200 => println!("{} {}", "Found".green(), response.body),
                            404 => println!(
                                "{} {}",
                                "No match:".yellow(),
                                response.body["error"].as_str().unwrap_or_default()
                            ),
                            _ => eprintln!("{} {}", "Lookup failed:".red(), response.body),
                        }

                        polite_delay(config.batch.min_delay, config.batch.max_delay).await;
                    }
                    Err(e) => {
                        eprintln!("Failed to read CSV record: {}", e);
                    }
                }
            }
        })
        .await;

    Ok(())
}

async fn polite_delay(min_delay: u64, max_delay: u64) {
    let delay = if max_delay > min_delay {
        let mut rng = StdRng::from_entropy();
        rng.gen_range(min_delay..max_delay)
    } else {
        min_delay
    };

    sleep(Duration::from_millis(delay)).await;
}
