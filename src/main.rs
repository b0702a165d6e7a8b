use std::env;

use colored::Colorize;
use reqwest::Client;

use crate::config::config::load_config;
use crate::ingredient_api::{ingredient_api, ApiResponse};
use crate::process_ingredient_list::process_ingredient_list;

mod bigbasket;
mod config;
mod ingredient_api;
mod process_ingredient_list;
mod scraping;
mod storage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration settings
    let config = match load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(2);
    }

    let client = Client::new();

    if args[1] == "--file" {
        let path = match args.get(2) {
            Some(path) => path,
            None => {
                print_usage();
                std::process::exit(2);
            }
        };

        println!("{} v{}", config.base.name, config.base.version);
        process_ingredient_list(&config, &client, path).await?;
    } else {
        let ingredient = args[1..].join(" ");
        let response = ingredient_api(&config, &client, Some(ingredient.as_str())).await;
        print_response(&response);

        if response.status != 200 {
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_response(response: &ApiResponse) {
    let body = serde_json::to_string_pretty(&response.body).unwrap_or_default();

    match response.status {
        200 => println!("{} {}", "200".green(), body),
        404 => println!("{} {}", "404".yellow(), body),
        _ => eprintln!("{} {}", response.status.to_string().red(), body),
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  bigbasket_scraper \"<ingredient name>\"");
    eprintln!("  bigbasket_scraper --file <ingredients.csv>");
}
