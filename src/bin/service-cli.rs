use std::collections::HashSet;

use clap::{Parser, Subcommand};
use reqwest::Method;
use serde_json::Value;
use tokio::task::JoinSet;

const REQUEST_ID_HEADER: &str = "x-uber-request-id";

#[derive(Parser)]
#[command(name = "service-cli")]
#[command(about = "Probe a running fake-uber-service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one request and print status, request ID header and body
    Probe {
        #[arg(short, long, default_value = "GET")]
        method: String,
        #[arg(short, long, default_value = "/")]
        path: String,
    },
    /// Send concurrent requests and check request IDs are unique
    Burst {
        #[arg(short = 'n', long, default_value_t = 1000)]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/').to_string();

    match cli.command {
        Commands::Probe { method, path } => {
            let method = Method::from_bytes(method.to_uppercase().as_bytes())?;
            let res = client
                .request(method, format!("{}{}", base, path))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Burst { count } => {
            let mut tasks = JoinSet::new();
            for i in 0..count {
                let client = client.clone();
                let url = format!("{}/burst/{}", base, i);
                tasks.spawn(async move {
                    let res = client.get(url).send().await?;
                    let body: Value = res.json().await?;
                    Ok::<_, reqwest::Error>(body["request_id"].as_str().map(str::to_string))
                });
            }

            let mut ids = HashSet::new();
            let mut failures = 0usize;
            let mut duplicates = 0usize;
            while let Some(joined) = tasks.join_next().await {
                match joined? {
                    Ok(Some(id)) => {
                        if !ids.insert(id) {
                            duplicates += 1;
                        }
                    }
                    Ok(None) | Err(_) => failures += 1,
                }
            }

            println!("Requests:   {}", count);
            println!("Unique IDs: {}", ids.len());
            println!("Duplicates: {}", duplicates);
            println!("Failures:   {}", failures);
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let request_id = res
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("<missing>")
        .to_string();

    println!("Status:     {}", status);
    println!("Request ID: {}", request_id);

    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
