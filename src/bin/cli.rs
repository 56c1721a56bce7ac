//! Basewatch CLI
//!
//! Command-line client for a running Basewatch API server:
//! - Request a token analysis
//! - Check server status
//! - Generate a default config file

use anyhow::Context;
use basewatch::api::dto::{AnalysisResponse, HealthResponse};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "basewatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Base L2 token monitor")]
#[command(long_about = "Basewatch monitors tokens on Base L2.\nRequest mock AI analysis reports and check the API server.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8082", global = true)]
    pub api_url: String,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate an analysis report for a token address
    Analyze {
        /// Token address (any non-empty text is accepted)
        address: String,
    },

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Analyze { address } => {
            let response = client
                .post(format!("{}/api/analyze", cli.api_url))
                .json(&serde_json::json!({ "address": address }))
                .send()
                .await
                .with_context(|| format!("Cannot connect to Basewatch API at {}", cli.api_url))?;

            if !response.status().is_success() {
                let status = response.status();
                let body: serde_json::Value = response.json().await.unwrap_or_default();
                eprintln!(
                    "Analysis failed ({}): {}",
                    status,
                    body["error"].as_str().unwrap_or("unknown error")
                );
                std::process::exit(1);
            }

            let analysis: AnalysisResponse = response
                .json()
                .await
                .context("Unexpected analysis response")?;

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&analysis)?),
                _ => print_analysis(&analysis),
            }
        }

        Commands::Status => {
            let response = client
                .get(format!("{}/health", cli.api_url))
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: HealthResponse = resp.json().await?;

                    if cli.format == "json" {
                        println!("{}", serde_json::to_string_pretty(&health)?);
                        return Ok(());
                    }

                    println!("Basewatch v{}", health.version);
                    println!();
                    println!("API Status: {}", health.status);
                    println!("Analysis delay: {} ms", health.analysis_delay_ms);
                    println!("Uptime: {}", format_duration(health.uptime_seconds));
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Basewatch API at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the Basewatch API server is running:");
                    eprintln!("  cargo run --bin basewatch-api");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = basewatch::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn print_analysis(analysis: &AnalysisResponse) {
    let metrics = &analysis.metrics;
    let indicators = &metrics.technical.indicators;

    println!("Symbol: {}", analysis.symbol);
    println!("Generated: {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    println!();
    println!("Risk score:       {}/10 ({})", metrics.risk_score, metrics.risk_label());
    println!(
        "Sentiment:        {}% positive, {} mentions",
        metrics.sentiment.positive, metrics.sentiment.mentions
    );
    println!(
        "Technical rating: {} (MACD {}, RSI {}, Stoch {})",
        metrics.technical.rating,
        check_mark(indicators.macd),
        check_mark(indicators.rsi),
        check_mark(indicators.stoch)
    );
    println!("{}", analysis.report);
}

fn check_mark(positive: bool) -> &'static str {
    if positive {
        "✓"
    } else {
        "✗"
    }
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
