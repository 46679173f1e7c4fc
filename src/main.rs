use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

mod advice;
mod balance;
mod db;
mod models;
mod reminder;
mod report;

use models::{AssessmentRecord, ScoreSet};

#[derive(Parser)]
#[command(name = "life-balance")]
#[command(about = "Weekly life-balance self-assessment", long_about = None)]
struct Cli {
    /// SQLite database holding the latest assessment and history
    #[arg(
        long,
        global = true,
        env = "LIFE_BALANCE_DATABASE_URL",
        default_value = "sqlite://life-balance.db"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rate each category from 1 (very low) to 10 (very high) and save it
    Assess {
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
        health: u8,
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
        work: u8,
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
        hobby: u8,
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
        relationships: u8,
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
        learning: u8,
    },
    /// Show balance and advice for the latest assessment
    Results {
        /// Fix advice selection for repeatable output
        #[arg(long)]
        seed: Option<u64>,
        /// Print the verdict and advice as JSON
        #[arg(long)]
        json: bool,
    },
    /// List past assessments, newest first
    History,
    /// Delete every stored assessment from history
    ClearHistory {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Append assessments from a CSV file to history
    Import {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Write a markdown report of the latest results and history
    Report {
        #[arg(long, default_value = "life-balance-report.md")]
        out: PathBuf,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show when the next weekly check-in is due
    Reminder,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("life_balance=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Commands::Reminder = cli.command {
        let next = reminder::next_reminder(chrono::Local::now().naive_local());
        println!("{}: {}", reminder::REMINDER_TITLE, reminder::REMINDER_BODY);
        println!("Next check-in: {}", next.format("%A %Y-%m-%d %H:%M"));
        return Ok(());
    }

    let pool = db::connect(&cli.database_url)
        .await
        .context("failed to open the assessment store")?;

    match cli.command {
        Commands::Assess {
            health,
            work,
            hobby,
            relationships,
            learning,
        } => {
            let scores = ScoreSet {
                health: f64::from(health),
                work: f64::from(work),
                hobby: f64::from(hobby),
                relationships: f64::from(relationships),
                learning: f64::from(learning),
            };
            let record = AssessmentRecord::new(scores, chrono::Utc::now());
            db::save_assessment(&pool, &record)
                .await
                .context("failed to save your assessment")?;
            println!("Assessment saved. Run `results` to see your balance.");
        }
        Commands::Results { seed, json } => {
            let latest = db::latest(&pool)
                .await
                .context("failed to load your latest assessment")?;
            let Some(record) = latest else {
                println!("{}", report::render_results(None));
                return Ok(());
            };

            let verdict = balance::overall_balance(&record.scores);
            let advice = balance::generate_advice(&record.scores, &mut advice_rng(seed));
            debug!(level = ?verdict.level, "computed balance");

            if json {
                let payload = serde_json::json!({
                    "record": record,
                    "balance": verdict,
                    "advice": advice,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                let results = report::Results {
                    record: &record,
                    verdict: &verdict,
                    advice: &advice,
                };
                print!("{}", report::render_results(Some(&results)));
            }
        }
        Commands::History => {
            let history = db::history(&pool)
                .await
                .context("failed to load assessment history")?;
            print!("{}", report::render_history(&history));
        }
        Commands::ClearHistory { yes } => {
            if !yes {
                warn!("clear-history invoked without confirmation");
                println!("This deletes every past assessment. Re-run with --yes to confirm.");
                return Ok(());
            }
            db::clear_history(&pool)
                .await
                .context("failed to clear assessment history")?;
            println!("History cleared.");
        }
        Commands::Import { csv } => {
            let inserted = db::import_csv(&pool, &csv)
                .await
                .with_context(|| format!("failed to import {}", csv.display()))?;
            println!("Imported {inserted} assessments from {}.", csv.display());
        }
        Commands::Report { out, seed } => {
            let latest = db::latest(&pool)
                .await
                .context("failed to load your latest assessment")?;
            let history = db::history(&pool)
                .await
                .context("failed to load assessment history")?;

            let computed = latest.as_ref().map(|record| {
                (
                    balance::overall_balance(&record.scores),
                    balance::generate_advice(&record.scores, &mut advice_rng(seed)),
                )
            });
            let results = latest
                .as_ref()
                .zip(computed.as_ref())
                .map(|(record, (verdict, advice))| report::Results {
                    record,
                    verdict,
                    advice,
                });

            let output = report::build_report(results.as_ref(), &history, chrono::Utc::now());
            report::write_report(&out, &output)?;
            println!("Report written to {}.", out.display());
        }
        Commands::Reminder => {}
    }

    Ok(())
}

fn advice_rng(seed: Option<u64>) -> Box<dyn rand::RngCore> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    }
}
