use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;

use stampgrid::rendering::render_text;
use stampgrid::{compute_card_size_with, GridSpec, LayoutConfig, RequiredCount, StampCardView};

#[derive(Parser, Debug)]
#[command(name = "stampgrid", version, about = "Inspect loyalty-card stamp layouts")]
struct Cli {
    /// JSON layout configuration (missing fields use defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Grid shape and card size for a required stamp count
    Grid {
        #[arg(allow_negative_numbers = true)]
        count: String,
        #[arg(long)]
        json: bool,
    },
    /// Lay out a merchant's card
    Card {
        #[arg(long)]
        merchant: String,
        #[arg(long, allow_negative_numbers = true)]
        required: String,
        #[arg(long, default_value_t = 0)]
        stamps: u32,
        #[arg(long, default_value = "reward")]
        reward: String,
        #[arg(long)]
        json: bool,
    },
    /// One line per stamp count from 1 to --max
    Table {
        #[arg(long, default_value_t = 20)]
        max: u32,
    },
}

fn parse_count(raw: &str) -> anyhow::Result<RequiredCount> {
    raw.parse::<RequiredCount>()
        .with_context(|| format!("bad stamp count {:?}", raw))
}

fn load_config(cli: &Cli) -> anyhow::Result<LayoutConfig> {
    let config = match &cli.config {
        Some(path) => LayoutConfig::load(path)
            .with_context(|| format!("loading layout config {}", path.display()))?,
        None => LayoutConfig::default(),
    };
    info!("layout config: {:?}", config);
    Ok(config)
}

/// Run one subcommand and return what it prints
fn execute(cli: &Cli) -> anyhow::Result<String> {
    let config = load_config(cli)?;
    let mut out = String::new();

    match &cli.command {
        Command::Grid { count, json } => {
            let count = parse_count(count)?;
            let grid = GridSpec::for_count(count);
            let size = compute_card_size_with(&config, grid);
            if *json {
                let value = serde_json::json!({ "required": count, "grid": grid, "size": size });
                out.push_str(&serde_json::to_string_pretty(&value)?);
            } else {
                write!(
                    out,
                    "{} stamps: {} grid, card {}x{}",
                    count, grid, size.width, size.height
                )?;
            }
        }
        Command::Card {
            merchant,
            required,
            stamps,
            reward,
            json,
        } => {
            let required = parse_count(required)?;
            let view = StampCardView::new(merchant, reward, *stamps, required, &config);
            if *json {
                let value = serde_json::json!({ "card": view, "paint": view.paint() });
                out.push_str(&serde_json::to_string_pretty(&value)?);
            } else {
                out.push_str(&render_text(&view).to_plain());
            }
        }
        Command::Table { max } => {
            let lines = (1..=(*max).max(1))
                .map(|n| -> anyhow::Result<String> {
                    let count = RequiredCount::new(n)?;
                    let grid = GridSpec::for_count(count);
                    let size = compute_card_size_with(&config, grid);
                    Ok(format!(
                        "{:>4}  {:>7}  {}x{}",
                        n,
                        grid.to_string(),
                        size.width,
                        size.height
                    ))
                })
                .collect::<anyhow::Result<Vec<String>>>()?;
            out.push_str(&lines.join("\n"));
        }
    }
    Ok(out)
}

/// Print the outcome and return the process exit code
fn report(result: anyhow::Result<String>) -> i32 {
    match result {
        Ok(out) => {
            println!("{}", out);
            0
        }
        Err(e) => {
            eprintln!("stampgrid: {:#}", e);
            1
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let code = report(execute(&cli));
    if code != 0 {
        std::process::exit(code);
    }
}
