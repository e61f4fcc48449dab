use anyhow::Context;
use clap::{Parser, Subcommand};
use orchard_cli::args::PickerSpec;
use orchard_cli::session::reference_rankings;
use orchard_domain::Ranking;
use orchard_render::{ranking_to_json, render_ranking};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "orchard",
    version,
    about = "Replay and rank fruit picking sessions."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay the reference session and print its three rankings.
    Demo(DemoArgs),
    /// Rank pickers described on the command line.
    Rank(RankArgs),
}

#[derive(Debug, Parser)]
struct DemoArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Parser)]
struct RankArgs {
    /// Picker as NAME=FRUIT,FRUIT,... with fruit written taste/size/quality
    /// (e.g. "Arnold=sweet/large/healthy,sour/small/rotten"). Repeatable.
    #[arg(long = "picker", required = true)]
    pickers: Vec<String>,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Demo(args) => cmd_demo(args),
        Command::Rank(args) => cmd_rank(args),
    }
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let rankings = reference_rankings();

    match args.format {
        OutputFormat::Text => {
            for entry in &rankings {
                println!("{}", entry.title);
                println!("{}", render_ranking(&entry.ranking));
            }
        }
        OutputFormat::Json => {
            let mut out = serde_json::Map::new();
            for entry in &rankings {
                let value = ranking_to_json(&entry.ranking)
                    .with_context(|| format!("render {}", entry.title))?;
                out.insert(entry.title.clone(), value);
            }
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

fn cmd_rank(args: RankArgs) -> anyhow::Result<()> {
    let specs = args
        .pickers
        .iter()
        .map(|raw| PickerSpec::parse(raw).with_context(|| format!("invalid --picker '{}'", raw)))
        .collect::<anyhow::Result<Vec<_>>>()?;
    debug!(pickers = specs.len(), "parsed picker specs");

    let ranking: Ranking = specs.iter().map(PickerSpec::build).collect();

    match args.format {
        OutputFormat::Text => {
            for (i, picker) in ranking.iter().enumerate() {
                println!(
                    "{}. {} (healthy {}, total {})",
                    i + 1,
                    picker.name(),
                    picker.rank_key().healthy,
                    picker.count_fruits()
                );
            }
            println!();
            print!("{}", render_ranking(&ranking));
        }
        OutputFormat::Json => {
            let value = ranking_to_json(&ranking)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}
