//! tabex CLI: analyze CSV files with natural-language queries, or execute
//! saved plans directly.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tabex_agent::{analyze, create_provider, OpenAiProvider, Provider};
use tabex_exec::Executor;
use tabex_plan::Plan;

#[derive(Parser)]
#[command(name = "tabex")]
#[command(about = "Natural-language analytics over CSV files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a natural-language question of a CSV file
    Analyze {
        /// Path to the CSV file
        #[arg(short, long)]
        file: PathBuf,

        /// The question, in plain language
        #[arg(short, long)]
        query: String,

        /// Plan provider (openai | mock)
        #[arg(long, default_value = "openai")]
        provider: String,

        /// Model override for the provider
        #[arg(long)]
        model: Option<String>,

        /// Directory for chart artifacts
        #[arg(long, default_value = "outputs")]
        out_dir: PathBuf,
    },

    /// Execute a saved plan (JSON or YAML) against a CSV file
    Run {
        /// Path to the CSV file
        #[arg(short, long)]
        file: PathBuf,

        /// Path to the plan file
        #[arg(short, long)]
        plan: PathBuf,

        /// Directory for chart artifacts
        #[arg(long, default_value = "outputs")]
        out_dir: PathBuf,
    },

    /// Print the inferred schema of a CSV file
    Schema {
        /// Path to the CSV file
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Analyze {
            file,
            query,
            provider,
            model,
            out_dir,
        } => run_analyze(&file, &query, &provider, model.as_deref(), &out_dir).await,
        Commands::Run {
            file,
            plan,
            out_dir,
        } => run_plan(&file, &plan, &out_dir),
        Commands::Schema { file } => show_schema(&file),
    };

    if let Err(e) = outcome {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run_analyze(
    file: &Path,
    query: &str,
    provider_name: &str,
    model: Option<&str>,
    out_dir: &Path,
) -> Result<()> {
    let table = tabex_io::read_csv_path(file)
        .with_context(|| format!("reading {}", file.display()))?;

    let provider: Box<dyn Provider> = match (provider_name, model) {
        ("openai", Some(model)) => Box::new(OpenAiProvider::from_env()?.with_model(model)),
        _ => create_provider(provider_name)?,
    };

    let executor = Executor::with_output_dir(out_dir);
    let analysis = analyze(provider.as_ref(), &executor, &table, query).await?;
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

fn run_plan(file: &Path, plan_path: &Path, out_dir: &Path) -> Result<()> {
    let table = tabex_io::read_csv_path(file)
        .with_context(|| format!("reading {}", file.display()))?;

    let src = std::fs::read_to_string(plan_path)
        .with_context(|| format!("reading {}", plan_path.display()))?;
    let is_yaml = plan_path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| matches!(e, "yaml" | "yml"));
    let plan = if is_yaml {
        Plan::from_yaml(&src).context("parsing YAML plan")?
    } else {
        Plan::from_json(&src).context("parsing JSON plan")?
    };

    let executor = Executor::with_output_dir(out_dir);
    let result = executor.execute(&table, &plan);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn show_schema(file: &Path) -> Result<()> {
    let table = tabex_io::read_csv_path(file)
        .with_context(|| format!("reading {}", file.display()))?;
    for field in &table.schema().fields {
        let suffix = if field.nullable { " (nullable)" } else { "" };
        println!("{}: {}{}", field.name, field.data_type, suffix);
    }
    Ok(())
}
