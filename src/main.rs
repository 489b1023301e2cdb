use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use prospector::{
    gather_information, run_pipeline, write_report_csv, AgentExecutor, ExecutorOptions,
    GoogleSearchTool, ModelClient, ModelConfig, PipelineConfig, ResearchConfig, SearchConfig,
    SolutionConfig, TextReport, Tool, UseCaseConfig,
};

#[derive(Parser)]
#[command(name = "prospector")]
#[command(author, version, about = "AI/ML use-case discovery pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline for a company or industry
    Run {
        /// Company or industry to research
        #[arg(short, long)]
        subject: String,

        /// Output file for the aggregated CSV row
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Output file for the human-readable report
        #[arg(long)]
        report: Option<PathBuf>,

        /// Collapse duplicate use-case lines
        #[arg(long)]
        dedup_use_cases: bool,

        /// Use the short research prompt instead of the expanded profile
        #[arg(long)]
        concise_research: bool,

        /// Maximum agent round-trips per stage call
        #[arg(long, default_value = "8")]
        max_turns: usize,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run only the research stage and print the summary
    Research {
        /// Company or industry to research
        #[arg(short, long)]
        subject: String,

        /// Use the short research prompt instead of the expanded profile
        #[arg(long)]
        concise: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            subject,
            csv,
            report,
            dedup_use_cases,
            concise_research,
            max_turns,
            verbose,
        } => {
            setup_logging(verbose);
            run_full_pipeline(
                subject,
                csv,
                report,
                dedup_use_cases,
                concise_research,
                max_turns,
            )
            .await
        }
        Commands::Research {
            subject,
            concise,
            verbose,
        } => {
            setup_logging(verbose);
            run_research_only(subject, concise).await
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn build_executor(
    client: &ModelClient,
    search_config: &SearchConfig,
    options: ExecutorOptions,
) -> AgentExecutor {
    let tools: Vec<Box<dyn Tool>> = vec![Box::new(GoogleSearchTool::new(search_config.clone()))];
    AgentExecutor::new(client.clone(), tools, options)
}

async fn run_full_pipeline(
    subject: String,
    csv: Option<PathBuf>,
    report_path: Option<PathBuf>,
    dedup_use_cases: bool,
    concise_research: bool,
    max_turns: usize,
) -> Result<()> {
    let model_config = ModelConfig::from_env()?;
    let search_config = SearchConfig::from_env()?;
    let client = ModelClient::new(model_config);

    let executor = build_executor(
        &client,
        &search_config,
        ExecutorOptions {
            max_turns,
            ..ExecutorOptions::default()
        },
    );
    let solution_executor = build_executor(
        &client,
        &search_config,
        ExecutorOptions {
            max_turns,
            ..ExecutorOptions::recovering()
        },
    );

    let config = PipelineConfig {
        research: ResearchConfig {
            detailed: !concise_research,
        },
        use_cases: UseCaseConfig {
            dedup: dedup_use_cases,
        },
        solutions: SolutionConfig::default(),
    };

    let report = run_pipeline(&executor, &solution_executor, &subject, &config)
        .await
        .context("Pipeline run failed")?;

    let text = TextReport::new(&report);
    println!("{}", text.format());

    if let Some(path) = report_path {
        text.write_file(&path)?;
        info!("Report written to {:?}", path);
    }
    if let Some(path) = csv {
        write_report_csv(&report, &path)?;
        info!("CSV written to {:?}", path);
    }

    Ok(())
}

async fn run_research_only(subject: String, concise: bool) -> Result<()> {
    anyhow::ensure!(!subject.trim().is_empty(), "subject must not be empty");

    let model_config = ModelConfig::from_env()?;
    let search_config = SearchConfig::from_env()?;
    let client = ModelClient::new(model_config);
    let executor = build_executor(&client, &search_config, ExecutorOptions::default());

    let summary = gather_information(
        &executor,
        &subject,
        &ResearchConfig { detailed: !concise },
    )
    .await
    .context("Research stage failed")?;

    println!("{}", summary.trim());
    Ok(())
}
