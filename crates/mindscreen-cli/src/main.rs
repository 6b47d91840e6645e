use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use mindscreen_cli::config::{self, MindscreenConfig};
use mindscreen_cli::console::ConsoleRenderer;
use mindscreen_cli::prompt::ConsolePrompter;
use mindscreen_engine::{Assessment, EngineError, KnowledgeBase};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mindscreen")]
#[command(version, about = "Interactive rule-based mental health screening")]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for saved reports
    #[arg(long, global = true)]
    report_dir: Option<PathBuf>,

    /// Never offer to save a report
    #[arg(long, global = true)]
    no_save: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the interactive assessment (default)
    Assess,

    /// List conditions, symptom weights and high-risk symptoms
    Conditions,

    /// Render a saved report as Markdown
    Show {
        /// Path to a report JSON file
        path: PathBuf,
    },

    /// Write the effective configuration to the config file
    InitConfig,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so they never interleave with the questionnaire.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };
    let mut config = config::load_config(&config_path)?;
    if let Some(dir) = &cli.report_dir {
        config.report_dir = Some(dir.clone());
    }
    if cli.no_save {
        config.save_reports = false;
    }
    if cli.no_color {
        config.color = false;
    }

    let knowledge = KnowledgeBase::standard()?;

    match cli.command.unwrap_or(Command::Assess) {
        Command::Assess => assess(&knowledge, &config),
        Command::Conditions => {
            let mut renderer = ConsoleRenderer::new(io::stdout(), config.color);
            renderer.list_conditions(&knowledge)?;
            Ok(())
        }
        Command::Show { path } => {
            let report = mindscreen_export::load_report(&path)?;
            print!("{}", mindscreen_export::render_summary(&report)?);
            Ok(())
        }
        Command::InitConfig => {
            config::save_config(&config_path, &config)?;
            println!("Config written to {}", config_path.display());
            Ok(())
        }
    }
}

fn assess(knowledge: &KnowledgeBase, config: &MindscreenConfig) -> Result<()> {
    let mut prompter = ConsolePrompter::new(io::stdin().lock(), io::stdout());
    let mut renderer = ConsoleRenderer::new(io::stdout(), config.color);
    renderer.banner()?;

    let mut assessment = Assessment::new(knowledge);
    loop {
        let outcome = match assessment.run(&mut prompter, &mut renderer) {
            Ok(outcome) => outcome,
            Err(EngineError::InputClosed(symptom)) => {
                tracing::info!(%symptom, "input closed mid-assessment");
                renderer.note("\nInput closed; assessment abandoned.")?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        if config.save_reports && prompter.confirm("\nSave this report?")? == Some(true) {
            let report = outcome.into_report(knowledge);
            let dir = config.resolved_report_dir()?;
            let path = mindscreen_export::save_report(&dir, &report)?;
            renderer.note(&format!("Report saved to {}", path.display()))?;
        }

        if prompter.confirm("\nRun another assessment?")? != Some(true) {
            break;
        }
    }

    renderer.note("\nTake care of yourself.")?;
    Ok(())
}
