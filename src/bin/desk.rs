//! Command-line front desk for clinic-desk.
//!
//! Fills forms to disk and runs the roster helpers without starting the
//! HTTP service.
//!
//! # Usage
//!
//! ```bash
//! # Write the starter template
//! cargo run --bin desk -- template init
//!
//! # Fill the template and save filled-form.docx
//! cargo run --bin desk -- fill --name "John Doe" --age 30 --sex Male \
//!     --diagnosis Hypertension --date 2024-03-13
//!
//! # Assign shifts
//! cargo run --bin desk -- shifts Alice Bob Charlie --department Cardiology
//!
//! # Spread tasks over staff
//! cargo run --bin desk -- distribute --staff Alice,Bob,Charlie --task T1=2 --task T2=3
//! ```
//!
//! # Environment Variables
//!
//! - `TEMPLATE_PATH` (optional): default template for `fill`

use clinic_desk::application::services::{
    DocumentService, RandomStrategy, RotationStrategy, ShiftScheduler, WorkloadService,
};
use clinic_desk::config::{DEFAULT_OUTPUT_FILENAME, DEFAULT_TEMPLATE_PATH};
use clinic_desk::domain::entities::{FillMode, PatientRecord};
use clinic_desk::infrastructure::docx::starter_template;
use clinic_desk::infrastructure::template_store::FsTemplateStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::Confirm;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// CLI tool for clinic-desk.
#[derive(Parser)]
#[command(name = "desk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Fill the form template and save it
    Fill {
        #[arg(long)]
        name: String,

        #[arg(long)]
        age: String,

        #[arg(long)]
        sex: String,

        #[arg(long)]
        diagnosis: String,

        /// Defaults to today's date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Template to fill (defaults to $TEMPLATE_PATH or the allergist template)
        #[arg(short, long)]
        template: Option<PathBuf>,

        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILENAME)]
        output: PathBuf,

        #[arg(short, long, value_enum, default_value_t = ModeArg::Run)]
        mode: ModeArg,

        /// Overwrite an existing output file without asking
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Template file operations
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// Assign a working shift to each staff member
    Shifts {
        /// Staff identifiers
        #[arg(required = true)]
        staff: Vec<String>,

        #[arg(short, long)]
        department: Option<String>,

        #[arg(short, long, value_enum, default_value_t = StrategyArg::Random)]
        strategy: StrategyArg,

        /// Seed for the random strategy
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Hand tasks to the least-loaded staff member
    Distribute {
        /// Comma-separated staff identifiers, in tie-break order
        #[arg(long, value_delimiter = ',', required = true)]
        staff: Vec<String>,

        /// Task as NAME=WEIGHT (repeatable, processed in order)
        #[arg(long = "task", value_parser = parse_task, required = true)]
        tasks: Vec<(String, f64)>,
    },
}

/// Template subcommands.
#[derive(Subcommand)]
enum TemplateAction {
    /// Write the built-in allergist prescription template
    Init {
        #[arg(short, long, default_value = DEFAULT_TEMPLATE_PATH)]
        output: PathBuf,

        /// Overwrite without asking
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Paragraph,
    Run,
}

impl From<ModeArg> for FillMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Paragraph => FillMode::Paragraph,
            ModeArg::Run => FillMode::Run,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Random,
    Rotation,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fill {
            name,
            age,
            sex,
            diagnosis,
            date,
            template,
            output,
            mode,
            yes,
        } => {
            let record = PatientRecord {
                name,
                age,
                sex,
                diagnosis,
                date: date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string()),
            };
            let template = template
                .or_else(|| std::env::var("TEMPLATE_PATH").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_PATH));
            fill(record, &template, &output, mode.into(), yes).await?
        }
        Commands::Template {
            action: TemplateAction::Init { output, yes },
        } => init_template(&output, yes)?,
        Commands::Shifts {
            staff,
            department,
            strategy,
            seed,
        } => shifts(staff, department, strategy, seed),
        Commands::Distribute { staff, tasks } => distribute(staff, tasks),
    }

    Ok(())
}

/// Fills the template and saves the document.
async fn fill(
    record: PatientRecord,
    template: &Path,
    output: &Path,
    mode: FillMode,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "📝 Fill Form".bright_blue().bold());
    println!();
    println!("  Template: {}", template.display().to_string().cyan());
    println!("  Mode:     {}", mode.to_string().cyan());
    println!();

    if !confirm_overwrite(output, skip_confirm)? {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let service = DocumentService::new(Arc::new(FsTemplateStore::new(template)));
    let written = service
        .generate_to_file(&record, mode, output)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fill form: {}", e))?;

    println!(
        "{} {} ({} bytes)",
        "✅ Document saved as".green().bold(),
        output.display().to_string().bright_yellow(),
        written
    );
    Ok(())
}

/// Writes the starter template to disk.
fn init_template(output: &Path, skip_confirm: bool) -> Result<()> {
    if !confirm_overwrite(output, skip_confirm)? {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let bytes = starter_template().context("Failed to build starter template")?;
    std::fs::write(output, bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} {}",
        "✅ Template written to".green().bold(),
        output.display().to_string().bright_yellow()
    );
    Ok(())
}

/// Prints a shift assignment.
fn shifts(staff: Vec<String>, department: Option<String>, strategy: StrategyArg, seed: Option<u64>) {
    let mut scheduler = ShiftScheduler::new(staff);
    if let Some(department) = &department {
        scheduler = scheduler.with_department(department.clone());
    }
    scheduler = match (strategy, seed) {
        (StrategyArg::Random, Some(seed)) => scheduler.with_strategy(RandomStrategy::with_seed(seed)),
        (StrategyArg::Random, None) => scheduler,
        (StrategyArg::Rotation, _) => scheduler.with_strategy(RotationStrategy::new()),
    };

    let title = match &department {
        Some(name) => format!("🗓  Shift schedule for {name}"),
        None => "🗓  Shift schedule".to_string(),
    };
    println!("{}", title.bright_blue().bold());
    println!();
    println!(
        "  {:<24} {:<12}",
        "Staff".bright_white().bold(),
        "Shift".bright_white().bold()
    );
    println!("  {}", "─".repeat(37).bright_black());

    for (member, label) in scheduler.optimize_schedule() {
        println!("  {:<24} {:<12}", member, label.to_string().cyan());
    }
    println!();
}

/// Prints where each task went and the final loads.
fn distribute(staff: Vec<String>, tasks: Vec<(String, f64)>) {
    let mut workload = WorkloadService::new(staff);

    println!("{}", "⚖️  Task distribution".bright_blue().bold());
    println!();

    for assignment in workload.distribute_tasks(tasks) {
        println!(
            "  {:<16} → {:<16} weight {:<6} total {}",
            assignment.task,
            assignment.staff.cyan(),
            assignment.weight,
            assignment.total.to_string().bright_yellow()
        );
    }

    println!();
    println!("{}", "Final workload:".bright_white().bold());
    for (member, load) in workload.loads() {
        println!("  {:<16} {}", member, load);
    }
    println!();
}

/// Asks before clobbering an existing file. Returns whether to proceed.
fn confirm_overwrite(path: &Path, skip_confirm: bool) -> Result<bool> {
    if skip_confirm || !path.exists() {
        return Ok(true);
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("{} exists. Overwrite?", path.display()))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

/// Parses `NAME=WEIGHT`.
fn parse_task(value: &str) -> Result<(String, f64), String> {
    let (name, weight) = value
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=WEIGHT, got '{value}'"))?;
    let weight: f64 = weight
        .trim()
        .parse()
        .map_err(|_| format!("invalid weight '{weight}' for task '{name}'"))?;

    if name.trim().is_empty() {
        return Err("task name must not be empty".to_string());
    }
    if !weight.is_finite() || weight < 0.0 {
        return Err(format!("weight for '{name}' must be a non-negative number"));
    }

    Ok((name.trim().to_string(), weight))
}
