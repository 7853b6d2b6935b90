mod check;
mod cli;
mod engine;
mod error;
mod generator;
mod input;
mod report;
mod types;

use crate::error::GradeError;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const FINDINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, GradeError> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Grade(cmd) => {
            if !cmd.path.exists() {
                return Err(GradeError::PathNotFound(cmd.path.display().to_string()));
            }

            let course = input::load_course(&cmd.path)?;
            let categories = engine::category_averages(&course);
            let result = engine::grade_from_averages(&categories);
            debug!(percentage = result.percentage, grade = %result.grade, "computed grade");

            let output_format = match cmd.format {
                cli::ReportFormat::Text => report::OutputFormat::Text,
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let grade_report = report::build(&course, categories, result);
            let rendered = report::render(&grade_report, output_format)?;
            println!("{rendered}");

            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            if !cmd.path.exists() {
                return Err(GradeError::PathNotFound(cmd.path.display().to_string()));
            }

            let course = input::load_course(&cmd.path)?;
            let findings = check::check_course(&course);

            if findings.is_empty() {
                println!("check: no findings");
                return Ok(exit_code::SUCCESS);
            }

            for finding in &findings {
                println!("[WARN] {}: {}", finding.id, finding.message);
            }

            Ok(exit_code::FINDINGS)
        }
        cli::Commands::Init(cmd) => {
            let path = generator::write_template(&cmd.path, cmd.force)?;
            println!("course template: {}", path.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
