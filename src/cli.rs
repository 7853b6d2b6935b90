use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gradecalc",
    version,
    about = "Weighted course grade and GPA calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the grade for a course file
    Grade(GradeCommand),
    /// Report suspicious records in a course file without grading it
    Check(CheckCommand),
    /// Write a starter course.toml
    Init(InitCommand),
}

#[derive(Args)]
pub struct GradeCommand {
    /// Path to the course file
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the course file
    pub path: PathBuf,
}

#[derive(Args)]
pub struct InitCommand {
    /// Directory to write the template into
    pub path: PathBuf,
    /// Overwrite an existing course.toml
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}
