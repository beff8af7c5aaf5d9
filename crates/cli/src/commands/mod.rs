//! CLI Commands
//!
//! One subcommand per resource, mirroring the HTTP routes of the records
//! service: `student`, `subject`, `grade` and `report`.

pub mod grade;
pub mod report;
pub mod student;
pub mod subject;

pub use grade::GradeCommand;
pub use report::ReportCommand;
pub use student::StudentCommand;
pub use subject::SubjectCommand;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::context::AppContext;
use crate::output::Outcome;

#[derive(Debug, Parser)]
#[command(name = "sicei")]
#[command(about = "SICEI - Student, subject and grade records")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (JSON or YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Data file, overrides `data_file` from the configuration
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage students
    Student(StudentCommand),
    /// Manage subjects
    Subject(SubjectCommand),
    /// Manage grades
    Grade(GradeCommand),
    /// Reports and the student dashboard
    Report(ReportCommand),
}

impl Commands {
    pub fn run(&self, context: &AppContext) -> anyhow::Result<Outcome> {
        match self {
            Commands::Student(cmd) => cmd.run(context),
            Commands::Subject(cmd) => cmd.run(context),
            Commands::Grade(cmd) => cmd.run(context),
            Commands::Report(cmd) => cmd.run(context),
        }
    }
}

/// Pagination and sorting flags shared by every listing
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Items per page (defaults to the configured page size)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Field to sort by; unknown fields are ignored
    #[arg(long)]
    pub sort_field: Option<String>,

    /// `asc` or `desc`
    #[arg(long)]
    pub sort_order: Option<String>,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            page_size: None,
            page: 1,
            sort_field: None,
            sort_order: None,
        }
    }
}
