//! sicei report command

use clap::{Args, Subcommand};
use sicei_adapter::mapper::{DashboardView, StudentReportView, SubjectReportView};
use sicei_domain::{StudentId, StudentSortField, SubjectId};

use super::ListArgs;
use crate::context::AppContext;
use crate::output::Outcome;

#[derive(Debug, Args)]
pub struct ReportCommand {
    #[command(subcommand)]
    pub command: ReportSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum ReportSubcommand {
    /// A student's grades per subject and their average
    Student { student_id: String },
    /// A subject's grades per student and their average
    Subject { subject_id: String },
    /// Students with their average and regular status
    Dashboard(ListArgs),
}

impl ReportCommand {
    pub fn run(&self, context: &AppContext) -> anyhow::Result<Outcome> {
        let reports = context.reports();

        match &self.command {
            ReportSubcommand::Student { student_id } => {
                let report = reports.get_student_subjects_grades(&StudentId::new(student_id))?;
                Outcome::read(&StudentReportView::new(&report.grades, report.average))
            }
            ReportSubcommand::Subject { subject_id } => {
                let report = reports.get_subject_students_grades(&SubjectId::new(subject_id))?;
                Outcome::read(&SubjectReportView::new(&report.grades, report.average))
            }
            ReportSubcommand::Dashboard(args) => {
                let query = context.list_query::<StudentSortField>(args);
                let views: Vec<DashboardView> = reports
                    .get_all_students_dashboard(&query)?
                    .iter()
                    .map(DashboardView::from)
                    .collect();
                Outcome::read(&views)
            }
        }
    }
}
