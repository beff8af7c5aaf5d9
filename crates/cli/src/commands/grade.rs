//! sicei grade command

use clap::{Args, Subcommand};
use serde_json::json;
use sicei_adapter::mapper::{GradeRecord, GradeToShowStudentView, GradeToShowSubjectView};
use sicei_domain::{Grade, GradeId, GradePatch, GradeSortField, NewGrade, StudentId, SubjectId};

use super::ListArgs;
use crate::context::AppContext;
use crate::output::Outcome;

#[derive(Debug, Args)]
pub struct GradeCommand {
    #[command(subcommand)]
    pub command: GradeSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum GradeSubcommand {
    /// Record a grade and refresh the student's average
    Create {
        #[arg(long)]
        student_id: String,
        #[arg(long)]
        subject_id: String,
        #[arg(long, allow_negative_numbers = true)]
        value: f64,
    },
    /// Show one grade
    Get { id: i64 },
    /// One page of grades
    List(ListArgs),
    /// Grades of one student
    ByStudent {
        student_id: String,
        /// Show subject names instead of subject ids
        #[arg(long)]
        names: bool,
    },
    /// Grades given in one subject
    BySubject {
        subject_id: String,
        /// Show student names instead of student ids
        #[arg(long)]
        names: bool,
    },
    /// Change a grade value
    Update {
        id: i64,
        #[arg(long, allow_negative_numbers = true)]
        value: Option<f64>,
    },
    /// Remove a grade
    Delete { id: i64 },
}

fn records(grades: &[Grade]) -> Vec<GradeRecord> {
    grades.iter().map(GradeRecord::from).collect()
}

impl GradeCommand {
    pub fn run(&self, context: &AppContext) -> anyhow::Result<Outcome> {
        let grades = context.grades();

        match &self.command {
            GradeSubcommand::Create {
                student_id,
                subject_id,
                value,
            } => {
                let draft = NewGrade::new(StudentId::new(student_id), SubjectId::new(subject_id), *value);
                let grade = grades.create(draft)?;
                Outcome::changed(&GradeRecord::from(&grade))
            }
            GradeSubcommand::Get { id } => {
                let grade = grades.get_by_id(GradeId::new(*id))?;
                Outcome::read(&GradeRecord::from(&grade))
            }
            GradeSubcommand::List(args) => {
                let query = context.list_query::<GradeSortField>(args);
                Outcome::read(&records(&grades.get_all(&query)?))
            }
            GradeSubcommand::ByStudent { student_id, names } => {
                let student_id = StudentId::new(student_id);
                if *names {
                    let views: Vec<GradeToShowStudentView> = grades
                        .get_student_grades_to_show(&student_id)?
                        .iter()
                        .map(Into::into)
                        .collect();
                    Outcome::read(&views)
                } else {
                    Outcome::read(&records(&grades.get_by_student_id(&student_id)?))
                }
            }
            GradeSubcommand::BySubject { subject_id, names } => {
                let subject_id = SubjectId::new(subject_id);
                if *names {
                    let views: Vec<GradeToShowSubjectView> = grades
                        .get_subject_grades_to_show(&subject_id)?
                        .iter()
                        .map(Into::into)
                        .collect();
                    Outcome::read(&views)
                } else {
                    Outcome::read(&records(&grades.get_by_subject_id(&subject_id)?))
                }
            }
            GradeSubcommand::Update { id, value } => {
                let patch = GradePatch { value: *value };
                let grade = grades.update(GradeId::new(*id), patch)?;
                Outcome::changed(&GradeRecord::from(&grade))
            }
            GradeSubcommand::Delete { id } => {
                grades.delete(GradeId::new(*id))?;
                Outcome::changed(&json!({ "deleted": id }))
            }
        }
    }
}
