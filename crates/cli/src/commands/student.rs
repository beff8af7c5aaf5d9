//! sicei student command

use clap::{Args, Subcommand};
use serde_json::json;
use sicei_adapter::mapper::StudentRecord;
use sicei_domain::{NewStudent, StudentId, StudentPatch, StudentSortField};

use super::ListArgs;
use crate::context::AppContext;
use crate::output::Outcome;

#[derive(Debug, Args)]
pub struct StudentCommand {
    #[command(subcommand)]
    pub command: StudentSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum StudentSubcommand {
    /// Enrol a new student; the id is generated
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        lastname: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        semester: i32,
    },
    /// Show one student
    Get { id: String },
    /// Students of one semester
    Semester { semester: i32 },
    /// One page of students
    List(ListArgs),
    /// Change the given fields only
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        lastname: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        semester: Option<i32>,
    },
    /// Remove a student and their grades
    Delete { id: String },
}

impl StudentCommand {
    pub fn run(&self, context: &AppContext) -> anyhow::Result<Outcome> {
        let students = context.students();

        match &self.command {
            StudentSubcommand::Create {
                name,
                lastname,
                email,
                semester,
            } => {
                let draft = NewStudent::new(name, lastname, email, *semester);
                let student = students.create(draft, &context.student_id_allocator())?;
                Outcome::changed(&StudentRecord::from(&student))
            }
            StudentSubcommand::Get { id } => {
                let student = students.get_by_id(&StudentId::new(id))?;
                Outcome::read(&StudentRecord::from(&student))
            }
            StudentSubcommand::Semester { semester } => {
                let records: Vec<StudentRecord> = students
                    .get_by_semester(*semester)?
                    .iter()
                    .map(StudentRecord::from)
                    .collect();
                Outcome::read(&records)
            }
            StudentSubcommand::List(args) => {
                let query = context.list_query::<StudentSortField>(args);
                let records: Vec<StudentRecord> = students
                    .get_all(&query)?
                    .iter()
                    .map(StudentRecord::from)
                    .collect();
                Outcome::read(&records)
            }
            StudentSubcommand::Update {
                id,
                name,
                lastname,
                email,
                semester,
            } => {
                let patch = StudentPatch {
                    name: name.clone(),
                    lastname: lastname.clone(),
                    email: email.clone(),
                    semester: *semester,
                };
                let student = students.update(&StudentId::new(id), patch)?;
                Outcome::changed(&StudentRecord::from(&student))
            }
            StudentSubcommand::Delete { id } => {
                students.delete(&StudentId::new(id))?;
                Outcome::changed(&json!({ "deleted": id }))
            }
        }
    }
}
