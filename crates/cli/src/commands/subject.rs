//! sicei subject command

use clap::{Args, Subcommand};
use serde_json::json;
use sicei_adapter::mapper::SubjectRecord;
use sicei_domain::{NewSubject, SubjectId, SubjectPatch, SubjectSortField};

use super::ListArgs;
use crate::context::AppContext;
use crate::output::Outcome;

#[derive(Debug, Args)]
pub struct SubjectCommand {
    #[command(subcommand)]
    pub command: SubjectSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum SubjectSubcommand {
    /// Add a subject; the id is a generated uuid
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        credits: i32,
        #[arg(long)]
        semester: i32,
    },
    /// Show one subject
    Get { id: String },
    /// One page of subjects
    List(ListArgs),
    /// Change the given fields only
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        credits: Option<i32>,
        #[arg(long)]
        semester: Option<i32>,
    },
    /// Remove a subject and the grades given in it
    Delete { id: String },
}

impl SubjectCommand {
    pub fn run(&self, context: &AppContext) -> anyhow::Result<Outcome> {
        let subjects = context.subjects();

        match &self.command {
            SubjectSubcommand::Create {
                name,
                description,
                credits,
                semester,
            } => {
                let draft = NewSubject::new(name, description, *credits, *semester);
                let subject = subjects.create(draft, &context.subject_id_allocator())?;
                Outcome::changed(&SubjectRecord::from(&subject))
            }
            SubjectSubcommand::Get { id } => {
                let subject = subjects.get_by_id(&SubjectId::new(id))?;
                Outcome::read(&SubjectRecord::from(&subject))
            }
            SubjectSubcommand::List(args) => {
                let query = context.list_query::<SubjectSortField>(args);
                let records: Vec<SubjectRecord> = subjects
                    .get_all(&query)?
                    .iter()
                    .map(SubjectRecord::from)
                    .collect();
                Outcome::read(&records)
            }
            SubjectSubcommand::Update {
                id,
                name,
                description,
                credits,
                semester,
            } => {
                let patch = SubjectPatch {
                    name: name.clone(),
                    description: description.clone(),
                    credits: *credits,
                    semester: *semester,
                };
                let subject = subjects.update(&SubjectId::new(id), patch)?;
                Outcome::changed(&SubjectRecord::from(&subject))
            }
            SubjectSubcommand::Delete { id } => {
                subjects.delete(&SubjectId::new(id))?;
                Outcome::changed(&json!({ "deleted": id }))
            }
        }
    }
}
