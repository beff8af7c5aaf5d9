//! Wiring between configuration, the snapshot file and the repositories

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use sicei_adapter::{
    InMemoryGradeRepository, InMemoryStore, InMemoryStudentRepository, InMemorySubjectRepository,
    RandomStudentIdSource, Snapshot, UuidSubjectIdSource,
};
use sicei_domain::{ListQuery, SortableField, StudentIdFormat};
use sicei_usecase::{
    GradeUseCases, IdAllocator, IdSource, ReportUseCases, StudentUseCases, SubjectUseCases,
};
use shared::AppConfig;
use tracing::debug;

use crate::commands::ListArgs;

/// Repositories over one shared store, plus the settings that shape them
pub struct AppContext {
    config: AppConfig,
    data_file: Option<PathBuf>,
    store: InMemoryStore,
    students: InMemoryStudentRepository,
    subjects: InMemorySubjectRepository,
    grades: InMemoryGradeRepository,
    student_ids: RandomStudentIdSource,
    subject_ids: UuidSubjectIdSource,
}

impl AppContext {
    /// Start from the snapshot at `data_file`, or an empty store if the
    /// file does not exist yet
    pub fn open(config: AppConfig, data_file: &Path) -> anyhow::Result<Self> {
        let snapshot = Snapshot::load_or_default(data_file)
            .with_context(|| format!("Failed to load data file {}", data_file.display()))?;
        let mut context = Self::with_store(config, snapshot.into_store());
        context.data_file = Some(data_file.to_path_buf());
        Ok(context)
    }

    /// A context that never touches the filesystem
    pub fn in_memory(config: AppConfig) -> Self {
        Self::with_store(config, InMemoryStore::new())
    }

    fn with_store(config: AppConfig, store: InMemoryStore) -> Self {
        Self {
            students: InMemoryStudentRepository::new(store.clone()),
            subjects: InMemorySubjectRepository::new(store.clone()),
            grades: InMemoryGradeRepository::new(store.clone())
                .with_passing_grade(config.passing_grade),
            student_ids: RandomStudentIdSource::new(StudentIdFormat::new(config.student_id_year)),
            subject_ids: UuidSubjectIdSource,
            store,
            data_file: None,
            config,
        }
    }

    /// Write the store back to the data file, if there is one
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(path) = &self.data_file else {
            return Ok(());
        };
        Snapshot::capture(&self.store)?
            .save(path)
            .with_context(|| format!("Failed to save data file {}", path.display()))?;
        debug!(path = %path.display(), "data saved");
        Ok(())
    }

    pub fn students(&self) -> StudentUseCases<'_> {
        StudentUseCases::new(&self.students)
    }

    pub fn subjects(&self) -> SubjectUseCases<'_> {
        SubjectUseCases::new(&self.subjects, &self.grades, &self.students)
    }

    pub fn grades(&self) -> GradeUseCases<'_> {
        GradeUseCases::new(&self.grades, &self.students, &self.subjects)
    }

    pub fn reports(&self) -> ReportUseCases<'_> {
        ReportUseCases::new(&self.grades, &self.students)
    }

    pub fn student_id_allocator(&self) -> IdAllocator<'_> {
        self.allocator(&self.student_ids)
    }

    pub fn subject_id_allocator(&self) -> IdAllocator<'_> {
        self.allocator(&self.subject_ids)
    }

    fn allocator<'a>(&self, source: &'a dyn IdSource) -> IdAllocator<'a> {
        IdAllocator::new(source).with_max_attempts(self.config.id_max_attempts)
    }

    /// Resolve listing flags, falling back to the configured page size
    pub fn list_query<F: SortableField>(&self, args: &ListArgs) -> ListQuery<F> {
        ListQuery::from_params(
            args.page_size.unwrap_or(self.config.default_page_size),
            args.page,
            args.sort_field.as_deref(),
            args.sort_order.as_deref(),
        )
    }
}
