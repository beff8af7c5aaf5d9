//! List queries - pagination plus an optional single-field sort
//!
//! Sort fields are checked against a per-entity allow-list. An unknown
//! field or order does not fail the query; it simply yields no sort and
//! the repository returns its natural order.

use core::cmp::Ordering;

/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// 1-indexed page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_size: usize,
    page: usize,
}

impl PageRequest {
    /// `page` starts at 1
    pub fn new(page_size: usize, page: usize) -> Self {
        Self { page_size, page }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// A usable request has a positive page size and a page of at least 1
    pub fn is_valid(&self) -> bool {
        self.page_size > 0 && self.page > 0
    }

    /// Number of items skipped before this page
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Cut this page out of an already ordered sequence.
    ///
    /// Pages past the end come back empty.
    pub fn slice<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset())
            .take(self.page_size)
            .collect()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page: 1,
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Accepts "asc" / "desc" in any case
    pub fn parse(order: &str) -> Option<Self> {
        match order.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Turn an ascending comparison into one in this direction
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// A field that may appear in a sort clause
pub trait SortableField: Copy + Sized + 'static {
    /// Every field callers are allowed to sort on
    const ALLOWED: &'static [Self];

    /// Name used by callers (matches the storage column)
    fn as_str(&self) -> &'static str;

    fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALLOWED.iter().copied().find(|f| f.as_str() == name)
    }
}

/// Sortable student fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentSortField {
    Id,
    Name,
    Lastname,
    Email,
    Semester,
    Average,
}

impl SortableField for StudentSortField {
    const ALLOWED: &'static [Self] = &[
        StudentSortField::Id,
        StudentSortField::Name,
        StudentSortField::Lastname,
        StudentSortField::Email,
        StudentSortField::Semester,
        StudentSortField::Average,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            StudentSortField::Id => "id",
            StudentSortField::Name => "name",
            StudentSortField::Lastname => "lastname",
            StudentSortField::Email => "email",
            StudentSortField::Semester => "semester",
            StudentSortField::Average => "average",
        }
    }
}

/// Sortable subject fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectSortField {
    Id,
    Name,
    Credits,
    Semester,
}

impl SortableField for SubjectSortField {
    const ALLOWED: &'static [Self] = &[
        SubjectSortField::Id,
        SubjectSortField::Name,
        SubjectSortField::Credits,
        SubjectSortField::Semester,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            SubjectSortField::Id => "id",
            SubjectSortField::Name => "name",
            SubjectSortField::Credits => "credits",
            SubjectSortField::Semester => "semester",
        }
    }
}

/// Sortable grade fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeSortField {
    Id,
    StudentId,
    SubjectId,
    Value,
}

impl SortableField for GradeSortField {
    const ALLOWED: &'static [Self] = &[
        GradeSortField::Id,
        GradeSortField::StudentId,
        GradeSortField::SubjectId,
        GradeSortField::Value,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            GradeSortField::Id => "id",
            GradeSortField::StudentId => "student_id",
            GradeSortField::SubjectId => "subject_id",
            GradeSortField::Value => "value",
        }
    }
}

/// A resolved sort clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<F> {
    pub field: F,
    pub order: SortOrder,
}

impl<F: SortableField> Sort<F> {
    pub fn new(field: F, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Resolve raw caller input. Both parts must be present and valid,
    /// anything else means "no sort".
    pub fn parse(field: Option<&str>, order: Option<&str>) -> Option<Self> {
        let field = F::parse(field?)?;
        let order = SortOrder::parse(order?)?;
        Some(Self { field, order })
    }
}

/// Pagination plus optional sort for `get_all` style queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery<F> {
    pub page: PageRequest,
    pub sort: Option<Sort<F>>,
}

impl<F: SortableField> ListQuery<F> {
    pub fn new(page: PageRequest) -> Self {
        Self { page, sort: None }
    }

    pub fn with_sort(mut self, sort: Sort<F>) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Build a query from raw request parameters
    pub fn from_params(
        page_size: usize,
        page: usize,
        sort_field: Option<&str>,
        sort_order: Option<&str>,
    ) -> Self {
        Self {
            page: PageRequest::new(page_size, page),
            sort: Sort::parse(sort_field, sort_order),
        }
    }
}

impl<F: SortableField> Default for ListQuery<F> {
    fn default() -> Self {
        Self::new(PageRequest::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offsets() {
        assert_eq!(PageRequest::new(10, 1).offset(), 0);
        assert_eq!(PageRequest::new(10, 3).offset(), 20);
        assert!(!PageRequest::new(0, 1).is_valid());
        assert!(!PageRequest::new(10, 0).is_valid());
    }

    #[test]
    fn test_slice_pages_are_disjoint() {
        let items: Vec<u32> = (1..=7).collect();

        let first = PageRequest::new(3, 1).slice(items.clone());
        let second = PageRequest::new(3, 2).slice(items.clone());
        let third = PageRequest::new(3, 3).slice(items.clone());
        let beyond = PageRequest::new(3, 9).slice(items);

        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(second, vec![4, 5, 6]);
        assert_eq!(third, vec![7]);
        assert!(beyond.is_empty());
    }

    #[test]
    fn test_sort_allow_list() {
        let sort = Sort::<StudentSortField>::parse(Some("average"), Some("DESC"));
        assert_eq!(
            sort,
            Some(Sort::new(StudentSortField::Average, SortOrder::Desc))
        );

        // Not on the allow-list: ignored rather than rejected
        assert_eq!(Sort::<StudentSortField>::parse(Some("password"), Some("asc")), None);
        assert_eq!(Sort::<SubjectSortField>::parse(Some("average"), Some("asc")), None);

        // Both halves are needed
        assert_eq!(Sort::<GradeSortField>::parse(Some("value"), None), None);
        assert_eq!(Sort::<GradeSortField>::parse(Some("value"), Some("up")), None);
    }

    #[test]
    fn test_order_apply() {
        assert_eq!(SortOrder::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortOrder::Desc.apply(Ordering::Less), Ordering::Greater);
    }
}
