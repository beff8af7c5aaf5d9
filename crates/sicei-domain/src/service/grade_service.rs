//! GradeService - Average computation
//!
//! Used both to refresh the cached `Student::average` and to compute
//! report averages on read.

use crate::model::grade::Grade;

/// Stateless grade arithmetic
#[derive(Debug, Clone, Copy, Default)]
pub struct GradeService;

impl GradeService {
    pub fn new() -> Self {
        Self
    }

    /// Arithmetic mean of the values, 0.0 when there are none
    pub fn average_of<I>(&self, values: I) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        let (sum, count) = values
            .into_iter()
            .fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v, count + 1));

        if count == 0 {
            return 0.0;
        }
        sum / count as f64
    }

    /// Mean grade value, 0.0 for an empty slice
    pub fn calculate_average(&self, grades: &[Grade]) -> f64 {
        self.average_of(grades.iter().map(Grade::value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::grade::{GradeId, NewGrade};
    use crate::model::student::StudentId;
    use crate::model::subject::SubjectId;

    fn grade(id: i64, value: f64) -> Grade {
        Grade::new(
            GradeId::new(id),
            NewGrade::new(StudentId::new("A25000001"), SubjectId::new("math"), value),
        )
    }

    #[test]
    fn test_average_of_grades() {
        let service = GradeService::new();
        let grades = vec![grade(1, 80.0), grade(2, 100.0), grade(3, 60.0)];

        assert!((service.calculate_average(&grades) - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_without_grades() {
        assert_eq!(GradeService::new().calculate_average(&[]), 0.0);
        assert_eq!(GradeService::new().average_of(std::iter::empty()), 0.0);
    }
}
