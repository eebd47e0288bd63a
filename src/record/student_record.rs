//! Student Record - the single entity type kept by the store

use std::fmt;

use serde::{Deserialize, Serialize};

use super::StudentPatch;

/// Student Record represents one enrolled student.
///
/// The persisted JSON object uses the field names `id`, `name`, `age`,
/// `grade` and `subjects`.
///
/// `id` is fixed at construction; every other field can be replaced through
/// a [`StudentPatch`] applied by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentRecord {
    id: i64,
    name: String,
    age: u32,
    grade: String,
    subjects: Vec<String>,
}

impl StudentRecord {
    /// Create a new student record.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier within a store
    /// * `name` - Full name
    /// * `age` - Age in years
    /// * `grade` - Letter grade (e.g., "A", "B+")
    /// * `subjects` - Enrolled subjects, in order
    ///
    /// Fields are taken as given. Operator input goes through
    /// [`crate::validate`] before it reaches this constructor.
    #[must_use]
    pub fn new<S: Into<String>>(
        id: i64,
        name: impl Into<String>,
        age: u32,
        grade: impl Into<String>,
        subjects: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            grade: grade.into(),
            subjects: subjects.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the student ID.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Get the student name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the student age.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Get the letter grade.
    #[must_use]
    pub fn grade(&self) -> &str {
        &self.grade
    }

    /// Get the enrolled subjects in insertion order.
    #[must_use]
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// Apply the non-empty fields of `patch`.
    ///
    /// A blank `name`/`grade` or an empty subject list means "no change".
    /// An age of 0 is a real value and is applied.
    pub(crate) fn apply(&mut self, patch: StudentPatch) {
        if let Some(name) = patch.name.filter(|n| !n.is_empty()) {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(grade) = patch.grade.filter(|g| !g.is_empty()) {
            self.grade = grade;
        }
        if let Some(subjects) = patch.subjects.filter(|s| !s.is_empty()) {
            self.subjects = subjects;
        }
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Age: {}, Grade: {}, Subjects: {}",
            self.id,
            self.name,
            self.age,
            self.grade,
            self.subjects.join(", ")
        )
    }
}
