//! Student Patch - partial update description

/// Set of field replacements for an existing [`super::StudentRecord`].
///
/// Absent fields are left alone. Built with chained setters:
///
/// ```rust
/// use student_db::record::StudentPatch;
///
/// let patch = StudentPatch::new().age(21).grade("A+");
/// assert!(!patch.is_empty());
/// assert!(StudentPatch::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub(crate) name: Option<String>,
    pub(crate) age: Option<u32>,
    pub(crate) grade: Option<String>,
    pub(crate) subjects: Option<Vec<String>>,
}

impl StudentPatch {
    /// Create an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the age.
    #[must_use]
    pub const fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Replace the grade.
    #[must_use]
    pub fn grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    /// Replace the subject list.
    #[must_use]
    pub fn subjects<S: Into<String>>(mut self, subjects: impl IntoIterator<Item = S>) -> Self {
        self.subjects = Some(subjects.into_iter().map(Into::into).collect());
        self
    }

    /// True when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.grade.is_none() && self.subjects.is_none()
    }
}
