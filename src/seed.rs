//! Default seed set used when no persisted data exists

use crate::record::StudentRecord;

/// The ten default students (ids 101 to 110), in listing order.
#[must_use]
pub fn default_students() -> Vec<StudentRecord> {
    vec![
        StudentRecord::new(101, "Aarav Singh", 18, "A", ["Math", "Physics"]),
        StudentRecord::new(102, "Saanvi Kapoor", 19, "B", ["English", "History"]),
        StudentRecord::new(103, "Vihaan Sharma", 20, "A-", ["Chemistry", "Biology"]),
        StudentRecord::new(104, "Ishita Reddy", 21, "B+", ["Geography", "History"]),
        StudentRecord::new(105, "Advit Gupta", 22, "A+", ["Computer Science", "Physics"]),
        StudentRecord::new(106, "Kiara Iyer", 23, "B", ["Math", "Economics"]),
        StudentRecord::new(107, "Reyansh Patel", 20, "A", ["Chemistry", "Math"]),
        StudentRecord::new(108, "Mira Deshmukh", 18, "B+", ["English", "Biology"]),
        StudentRecord::new(109, "Arjun Rao", 21, "A-", ["Physics", "Economics"]),
        StudentRecord::new(110, "Tara Verma", 22, "A", ["Computer Science", "Math"]),
    ]
}
