//! Student record schema
//!
//! ## Usage
//!
//! ```rust
//! use student_db::record::{StudentPatch, StudentRecord};
//!
//! let record = StudentRecord::new(1, "Alice", 20, "A", ["Math", "Science"]);
//! assert_eq!(record.subjects().len(), 2);
//!
//! // Partial update: only age and grade change
//! let patch = StudentPatch::new().age(21).grade("A+");
//! # let _ = patch;
//! ```

mod patch;
mod student_record;

pub use patch::StudentPatch;
pub use student_record::StudentRecord;
