//! # student-db: Student Record Store
//!
//! An interactive, single-user record manager for student records, kept
//! in memory and persisted as a JSON array in a flat file.
//!
//! ## Layout
//!
//! - [`record`]: the `StudentRecord` type and the `StudentPatch` update
//! - [`store`]: insertion-ordered `RecordStore` with the unique-id invariant
//! - [`validate`]: parsing of raw operator input into typed fields
//! - [`codec`]: whole-file JSON load/save, seed fallback
//! - [`seed`]: the ten default records
//! - [`shell`]: the menu-driven prompt loop
//!
//! ## Example Usage
//!
//! ```rust
//! use student_db::record::{StudentPatch, StudentRecord};
//! use student_db::store::RecordStore;
//!
//! let mut store = RecordStore::new();
//! store.add(StudentRecord::new(1, "Alice", 20, "A", ["Math", "Science"]))?;
//! store.add(StudentRecord::new(2, "Bob", 22, "B", ["English", "History"]))?;
//!
//! store.update(1, StudentPatch::new().age(21).grade("A+"))?;
//! assert_eq!(store.find(1).map(|r| r.grade()), Some("A+"));
//!
//! store.delete(1)?;
//! assert_eq!(store.len(), 1);
//! # Ok::<(), student_db::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod codec;
pub mod config;
pub mod error;
pub mod logger;
pub mod record;
pub mod seed;
pub mod shell;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
