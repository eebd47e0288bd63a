//! Interactive prompt loop
//!
//! [`Shell`] drives a [`RecordStore`] from line-oriented text input. It is
//! generic over its streams so sessions can be scripted in tests:
//!
//! ```rust
//! use std::io::Cursor;
//! use student_db::config::Config;
//! use student_db::shell::{Exit, Shell};
//! use student_db::store::RecordStore;
//!
//! let script = "2\n7\nAda\n36\nA\nMath\n1\n";
//! let mut out = Vec::new();
//! let mut shell = Shell::new(RecordStore::new(), Config::default(), Cursor::new(script), &mut out);
//! // Input ends without choosing 5: nothing is written to disk
//! assert_eq!(shell.run()?, Exit::Interrupted);
//! assert!(shell.store().contains(7));
//! # Ok::<(), student_db::Error>(())
//! ```
//!
//! Validation and lookup errors are printed as `Error: ...` lines and the
//! loop carries on. Only output failures end the loop with an error.

mod menu;

pub use menu::{MenuChoice, UpdateField, FIELD_MENU, MAIN_MENU};

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::config::Config;
use crate::record::{StudentPatch, StudentRecord};
use crate::store::RecordStore;
use crate::{codec, validate, Error, Result};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Operator chose "Save and Exit" and the file was written.
    Saved,
    /// Operator chose "Save and Exit" but the write failed (reason printed).
    SaveFailed,
    /// Input closed before "Save and Exit"; nothing was saved.
    Interrupted,
}

/// Outcome of one menu action
enum Step {
    Continue,
    Eof,
}

/// Prompt loop over a record store.
pub struct Shell<R, W> {
    store: RecordStore,
    config: Config,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell that owns `store` and talks over `input`/`output`.
    #[must_use]
    pub fn new(store: RecordStore, config: Config, input: R, output: W) -> Self {
        Self {
            store,
            config,
            input,
            output,
        }
    }

    /// The store as currently edited.
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Give the store back, ending the session.
    #[must_use]
    pub fn into_store(self) -> RecordStore {
        self.store
    }

    /// Run the menu loop until the operator exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading input or writing output fails.
    /// Save failures are reported to the operator and surface as
    /// [`Exit::SaveFailed`], not as an error.
    pub fn run(&mut self) -> Result<Exit> {
        loop {
            writeln!(self.output, "{MAIN_MENU}")?;
            let Some(line) = self.read_line("Enter your choice: ")? else {
                return self.interrupted();
            };

            let outcome = match line.parse::<MenuChoice>() {
                Ok(MenuChoice::View) => self.view(),
                Ok(MenuChoice::Add) => self.add(),
                Ok(MenuChoice::Update) => self.update(),
                Ok(MenuChoice::Delete) => self.delete(),
                Ok(MenuChoice::SaveAndExit) => return self.save_and_exit(),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(Step::Continue) => {}
                Ok(Step::Eof) => return self.interrupted(),
                Err(Error::Io(e)) => return Err(Error::Io(e)),
                Err(e) => writeln!(self.output, "Error: {e}")?,
            }
        }
    }

    fn view(&mut self) -> Result<Step> {
        if self.store.is_empty() {
            writeln!(self.output, "No students available.")?;
            return Ok(Step::Continue);
        }
        writeln!(self.output, "\n--- All Students ---")?;
        for record in self.store.list() {
            writeln!(self.output, "{record}")?;
        }
        Ok(Step::Continue)
    }

    fn add(&mut self) -> Result<Step> {
        let Some(id) = self.read_line("Enter student ID: ")? else {
            return Ok(Step::Eof);
        };
        let id = validate::validate_id(&id)?;
        if !validate::validate_id_unique(&self.store, id) {
            return Err(Error::DuplicateId(id));
        }

        let Some(name) = self.read_line("Enter student name: ")? else {
            return Ok(Step::Eof);
        };
        let Some(age) = self.read_line("Enter student age: ")? else {
            return Ok(Step::Eof);
        };
        let Some(grade) = self.read_line("Enter student grade: ")? else {
            return Ok(Step::Eof);
        };
        let Some(subjects) = self.read_line("Enter subjects (comma-separated): ")? else {
            return Ok(Step::Eof);
        };

        let record = StudentRecord::new(
            id,
            validate::validate_name(&name)?,
            validate::validate_age(&age)?,
            grade.trim(),
            validate::validate_subjects(&subjects)?,
        );
        self.store.add(record)?;
        writeln!(self.output, "Student added successfully.")?;
        Ok(Step::Continue)
    }

    fn update(&mut self) -> Result<Step> {
        let Some(id) = self.read_line("Enter student ID to update: ")? else {
            return Ok(Step::Eof);
        };
        let id = validate::validate_id(&id)?;
        if !self.store.contains(id) {
            return Err(Error::NotFound(id));
        }

        writeln!(self.output, "{FIELD_MENU}")?;
        let Some(field) = self.read_line("Enter the number of the attribute to update: ")? else {
            return Ok(Step::Eof);
        };
        let field: UpdateField = field.parse()?;

        let Some(value) = self.read_line(field.prompt())? else {
            return Ok(Step::Eof);
        };
        let value = value.trim();
        if value.is_empty() {
            writeln!(self.output, "No change made.")?;
            return Ok(Step::Continue);
        }

        let patch = match field {
            UpdateField::Name => StudentPatch::new().name(value),
            UpdateField::Age => StudentPatch::new().age(validate::validate_age(value)?),
            UpdateField::Grade => StudentPatch::new().grade(value),
            UpdateField::Subjects => {
                StudentPatch::new().subjects(validate::validate_subjects(value)?)
            }
        };
        self.store.update(id, patch)?;
        writeln!(self.output, "Student details updated successfully.")?;
        Ok(Step::Continue)
    }

    fn delete(&mut self) -> Result<Step> {
        let Some(id) = self.read_line("Enter student ID to delete: ")? else {
            return Ok(Step::Eof);
        };
        let id = validate::validate_id(&id)?;
        self.store.delete(id)?;
        writeln!(self.output, "Student with ID {id} deleted successfully.")?;
        Ok(Step::Continue)
    }

    fn save_and_exit(&mut self) -> Result<Exit> {
        let exit = match codec::save(&self.store, self.config.data_file()) {
            Ok(()) => {
                writeln!(self.output, "Data saved successfully.")?;
                Exit::Saved
            }
            Err(e) => {
                warn!(error = %e, "save failed");
                writeln!(self.output, "Error saving data: {e}")?;
                Exit::SaveFailed
            }
        };
        writeln!(self.output, "Exiting. Goodbye!")?;
        Ok(exit)
    }

    fn interrupted(&mut self) -> Result<Exit> {
        info!(records = self.store.len(), "input closed, exiting without save");
        writeln!(self.output, "\nInput closed. Exiting without saving.")?;
        Ok(Exit::Interrupted)
    }

    /// Print `label`, then read one line. `None` means end of input.
    fn read_line(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
