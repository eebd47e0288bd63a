//! Menu entries and their parsing

use std::str::FromStr;

use crate::Error;

/// Main menu text, printed before every choice
pub const MAIN_MENU: &str = "\n--- Student Management System ---\n\
1. View all students\n\
2. Add a new student\n\
3. Update a student's information\n\
4. Delete a student\n\
5. Save and Exit";

/// Field menu text, printed during an update
pub const FIELD_MENU: &str = "\nUpdate Options:\n1. Name\n2. Age\n3. Grade\n4. Subjects";

/// Main menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// List every record.
    View,
    /// Prompt for and add a new record.
    Add,
    /// Change one field of an existing record.
    Update,
    /// Remove a record by id.
    Delete,
    /// Persist the store and leave the loop.
    SaveAndExit,
}

impl FromStr for MenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::View),
            "2" => Ok(Self::Add),
            "3" => Ok(Self::Update),
            "4" => Ok(Self::Delete),
            "5" => Ok(Self::SaveAndExit),
            other => Err(Error::InvalidMenuChoice(other.to_string())),
        }
    }
}

/// Field targeted by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateField {
    /// Student name
    Name,
    /// Student age
    Age,
    /// Letter grade
    Grade,
    /// Subject list
    Subjects,
}

impl UpdateField {
    /// Prompt shown when asking for the new value.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Name => "Enter new name: ",
            Self::Age => "Enter new age: ",
            Self::Grade => "Enter new grade: ",
            Self::Subjects => "Enter new subjects (comma-separated): ",
        }
    }
}

impl FromStr for UpdateField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Name),
            "2" => Ok(Self::Age),
            "3" => Ok(Self::Grade),
            "4" => Ok(Self::Subjects),
            other => Err(Error::InvalidField(other.to_string())),
        }
    }
}
